//! Receipt service implementation.
//!
//! The two operations behind the receipt endpoints.
//!
//! ## Processing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  process_receipt(raw bytes)                                             │
//! │       │                                                                 │
//! │       ├── serde_json::from_slice   ✗ → MalformedPayload (400)          │
//! │       ├── validate_receipt         ✗ → Validation       (400)          │
//! │       ├── points_breakdown            (pure, cannot fail)               │
//! │       ├── store.save_points        ✗ → Storage          (500)          │
//! │       │                                                                 │
//! │       └── ReceiptId                                                     │
//! │                                                                         │
//! │  get_points(id)                                                         │
//! │       └── store.get_points         ✗ → NotFound (404) / Storage (500)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is retried: scoring is deterministic and a failed write is
//! reported straight back to the caller.

use std::sync::Arc;

use receipt_core::{points_breakdown, validate_receipt, Points, Receipt};
use receipt_store::{ReceiptId, ScoreStore};
use tracing::{debug, error, info, warn};

use crate::error::{ApiError, ApiResult};

/// Receipt service implementation.
#[derive(Clone)]
pub struct ReceiptService {
    store: Arc<dyn ScoreStore>,
}

impl ReceiptService {
    /// Create a new receipt service on top of a store.
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        ReceiptService { store }
    }

    /// Decode, validate, score and store a receipt.
    pub async fn process_receipt(&self, payload: &[u8]) -> ApiResult<ReceiptId> {
        let receipt: Receipt = serde_json::from_slice(payload).map_err(|e| {
            warn!(error = %e, "Failed to decode receipt");
            ApiError::MalformedPayload(e.to_string())
        })?;

        let validated = validate_receipt(&receipt).map_err(|e| {
            warn!(error = %e, field = e.field(), "Invalid receipt");
            ApiError::from(e)
        })?;

        let breakdown = points_breakdown(&validated);
        let points = breakdown.total();
        debug!(?breakdown, "Scored receipt");

        let id = self.store.save_points(points).await.map_err(|e| {
            error!(error = %e, points, "Failed to save points");
            ApiError::save_failed(e)
        })?;

        info!(id = %id, points, "Receipt processed");
        Ok(id)
    }

    /// Look up the points for a processed receipt.
    pub async fn get_points(&self, id: &str) -> ApiResult<Points> {
        match self.store.get_points(id).await {
            Ok(points) => {
                info!(id, points, "Points retrieved");
                Ok(points)
            }
            Err(e) if e.is_not_found() => {
                warn!(id, "Receipt not found");
                Err(ApiError::NotFound(id.to_string()))
            }
            Err(e) => {
                error!(error = %e, id, "Failed to get points");
                Err(ApiError::lookup_failed(e))
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
