//! # ScoreStore Trait
//!
//! The seam between request handling and storage. Handlers hold an
//! `Arc<dyn ScoreStore>`, so a persistent or distributed backend can be
//! swapped in without touching validation or scoring.

use std::fmt;

use async_trait::async_trait;
use receipt_core::Points;
use uuid::Uuid;

use crate::error::StoreResult;

// =============================================================================
// Receipt Id
// =============================================================================

/// Opaque identifier handed back for a scored receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generates a fresh random (UUID v4) id.
    pub fn generate() -> Self {
        ReceiptId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wraps an id issued elsewhere, e.g. read back from a persistent backend.
impl From<String> for ReceiptId {
    fn from(id: String) -> Self {
        ReceiptId(id)
    }
}

impl From<ReceiptId> for String {
    fn from(id: ReceiptId) -> Self {
        id.0
    }
}

// =============================================================================
// Store Trait
// =============================================================================

/// Keyed storage of point totals.
///
/// Records are write-once: there is no update or delete.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Stores `points` under a newly generated id and returns the id.
    async fn save_points(&self, points: Points) -> StoreResult<ReceiptId>;

    /// Looks up the points stored under `id`.
    ///
    /// Fails with [`crate::StoreError::NotFound`] for unknown ids.
    async fn get_points(&self, id: &str) -> StoreResult<Points>;

    /// Number of stored records.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
