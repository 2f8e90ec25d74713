//! Health check service implementation.
//!
//! Reports liveness and how many receipts are held.

use std::sync::Arc;

use receipt_store::ScoreStore;

use crate::responses::HealthResponse;

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "receipt-api";

/// Health service implementation.
#[derive(Clone)]
pub struct HealthService {
    store: Arc<dyn ScoreStore>,
}

impl HealthService {
    /// Create a new health service.
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        HealthService { store }
    }

    /// Simple health check.
    pub async fn check(&self) -> HealthResponse {
        HealthResponse {
            status: "ok".to_string(),
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            receipts: self.store.len().await,
        }
    }
}
