//! # Receipt API
//!
//! HTTP service that scores receipts and serves the scores back by id.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Receipt API Services                            │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌────────────────────────────────┐  │
//! │  │  ReceiptService              │  │  HealthService                 │  │
//! │  │                              │  │                                │  │
//! │  │ • POST /receipts/process     │  │ • GET /health                  │  │
//! │  │ • GET  /receipts/{id}/points │  │                                │  │
//! │  └──────────────┬───────────────┘  └───────────────┬────────────────┘  │
//! │                 │                                  │                    │
//! │  ┌──────────────▼──────────────────────────────────▼────────────────┐  │
//! │  │                 Arc<dyn ScoreStore> (shared)                      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `APP_HOST` - Interface to bind (default: 0.0.0.0)
//! - `APP_PORT` - HTTP port (default: 8080)
//! - `APP_REQUEST_TIMEOUT_SECS` - Per-request deadline (default: 60)
//! - `APP_SHUTDOWN_TIMEOUT_SECS` - Graceful shutdown budget (default: 10)
//! - `APP_JSON_LOGS` - JSON log lines (default: true)
//! - `RUST_LOG` - Log filter (default: receipt_api=info,tower_http=info)

pub mod config;
pub mod error;
pub mod responses;
pub mod routes;
pub mod services;

use std::sync::Arc;

use receipt_store::ScoreStore;

// Re-exports
pub use crate::config::ApiConfig;
pub use error::ApiError;
pub use routes::build_router;
pub use services::health_service::HealthService;
pub use services::receipt_service::ReceiptService;

/// Shared application state.
pub struct AppState {
    pub config: ApiConfig,
    pub receipts: ReceiptService,
    pub health: HealthService,
}

impl AppState {
    /// Wire the services to one shared store.
    pub fn new(config: ApiConfig, store: Arc<dyn ScoreStore>) -> Self {
        AppState {
            config,
            receipts: ReceiptService::new(store.clone()),
            health: HealthService::new(store),
        }
    }
}
