//! # receipt-store: Score Storage for the Receipt Processor
//!
//! Maps generated receipt ids to point totals.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Processor Data Flow                         │
//! │                                                                         │
//! │  receipt-api (process_receipt / get_points)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 receipt-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────┐         ┌──────────────────────────┐    │   │
//! │  │   │  ScoreStore      │ ◄────── │  InMemoryScoreStore      │    │   │
//! │  │   │  (trait)         │         │  RwLock<HashMap>         │    │   │
//! │  │   └──────────────────┘         └──────────────────────────┘    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The `ScoreStore` trait and `ReceiptId`
//! - [`memory`] - Volatile in-memory backend
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use receipt_store::{InMemoryScoreStore, ScoreStore};
//!
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! rt.block_on(async {
//!     let store = InMemoryScoreStore::new();
//!     let id = store.save_points(18).await.unwrap();
//!     assert_eq!(store.get_points(id.as_str()).await.unwrap(), 18);
//! });
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryScoreStore;
pub use store::{ReceiptId, ScoreStore};
