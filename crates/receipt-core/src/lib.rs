//! # receipt-core: Pure Business Logic for the Receipt Processor
//!
//! This crate is the **heart** of the receipt processor. It contains the
//! receipt types, validation, and the loyalty-points rules as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Processor Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    receipt-api (axum)                           │   │
//! │  │    POST /receipts/process      GET /receipts/{id}/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ receipt-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │validation │  │  points   │  │   │
//! │  │   │  Receipt  │  │  Amount   │  │ 5 checks  │  │  7 rules  │  │   │
//! │  │   │   Item    │  │  (exact)  │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 receipt-store (ScoreStore)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item, ValidatedReceipt)
//! - [`money`] - Amount parsing with exact decimal arithmetic
//! - [`error`] - Validation error types
//! - [`validation`] - Receipt validation
//! - [`points`] - The points rules
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{calculate_points, validate_receipt, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![
//!         Item::new("Pepsi - 12-oz", "1.25"),
//!         Item::new("Dasani", "1.40"),
//!     ],
//!     total: "2.65".to_string(),
//! };
//!
//! let validated = validate_receipt(&receipt).unwrap();
//! assert_eq!(calculate_points(&validated), 18);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use receipt_core::Amount` instead of
// `use receipt_core::money::Amount`

pub use error::ValidationError;
pub use money::Amount;
pub use points::{calculate_points, points_breakdown, PointsBreakdown};
pub use types::*;
pub use validation::validate_receipt;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Accepted layout of `purchaseDate`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted layout of `purchaseTime` (24-hour clock).
pub const TIME_FORMAT: &str = "%H:%M";
