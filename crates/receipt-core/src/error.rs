//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  └── ValidationError  - Receipt rejected before scoring                │
//! │                                                                         │
//! │  receipt-store errors (separate crate)                                 │
//! │  └── StoreError       - Lookup/insert failures                         │
//! │                                                                         │
//! │  receipt-api errors (in app)                                           │
//! │  └── ApiError         - What the HTTP client sees                      │
//! │                                                                         │
//! │  Flow: ValidationError / StoreError → ApiError → JSON {"error": ...}   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Display` text of every variant is sent to clients verbatim, so it is
//! kept stable. Offending values are carried for logging only.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Reasons a receipt is rejected before scoring.
///
/// Checks run in declaration order and the first failure wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Retailer is empty or only whitespace.
    #[error("retailer is required")]
    EmptyRetailer,

    /// Purchase date is not `YYYY-MM-DD`.
    #[error("invalid purchase date format")]
    InvalidDate { value: String },

    /// Purchase time is not 24-hour `HH:MM`.
    #[error("invalid purchase time format")]
    InvalidTime { value: String },

    /// The receipt lists no items.
    #[error("items are required")]
    NoItems,

    /// Total is not a finite decimal number.
    #[error("invalid total format")]
    InvalidTotal { value: String },
}

impl ValidationError {
    /// Name of the receipt field that failed, as it appears on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyRetailer => "retailer",
            ValidationError::InvalidDate { .. } => "purchaseDate",
            ValidationError::InvalidTime { .. } => "purchaseTime",
            ValidationError::NoItems => "items",
            ValidationError::InvalidTotal { .. } => "total",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
