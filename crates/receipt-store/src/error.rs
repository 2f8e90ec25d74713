//! # Store Error Types
//!
//! Error types for score storage.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ScoreStore backend                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in receipt-api) ← 404 for NotFound, 500 otherwise           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Score storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No score is stored under this id.
    #[error("receipt not found: {id}")]
    NotFound { id: String },

    /// A freshly generated id is already taken. The existing record is left
    /// untouched.
    #[error("duplicate receipt id: {id}")]
    DuplicateId { id: String },

    /// Backend failure.
    #[error("internal store error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a NotFound error for the given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        StoreError::NotFound { id: id.into() }
    }

    /// True for [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("abc");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "receipt not found: abc");
        assert!(!StoreError::Internal("boom".to_string()).is_not_found());
    }
}
