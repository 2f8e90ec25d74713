//! # Validation Module
//!
//! Receipt validation for the receipt processor.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  validate_receipt(&Receipt)                                             │
//! │       │                                                                 │
//! │       ├── 1. retailer blank?          → EmptyRetailer                   │
//! │       ├── 2. purchaseDate not Y-M-D?  → InvalidDate                     │
//! │       ├── 3. purchaseTime not HH:MM?  → InvalidTime                     │
//! │       ├── 4. items empty?             → NoItems                         │
//! │       ├── 5. total not a number?      → InvalidTotal                    │
//! │       │                                                                 │
//! │       └── OK → ValidatedReceipt (ready for scoring)                     │
//! │                                                                         │
//! │  First failure wins. Item fields are NOT checked here.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::{validate_purchase_time, validate_total};
//!
//! assert!(validate_purchase_time("14:33").is_ok());
//! assert!(validate_total("twelve").is_err());
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::error::ValidationError;
use crate::money::Amount;
use crate::types::{Item, Receipt, ValidatedReceipt};
use crate::{DATE_FORMAT, TIME_FORMAT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates a receipt and parses its required fields.
///
/// Does not modify the input; the returned [`ValidatedReceipt`] owns copies.
pub fn validate_receipt(receipt: &Receipt) -> ValidationResult<ValidatedReceipt> {
    validate_retailer(&receipt.retailer)?;
    let purchase_date = validate_purchase_date(&receipt.purchase_date)?;
    let purchase_time = validate_purchase_time(&receipt.purchase_time)?;
    validate_items(&receipt.items)?;
    let total = validate_total(&receipt.total)?;

    Ok(ValidatedReceipt {
        retailer: receipt.retailer.clone(),
        purchase_date,
        purchase_time,
        items: receipt.items.clone(),
        total,
    })
}

// =============================================================================
// Field Validators
// =============================================================================

/// Retailer must contain something other than whitespace.
pub fn validate_retailer(retailer: &str) -> ValidationResult<()> {
    if retailer.trim().is_empty() {
        return Err(ValidationError::EmptyRetailer);
    }
    Ok(())
}

/// Parses a zero-padded `YYYY-MM-DD` calendar date.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_purchase_date;
///
/// assert!(validate_purchase_date("2022-03-20").is_ok());
/// assert!(validate_purchase_date("2022-02-30").is_err()); // no such day
/// assert!(validate_purchase_date("2022-3-20").is_err());  // not padded
/// ```
pub fn validate_purchase_date(text: &str) -> ValidationResult<NaiveDate> {
    let invalid = || ValidationError::InvalidDate {
        value: text.to_string(),
    };

    if !matches_layout(text, "dddd-dd-dd") {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|_| invalid())
}

/// Parses a zero-padded 24-hour `HH:MM` time.
pub fn validate_purchase_time(text: &str) -> ValidationResult<NaiveTime> {
    let invalid = || ValidationError::InvalidTime {
        value: text.to_string(),
    };

    if !matches_layout(text, "dd:dd") {
        return Err(invalid());
    }
    NaiveTime::parse_from_str(text, TIME_FORMAT).map_err(|_| invalid())
}

/// At least one item is required.
pub fn validate_items(items: &[Item]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::NoItems);
    }
    Ok(())
}

/// Parses the total as a finite decimal number.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::validate_total;
///
/// assert!(validate_total("35.35").is_ok());
/// assert!(validate_total("1e30").is_ok());  // beyond Decimal, still finite
/// assert!(validate_total("1e400").is_err()); // overflows
/// ```
pub fn validate_total(text: &str) -> ValidationResult<Amount> {
    Amount::parse(text).ok_or_else(|| ValidationError::InvalidTotal {
        value: text.to_string(),
    })
}

/// Checks `text` against a layout where `d` is an ASCII digit and any other
/// byte must match literally.
fn matches_layout(text: &str, layout: &str) -> bool {
    text.len() == layout.len()
        && text.bytes().zip(layout.bytes()).all(|(c, l)| match l {
            b'd' => c.is_ascii_digit(),
            _ => c == l,
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
