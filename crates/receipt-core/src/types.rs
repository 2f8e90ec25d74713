//! # Domain Types
//!
//! Core domain types used throughout the receipt processor.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   validate    ┌──────────────────────┐            │
//! │  │    Receipt      │ ────────────► │   ValidatedReceipt   │            │
//! │  │  ─────────────  │               │  ──────────────────  │            │
//! │  │  retailer       │               │  retailer            │            │
//! │  │  purchaseDate   │  (raw text)   │  NaiveDate           │  (parsed)  │
//! │  │  purchaseTime   │               │  NaiveTime           │            │
//! │  │  items [Item]   │               │  items [Item]        │            │
//! │  │  total          │               │  Amount              │            │
//! │  └─────────────────┘               └──────────┬───────────┘            │
//! │                                               │ calculate_points        │
//! │                                               ▼                         │
//! │                                          Points (u64)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::money::Amount;

/// A loyalty-points total.
pub type Points = u64;

// =============================================================================
// Item
// =============================================================================

/// A line on a receipt.
///
/// Item fields are not validated; an unparsable price scores as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Free-text description as printed on the receipt.
    #[serde(deserialize_with = "null_as_default")]
    pub short_description: String,

    /// Unit price as decimal text, e.g. `"6.49"`.
    #[serde(deserialize_with = "null_as_default")]
    pub price: String,
}

impl Item {
    /// Creates an item from its description and price text.
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A submitted receipt, exactly as received.
///
/// Missing and `null` fields decode as empty so they are reported by
/// validation (e.g. `"items": null` yields "items are required"). A `null`
/// entry inside `items` decodes as an empty item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    /// Store name.
    #[serde(deserialize_with = "null_as_default")]
    pub retailer: String,

    /// `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_date: String,

    /// `HH:MM`, 24-hour clock.
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_time: String,

    /// Purchased items, in receipt order.
    #[serde(deserialize_with = "items_or_default")]
    pub items: Vec<Item>,

    /// Total paid as decimal text, e.g. `"35.35"`.
    #[serde(deserialize_with = "null_as_default")]
    pub total: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn items_or_default<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    let items: Option<Vec<Option<Item>>> = Option::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

// =============================================================================
// Validated Receipt
// =============================================================================

/// A receipt that passed validation, with its required fields parsed.
///
/// Only [`crate::validation::validate_receipt`] builds one, so holding a
/// `ValidatedReceipt` means every check has passed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedReceipt {
    pub(crate) retailer: String,
    pub(crate) purchase_date: NaiveDate,
    pub(crate) purchase_time: NaiveTime,
    pub(crate) items: Vec<Item>,
    pub(crate) total: Amount,
}

impl ValidatedReceipt {
    /// Store name, untrimmed.
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    pub fn purchase_date(&self) -> NaiveDate {
        self.purchase_date
    }

    pub fn purchase_time(&self) -> NaiveTime {
        self.purchase_time
    }

    /// Never empty.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn total(&self) -> Amount {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_uses_camel_case_wire_names() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{"shortDescription": "Dasani", "price": "1.40"}],
            "total": "1.40"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items, vec![Item::new("Dasani", "1.40")]);
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let receipt: Receipt = serde_json::from_str(r#"{"retailer": "Target"}"#).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert!(receipt.purchase_date.is_empty());
        assert!(receipt.items.is_empty());

        let item: Item = serde_json::from_str("{}").unwrap();
        assert_eq!(item, Item::default());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let json = r#"{
            "retailer": null,
            "purchaseDate": "2022-01-01",
            "purchaseTime": null,
            "items": null,
            "total": null
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert!(receipt.retailer.is_empty());
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert!(receipt.purchase_time.is_empty());
        assert!(receipt.items.is_empty());
        assert!(receipt.total.is_empty());
    }

    #[test]
    fn test_null_items_decode_as_empty_items() {
        let json = r#"{"items": [null, {"shortDescription": null, "price": "1.00"}]}"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(
            receipt.items,
            vec![Item::default(), Item::new("", "1.00")]
        );
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result: Result<Receipt, _> = serde_json::from_str(r#"{"total": 12.5}"#);
        assert!(result.is_err());
    }
}
