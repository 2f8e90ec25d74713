//! # Points Module
//!
//! The loyalty-points rules. Every rule is independent and additive, and
//! every rule contributes a non-negative amount.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                    Points                                         │
//! │  ──────────────────────  ─────────────────────────────────────────────  │
//! │  1. retailer             +1 per ASCII letter or digit                   │
//! │  2. round dollar total   +50 if total has no cents                      │
//! │  3. quarter multiple     +25 if total is a multiple of $0.25            │
//! │  4. item pairs           +5 per two items                               │
//! │  5. description length   +ceil(price × 0.2) per item whose trimmed      │
//! │                           description byte length is a multiple of 3    │
//! │  6. odd day              +6 if the day of month is odd                  │
//! │  7. afternoon            +10 if 14:00 < time < 16:00                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules 2 and 3 work on exact decimals (see [`crate::money`]), never on
//! floating point, for every total `Decimal` can hold.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::money::Amount;
use crate::types::{Item, Points, ValidatedReceipt};

const ROUND_DOLLAR_POINTS: Points = 50;
const QUARTER_MULTIPLE_POINTS: Points = 25;
const POINTS_PER_ITEM_PAIR: Points = 5;
const ODD_DAY_POINTS: Points = 6;
const AFTERNOON_POINTS: Points = 10;

/// Afternoon window bounds, in minutes after midnight (exclusive).
const AFTERNOON_START: u32 = 14 * 60;
const AFTERNOON_END: u32 = 16 * 60;

// =============================================================================
// Breakdown
// =============================================================================

/// Points earned by each rule for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: Points,
    pub round_dollar: Points,
    pub quarter_multiple: Points,
    pub item_pairs: Points,
    pub descriptions: Points,
    pub odd_day: Points,
    pub afternoon: Points,
}

impl PointsBreakdown {
    /// Sum of all rules. Saturates instead of overflowing.
    pub fn total(&self) -> Points {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, Points::saturating_add)
    }
}

/// Evaluates every rule against a validated receipt.
pub fn points_breakdown(receipt: &ValidatedReceipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer: retailer_points(receipt.retailer()),
        round_dollar: round_dollar_points(receipt.total()),
        quarter_multiple: quarter_multiple_points(receipt.total()),
        item_pairs: item_pair_points(receipt.items().len()),
        descriptions: receipt
            .items()
            .iter()
            .map(description_points)
            .fold(0, Points::saturating_add),
        odd_day: odd_day_points(receipt.purchase_date()),
        afternoon: afternoon_points(receipt.purchase_time()),
    }
}

/// Scores a validated receipt.
///
/// Pure: the same receipt always yields the same total.
pub fn calculate_points(receipt: &ValidatedReceipt) -> Points {
    points_breakdown(receipt).total()
}

// =============================================================================
// Individual Rules
// =============================================================================

/// Rule 1: one point per ASCII letter or digit. `"M&M Corner Market"` → 14.
pub fn retailer_points(retailer: &str) -> Points {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as Points
}

/// Rule 2.
pub fn round_dollar_points(total: Amount) -> Points {
    if total.is_whole() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// Rule 3. Sub-cent totals are never quarter multiples.
pub fn quarter_multiple_points(total: Amount) -> Points {
    if total.is_quarter_multiple() {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

/// Rule 4.
pub fn item_pair_points(item_count: usize) -> Points {
    (item_count / 2) as Points * POINTS_PER_ITEM_PAIR
}

/// Rule 5, for a single item.
///
/// Length is counted in UTF-8 bytes, so `"Café!"` is 6 long. An empty
/// (after trimming) description counts as length 0, which qualifies.
/// Unparsable and negative prices score 0.
///
/// ## Example
/// ```rust
/// use receipt_core::points::description_points;
/// use receipt_core::Item;
///
/// assert_eq!(description_points(&Item::new("Emils Cheese Pizza", "12.25")), 3);
/// assert_eq!(description_points(&Item::new("Dasani", "1.40")), 1);
/// assert_eq!(description_points(&Item::new("Pepsi", "1.40")), 0);
/// ```
pub fn description_points(item: &Item) -> Points {
    if item.short_description.trim().len() % 3 != 0 {
        return 0;
    }

    Amount::parse(&item.price).map_or(0, |price| price.ceil_mul(Decimal::new(2, 1)))
}

/// Rule 6.
pub fn odd_day_points(date: NaiveDate) -> Points {
    if date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Rule 7. Both 14:00 and 16:00 are outside the window.
pub fn afternoon_points(time: NaiveTime) -> Points {
    let minutes = time.hour() * 60 + time.minute();
    if minutes > AFTERNOON_START && minutes < AFTERNOON_END {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Receipt;
    use crate::validation::validate_receipt;
    use proptest::prelude::*;

    fn amount(text: &str) -> Amount {
        Amount::parse(text).unwrap()
    }

    fn time(text: &str) -> NaiveTime {
        NaiveTime::parse_from_str(text, "%H:%M").unwrap()
    }

    fn score(receipt: Receipt) -> Points {
        calculate_points(&validate_receipt(&receipt).unwrap())
    }

    #[test]
    fn test_retailer_points() {
        assert_eq!(retailer_points("Target"), 6);
        assert_eq!(retailer_points("M&M Corner Market"), 14);
        assert_eq!(retailer_points("Café 42"), 5);
        assert_eq!(retailer_points("&&& ---"), 0);
    }

    #[test]
    fn test_round_dollar_points() {
        assert_eq!(round_dollar_points(amount("12.00")), 50);
        assert_eq!(round_dollar_points(amount("12")), 50);
        assert_eq!(round_dollar_points(amount("12.01")), 0);
        assert_eq!(round_dollar_points(amount("12.001")), 0);
    }

    #[test]
    fn test_quarter_multiple_points() {
        assert_eq!(quarter_multiple_points(amount("10.25")), 25);
        assert_eq!(quarter_multiple_points(amount("9.00")), 25);
        assert_eq!(quarter_multiple_points(amount("10.10")), 0);
        assert_eq!(quarter_multiple_points(amount("0.10")), 0);
        assert_eq!(quarter_multiple_points(amount("2.65")), 0);
        assert_eq!(quarter_multiple_points(amount("0.2500")), 25);
    }

    #[test]
    fn test_very_large_whole_totals_score() {
        assert_eq!(round_dollar_points(amount("100000000000000000")), 50);
        assert_eq!(quarter_multiple_points(amount("100000000000000000")), 25);
        assert_eq!(round_dollar_points(amount("79228162514264337593543950335")), 50);
        assert_eq!(quarter_multiple_points(amount("79228162514264337593543950335")), 25);
    }

    #[test]
    fn test_totals_beyond_decimal_still_score() {
        assert_eq!(round_dollar_points(amount("1e30")), 50);
        assert_eq!(quarter_multiple_points(amount("1e30")), 25);
        assert_eq!(round_dollar_points(amount("1e-30")), 0);
        assert_eq!(quarter_multiple_points(amount("1e-30")), 0);
    }

    #[test]
    fn test_item_pair_points() {
        assert_eq!(item_pair_points(1), 0);
        assert_eq!(item_pair_points(2), 5);
        assert_eq!(item_pair_points(4), 10);
        assert_eq!(item_pair_points(5), 10);
    }

    #[test]
    fn test_description_points_trims_and_rounds_up() {
        let item = Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00");
        assert_eq!(description_points(&item), 3);

        // 0.2 × 5.00 is exactly 1, so no rounding up
        assert_eq!(description_points(&Item::new("abc", "5.00")), 1);
        assert_eq!(description_points(&Item::new("abc", "5.01")), 2);
    }

    #[test]
    fn test_description_length_counts_bytes() {
        // 5 chars, 6 bytes
        assert_eq!(description_points(&Item::new("Café!", "10.00")), 2);
        // 3 chars, 4 bytes
        assert_eq!(description_points(&Item::new("Caé", "10.00")), 0);
    }

    #[test]
    fn test_description_points_empty_description_qualifies() {
        assert_eq!(description_points(&Item::new("", "10.00")), 2);
        assert_eq!(description_points(&Item::new("   ", "10.00")), 2);
    }

    #[test]
    fn test_description_points_bad_prices_score_zero() {
        assert_eq!(description_points(&Item::new("abc", "free")), 0);
        assert_eq!(description_points(&Item::new("abc", "")), 0);
        assert_eq!(description_points(&Item::new("abc", "-10.00")), 0);
        assert_eq!(description_points(&Item::new("abc", "0")), 0);
        assert_eq!(description_points(&Item::new("abc", "-1e30")), 0);
    }

    #[test]
    fn test_odd_day_points() {
        assert_eq!(odd_day_points(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()), 6);
        assert_eq!(odd_day_points(NaiveDate::from_ymd_opt(2022, 1, 31).unwrap()), 6);
        assert_eq!(odd_day_points(NaiveDate::from_ymd_opt(2022, 3, 20).unwrap()), 0);
    }

    #[test]
    fn test_afternoon_window_is_exclusive() {
        assert_eq!(afternoon_points(time("14:01")), 10);
        assert_eq!(afternoon_points(time("15:59")), 10);
        assert_eq!(afternoon_points(time("14:00")), 0);
        assert_eq!(afternoon_points(time("16:00")), 0);
        assert_eq!(afternoon_points(time("13:01")), 0);
    }

    #[test]
    fn test_two_item_target_receipt_scores_18() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                Item::new("Pepsi - 12-oz", "1.25"),
                Item::new("Dasani", "1.40"),
            ],
            total: "2.65".to_string(),
        };

        let breakdown = points_breakdown(&validate_receipt(&receipt).unwrap());
        assert_eq!(
            breakdown,
            PointsBreakdown {
                retailer: 6,
                round_dollar: 0,
                quarter_multiple: 0,
                item_pairs: 5,
                descriptions: 1,
                odd_day: 6,
                afternoon: 0,
            }
        );
        assert_eq!(breakdown.total(), 18);
    }

    #[test]
    fn test_five_item_target_receipt_scores_28() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                Item::new("Mountain Dew 12PK", "6.49"),
                Item::new("Emils Cheese Pizza", "12.25"),
                Item::new("Knorr Creamy Chicken", "1.26"),
                Item::new("Doritos Nacho Cheese", "3.35"),
                Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: "35.35".to_string(),
        };
        assert_eq!(score(receipt), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let receipt = Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![Item::new("Gatorade", "2.25"); 4],
            total: "9.00".to_string(),
        };
        assert_eq!(score(receipt), 109);
    }

    #[test]
    fn test_breakdown_total_saturates() {
        let breakdown = PointsBreakdown {
            descriptions: Points::MAX,
            odd_day: 6,
            ..PointsBreakdown::default()
        };
        assert_eq!(breakdown.total(), Points::MAX);
    }

    fn receipt_strategy() -> impl Strategy<Value = Receipt> {
        let item = ("[ -~]{0,24}", "-?[0-9]{1,4}(\\.[0-9]{1,3})?|[a-z]{0,4}")
            .prop_map(|(description, price)| Item::new(description, price));

        (
            "[ -~]{0,10}[A-Za-z0-9][ -~]{0,10}",
            2000i32..2030,
            1u32..=12,
            1u32..=28,
            0u32..24,
            0u32..60,
            prop::collection::vec(item, 1..12),
            "-?[0-9]{1,5}(\\.[0-9]{1,3})?",
        )
            .prop_map(
                |(retailer, year, month, day, hour, minute, items, total)| Receipt {
                    retailer,
                    purchase_date: format!("{year:04}-{month:02}-{day:02}"),
                    purchase_time: format!("{hour:02}:{minute:02}"),
                    items,
                    total,
                },
            )
    }

    proptest! {
        #[test]
        fn prop_scoring_is_deterministic(receipt in receipt_strategy()) {
            let validated = validate_receipt(&receipt).unwrap();
            prop_assert_eq!(calculate_points(&validated), calculate_points(&validated));
            prop_assert_eq!(
                calculate_points(&validated),
                calculate_points(&validate_receipt(&receipt.clone()).unwrap())
            );
        }

        #[test]
        fn prop_total_is_sum_of_rules(receipt in receipt_strategy()) {
            let validated = validate_receipt(&receipt).unwrap();
            let breakdown = points_breakdown(&validated);
            prop_assert_eq!(breakdown.total(), calculate_points(&validated));
            prop_assert!(breakdown.total() >= breakdown.retailer);
            prop_assert!(breakdown.round_dollar == 0 || breakdown.round_dollar == 50);
            prop_assert!(breakdown.quarter_multiple == 0 || breakdown.quarter_multiple == 25);
        }

        #[test]
        fn prop_round_dollar_totals_are_quarter_multiples(dollars in -10_000i64..10_000) {
            let total = Amount::Exact(Decimal::new(dollars * 100, 2));
            prop_assert_eq!(round_dollar_points(total), 50);
            prop_assert_eq!(quarter_multiple_points(total), 25);
        }
    }
}
