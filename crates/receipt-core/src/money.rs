//! # Money Module
//!
//! Provides the `Amount` type for receipt totals and prices, and the parser
//! that turns receipt amount text into it.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004   ❌ "has cents"?                    │
//! │    4.35 * 100 = 434.99999999999994   ❌ "multiple of 0.25"?             │
//! │                                                                         │
//! │  OUR SOLUTION: Exact Decimals                                           │
//! │    "10.25" ──► Decimal(10.25) ──► × 4 = 41.00 → whole → quarter ✓      │
//! │    "0.10"  ──► Decimal(0.10)  ──► × 4 =  0.40 → not whole            │
//! │                                                                         │
//! │  Beyond Decimal (|x| ≥ 7.9e28, or more than 28 fractional digits):     │
//! │    "1e30"  ──► f64 ──► every f64 ≥ 2^53 is whole                        │
//! │    "1e-30" ──► f64 ──► fmod is exact, so the rules still hold           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipt_core::money::Amount;
//!
//! let total = Amount::parse("10.25").unwrap();
//! assert!(total.is_quarter_multiple());
//! assert!(!total.is_whole());
//! ```

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

// =============================================================================
// Amount Type
// =============================================================================

/// A finite amount parsed from receipt text.
///
/// ## Design Decisions
/// - **Exact first**: anything `Decimal` can hold without rounding is kept
///   exactly, so `0.10` is never mistaken for `0.1000000000000000055`
/// - **f64 fallback**: finite values outside that range are still valid
///   numbers and keep scoring sensibly instead of being rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// Held exactly.
    Exact(Decimal),

    /// Finite, but outside what `Decimal` holds exactly. Nearest `f64`.
    Approximate(f64),
}

impl Amount {
    /// Parses receipt amount text.
    ///
    /// Accepts plain (`"12.50"`, `"-3"`, `"+1.0"`) and scientific (`"1.5e2"`)
    /// notation. Empty text, surrounding whitespace, digit separators
    /// (`"1_000"`), `NaN`, infinities and values that overflow `f64`
    /// (`"1e400"`) are rejected.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Amount;
    ///
    /// assert!(Amount::parse("35.35").is_some());
    /// assert!(Amount::parse("2.5e1").is_some());
    /// assert!(Amount::parse("1e30").is_some());
    /// assert!(Amount::parse("abc").is_none());
    /// assert!(Amount::parse(" 1.00").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() || text.trim() != text || text.contains('_') {
            return None;
        }

        if let Some(exact) = parse_exact(text) {
            return Some(Amount::Exact(exact));
        }

        f64::from_str(text)
            .ok()
            .filter(|value| value.is_finite())
            .map(Amount::Approximate)
    }

    /// True when there is no fractional part, e.g. `12.00`.
    pub fn is_whole(&self) -> bool {
        match *self {
            Amount::Exact(value) => value.fract().is_zero(),
            Amount::Approximate(value) => value % 1.0 == 0.0,
        }
    }

    /// True when this is a whole multiple of `0.25`.
    pub fn is_quarter_multiple(&self) -> bool {
        match *self {
            // `× 4` only overflows above 2e28, where every Decimal is whole.
            Amount::Exact(value) => {
                value.fract().is_zero()
                    || value
                        .checked_mul(Decimal::from(4))
                        .is_some_and(|quarters| quarters.fract().is_zero())
            }
            Amount::Approximate(value) => value % 0.25 == 0.0,
        }
    }

    /// `ceil(self × factor)` as a whole number.
    ///
    /// Results at or below zero give 0; results beyond `u64` saturate.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Amount;
    /// use rust_decimal::Decimal;
    ///
    /// let fifth = Decimal::new(2, 1);
    /// assert_eq!(Amount::parse("12.25").unwrap().ceil_mul(fifth), 3);
    /// assert_eq!(Amount::parse("-4.00").unwrap().ceil_mul(fifth), 0);
    /// ```
    pub fn ceil_mul(&self, factor: Decimal) -> u64 {
        match *self {
            Amount::Exact(value) => match value.checked_mul(factor) {
                Some(product) if product <= Decimal::ZERO => 0,
                Some(product) => product.ceil().to_u64().unwrap_or(u64::MAX),
                None if value.is_sign_negative() != factor.is_sign_negative() => 0,
                None => u64::MAX,
            },
            Amount::Approximate(value) => {
                let product = value * factor.to_f64().unwrap_or(0.0);
                // `as` saturates: +inf becomes u64::MAX, negatives become 0
                product.ceil() as u64
            }
        }
    }
}

/// Exact parse, or `None` when `Decimal` would have to round or overflow.
fn parse_exact(text: &str) -> Option<Decimal> {
    match Decimal::from_str_exact(text) {
        Ok(value) => Some(value),
        Err(_) if text.contains(['e', 'E']) => Decimal::from_scientific(text).ok(),
        Err(_) => None,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(text: &str) -> Amount {
        Amount::parse(text).unwrap()
    }

    #[test]
    fn test_parse_plain_and_scientific() {
        assert_eq!(amount("12.00"), Amount::Exact(Decimal::new(1200, 2)));
        assert_eq!(amount("-3"), Amount::Exact(Decimal::from(-3)));
        assert_eq!(amount("1.5e2"), Amount::Exact(Decimal::from(150)));
        assert_eq!(
            amount("100000000000000000"),
            Amount::Exact(Decimal::from(100_000_000_000_000_000i64))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Amount::parse(""), None);
        assert_eq!(Amount::parse("abc"), None);
        assert_eq!(Amount::parse("12.0.0"), None);
        assert_eq!(Amount::parse("NaN"), None);
        assert_eq!(Amount::parse("inf"), None);
        assert_eq!(Amount::parse("1e400"), None);
        assert_eq!(Amount::parse(" 1.00"), None);
        assert_eq!(Amount::parse("1.00\n"), None);
        assert_eq!(Amount::parse("1_000"), None);
    }

    #[test]
    fn test_values_beyond_decimal_fall_back_to_f64() {
        assert_eq!(amount("1e30"), Amount::Approximate(1e30));
        assert_eq!(amount("1e-30"), Amount::Approximate(1e-30));
        assert_eq!(amount("-1e30"), Amount::Approximate(-1e30));
    }

    #[test]
    fn test_is_whole() {
        assert!(amount("12.00").is_whole());
        assert!(amount("-5").is_whole());
        assert!(amount("100000000000000000").is_whole());
        assert!(amount("79228162514264337593543950335").is_whole());
        assert!(amount("1e30").is_whole());
        assert!(!amount("12.01").is_whole());
        assert!(!amount("1.005").is_whole());
        assert!(!amount("1e-30").is_whole());
    }

    /// 0.10 is the classic value a float modulo gets wrong.
    #[test]
    fn test_quarter_multiples_are_exact() {
        assert!(amount("10.25").is_quarter_multiple());
        assert!(amount("0.75").is_quarter_multiple());
        assert!(amount("-0.50").is_quarter_multiple());
        assert!(!amount("0.10").is_quarter_multiple());
        assert!(!amount("2.65").is_quarter_multiple());
        assert!(!amount("0.251").is_quarter_multiple());
    }

    #[test]
    fn test_quarter_multiples_at_the_extremes() {
        assert!(amount("100000000000000000").is_quarter_multiple());
        assert!(amount("100000000000000000.25").is_quarter_multiple());
        assert!(amount("79228162514264337593543950335").is_quarter_multiple());
        assert!(amount("1e30").is_quarter_multiple());
        assert!(!amount("1e-30").is_quarter_multiple());
    }

    #[test]
    fn test_ceil_mul() {
        let fifth = Decimal::new(2, 1);
        assert_eq!(amount("5.00").ceil_mul(fifth), 1);
        assert_eq!(amount("5.01").ceil_mul(fifth), 2);
        assert_eq!(amount("0").ceil_mul(fifth), 0);
        assert_eq!(amount("-10.00").ceil_mul(fifth), 0);
        assert_eq!(amount("1e-30").ceil_mul(fifth), 1);
        assert_eq!(amount("1e30").ceil_mul(fifth), u64::MAX);
        assert_eq!(amount("-1e30").ceil_mul(fifth), 0);
        assert_eq!(amount("79228162514264337593543950335").ceil_mul(fifth), u64::MAX);
    }
}
