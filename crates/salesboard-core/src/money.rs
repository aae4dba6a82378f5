//! # Money Module
//!
//! Rounding of monetary values for the report.
//!
//! ## Why Round Only At The End?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ACCUMULATE RAW, ROUND ONCE                                             │
//! │                                                                         │
//! │  Line profits are summed as f64 without intermediate rounding:          │
//! │    0.125 + 0.125 + 0.125 = 0.375  → report: 0.38                        │
//! │                                                                         │
//! │  Rounding every line first would drift:                                 │
//! │    0.13 + 0.13 + 0.13 = 0.39      → off by one cent                     │
//! │                                                                         │
//! │  OUR RULE: revenue, profit and bonus are rounded exactly once,          │
//! │  when the report row is shaped.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salesboard_core::money::round_to_cents;
//!
//! assert_eq!(round_to_cents(10.994), 10.99);
//! assert_eq!(round_to_cents(10.995001), 11.0);
//! assert_eq!(round_to_cents(-2.345001), -2.35);
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept in report values.
const CENT_PLACES: u32 = 2;

/// Rounds a monetary amount to 2 decimal places.
///
/// ## Rounding Rule
/// Round half away from zero on the exact value the f64 holds. The amount
/// is widened to a [`Decimal`] first, so an amount such as `2.675`, stored
/// as `2.67499999…`, rounds to `2.67`, the same digits `toFixed(2)` prints.
/// Only true binary halves such as `0.125` round away from zero.
///
/// Values a `Decimal` can't hold (NaN, infinities, beyond ±7.9e28) are
/// returned unchanged. Negative zero is normalized to `0.0` so a last-place
/// seller with a negative profit still reports a bonus of `0`.
///
/// ## Example
/// ```rust
/// use salesboard_core::money::round_to_cents;
///
/// assert_eq!(round_to_cents(0.125), 0.13);
/// assert_eq!(round_to_cents(2.675), 2.67);
/// assert_eq!(round_to_cents(-0.0).to_string(), "0");
/// ```
pub fn round_to_cents(amount: f64) -> f64 {
    let rounded = match Decimal::from_f64_retain(amount) {
        Some(exact) => {
            let cents =
                exact.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero);
            // Scale is at most 2 here, so this is a single correctly rounded division
            cents.mantissa() as f64 / 10f64.powi(cents.scale() as i32)
        }
        None => amount,
    };
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents_basic() {
        assert_eq!(round_to_cents(180.0), 180.0);
        assert_eq!(round_to_cents(12.344), 12.34);
        assert_eq!(round_to_cents(12.346), 12.35);
    }

    #[test]
    fn test_round_half_away_from_zero() {
        // 0.125 and 0.375 are exact in binary, so the half is real
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(0.375), 0.38);
        assert_eq!(round_to_cents(-0.125), -0.13);
    }

    #[test]
    fn test_rounds_the_stored_binary_value() {
        // Stored as 2.67499…, 8.34499…, 1.11499…, 1.00499…
        assert_eq!(round_to_cents(2.675), 2.67);
        assert_eq!(round_to_cents(8.345), 8.34);
        assert_eq!(round_to_cents(1.115), 1.11);
        assert_eq!(round_to_cents(1.005), 1.0);
        assert_eq!(round_to_cents(-2.675), -2.67);
    }

    #[test]
    fn test_unrepresentable_values_pass_through() {
        assert!(round_to_cents(f64::NAN).is_nan());
        assert_eq!(round_to_cents(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_to_cents(1e300), 1e300);
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let bonus: f64 = -250.0 * 0.0;
        assert!(bonus.is_sign_negative());
        let rounded = round_to_cents(bonus);
        assert!(rounded.is_sign_positive());
        assert_eq!(serde_json::to_string(&rounded).unwrap(), "0.0");
    }

    #[test]
    fn test_tiny_values_round_to_zero() {
        assert_eq!(round_to_cents(0.004), 0.0);
        assert!(round_to_cents(-0.004).is_sign_positive());
    }

    #[test]
    fn test_accumulate_then_round() {
        let raw = 0.125 + 0.125 + 0.125;
        assert_eq!(round_to_cents(raw), 0.38);
        // Rounding each term first would have produced 0.39
        let eager = round_to_cents(0.125) * 3.0;
        assert_ne!(round_to_cents(eager), round_to_cents(raw));
    }
}
