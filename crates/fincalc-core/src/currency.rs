//! Rupee formatting with Indian digit grouping and lakh/crore abbreviations.
//!
//! Two strings are produced for every amount:
//!
//! | Field        | Example (12,34,567) |
//! |--------------|---------------------|
//! | `display`    | `₹12.3L`            |
//! | `full_value` | `₹12,34,567`        |
//!
//! Formatting never consults the process locale, so the same amount always
//! renders to the same strings.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FinCalcError;
use crate::math::round_currency;
use crate::types::Money;
use crate::FinCalcResult;

pub const CURRENCY_SYMBOL: &str = "₹";

/// Abbreviation tiers, largest first.
const ABBREVIATIONS: [(Decimal, &str); 4] = [
    (dec!(1000000000000), "T"),
    (dec!(10000000), "CR"),
    (dec!(100000), "L"),
    (dec!(1000), "K"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedCurrency {
    /// Short form for cards and chart labels.
    pub display: String,
    /// Full amount, no decimals, Indian grouping.
    pub full_value: String,
    pub raw_value: Money,
}

/// Formats an amount as both an abbreviated and a full rupee string.
pub fn format_currency(value: Money) -> FormattedCurrency {
    let full_value = format_inr(value);
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = value.abs();

    for (threshold, symbol) in ABBREVIATIONS {
        if abs >= threshold {
            let scaled = (abs / threshold)
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
                .normalize();
            return FormattedCurrency {
                display: format!("{sign}{CURRENCY_SYMBOL}{scaled}{symbol}"),
                full_value,
                raw_value: value,
            };
        }
    }

    FormattedCurrency {
        display: full_value.clone(),
        full_value,
        raw_value: value,
    }
}

/// Entry point for callers holding floating-point amounts (chart code,
/// bindings). NaN, infinities and values outside the decimal range format
/// as zero.
pub fn format_currency_f64(value: f64) -> FormattedCurrency {
    let amount = if value.is_finite() {
        Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    format_currency(amount)
}

/// Full rupee string: whole units, rounded half away from zero, Indian grouping.
pub fn format_inr(value: Money) -> String {
    let rounded = round_currency(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = rounded.abs().trunc().to_string();
    format!("{sign}{CURRENCY_SYMBOL}{}", group_indian(&digits))
}

/// Groups a string of ASCII digits the Indian way: the last three digits,
/// then pairs (`1234567` → `12,34,567`).
pub fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, last_three) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

/// Parses a user-typed amount. Grouping commas, spaces, and a leading `₹`
/// are ignored, so `"₹12,34,567"` and `"1234567"` are the same amount.
pub fn parse_amount(input: &str) -> FinCalcResult<Money> {
    let normalized: String = input
        .trim()
        .trim_start_matches(CURRENCY_SYMBOL)
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if normalized.is_empty() {
        return Err(FinCalcError::invalid("amount", "empty input"));
    }
    normalized
        .parse::<Decimal>()
        .map_err(|e| FinCalcError::invalid("amount", format!("'{input}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn abbreviates_lakhs_to_one_decimal() {
        let formatted = format_currency(dec!(1234567));
        assert_eq!(formatted.display, "₹12.3L");
        assert_eq!(formatted.full_value, "₹12,34,567");
        assert_eq!(formatted.raw_value, dec!(1234567));
    }

    #[test]
    fn below_one_thousand_shows_full_amount() {
        let formatted = format_currency(dec!(999));
        assert_eq!(formatted.display, "₹999");
        assert_eq!(formatted.full_value, "₹999");
    }

    #[test]
    fn trims_trailing_zero_decimal() {
        assert_eq!(format_currency(dec!(5000)).display, "₹5K");
        assert_eq!(format_currency(dec!(10000000)).display, "₹1CR");
        assert_eq!(format_currency(dec!(2000000000000)).display, "₹2T");
    }

    #[test]
    fn rounding_up_to_whole_tier_value() {
        // 9.99999 lakh rounds to 10.0 and loses the decimal
        assert_eq!(format_currency(dec!(999999)).display, "₹10L");
    }

    #[test]
    fn picks_largest_tier_not_exceeding_value() {
        assert_eq!(format_currency(dec!(25000000)).display, "₹2.5CR");
        assert_eq!(format_currency(dec!(150000)).display, "₹1.5L");
        assert_eq!(format_currency(dec!(1500)).display, "₹1.5K");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        let formatted = format_currency(dec!(-250000));
        assert_eq!(formatted.display, "-₹2.5L");
        assert_eq!(formatted.full_value, "-₹2,50,000");
        assert_eq!(format_currency(dec!(-42)).display, "-₹42");
    }

    #[test]
    fn full_value_rounds_to_whole_rupees() {
        assert_eq!(format_inr(dec!(1234.5)), "₹1,235");
        assert_eq!(format_inr(dec!(0.4)), "₹0");
    }

    #[test]
    fn non_finite_floats_format_as_zero() {
        let formatted = format_currency_f64(f64::NAN);
        assert_eq!(formatted.display, "₹0");
        assert_eq!(formatted.full_value, "₹0");
        assert_eq!(formatted.raw_value, Decimal::ZERO);
        assert_eq!(format_currency_f64(f64::INFINITY).raw_value, Decimal::ZERO);
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(format_currency(dec!(87654321)), format_currency(dec!(87654321)));
    }

    #[test]
    fn group_indian_examples() {
        assert_eq!(group_indian("1"), "1");
        assert_eq!(group_indian("123"), "123");
        assert_eq!(group_indian("1234"), "1,234");
        assert_eq!(group_indian("12345"), "12,345");
        assert_eq!(group_indian("123456"), "1,23,456");
        assert_eq!(group_indian("1234567"), "12,34,567");
        assert_eq!(group_indian("1234567890"), "1,23,45,67,890");
    }

    #[test]
    fn parse_amount_accepts_grouped_input() {
        assert_eq!(parse_amount("₹12,34,567").unwrap(), dec!(1234567));
        assert_eq!(parse_amount(" 50000 ").unwrap(), dec!(50000));
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
    }
}
