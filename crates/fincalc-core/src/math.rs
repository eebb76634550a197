//! Numeric helpers shared by the calculators.
//!
//! Every component that turns an annual percentage into a monthly rate goes
//! through [`monthly_rate`], so the whole crate uses one convention: simple
//! division (`annual / 12`), not geometric de-compounding.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::FinCalcError;
use crate::types::{Money, Percent, Years};
use crate::FinCalcResult;

/// Longest horizon accepted anywhere in the engine.
pub const MAX_YEARS: Decimal = dec!(100);

/// Ceiling for any projected value, well inside the `Decimal` range.
const MAX_MAGNITUDE: f64 = 1e26;

/// Rounds to whole currency units, half away from zero.
pub fn round_currency(value: Money) -> Money {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Monthly decimal rate for an annual percentage (12 → 0.01).
pub fn monthly_rate(annual_rate_percent: Percent) -> Decimal {
    annual_rate_percent / dec!(1200)
}

/// Whole months in `years`, truncated (`floor(years * 12)`).
pub fn months_in(years: Years) -> u32 {
    if years <= Decimal::ZERO {
        return 0;
    }
    (years * dec!(12)).floor().to_u32().unwrap_or(0)
}

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
pub fn compound(rate: Decimal, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

/// (1 + r)^years for a possibly fractional horizon.
pub fn compound_years(rate: Decimal, years: Years) -> Decimal {
    if years.fract().is_zero() {
        if let Some(n) = years.to_u32() {
            return compound(rate, n);
        }
    }
    (Decimal::ONE + rate).powd(years)
}

pub fn require_non_negative(field: &str, value: Decimal) -> FinCalcResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(FinCalcError::invalid(field, "must be >= 0"));
    }
    Ok(())
}

/// Years must be in `[0, MAX_YEARS]`.
pub fn require_years(field: &str, years: Years) -> FinCalcResult<()> {
    require_non_negative(field, years)?;
    if years > MAX_YEARS {
        return Err(FinCalcError::invalid(
            field,
            format!("must be <= {MAX_YEARS} years"),
        ));
    }
    Ok(())
}

/// Rejects inputs whose projection would leave the `Decimal` range.
///
/// Each `(rate, periods)` pair contributes a `(1 + rate)^periods` growth
/// factor; the estimate is `amount * total_periods * Π factors`, taken in
/// log space so the check itself cannot overflow.
pub fn require_bounded_growth(
    field: &str,
    amount: Decimal,
    factors: &[(Decimal, u32)],
) -> FinCalcResult<()> {
    let amount = amount.abs().to_f64().unwrap_or(f64::INFINITY).max(1.0);
    let periods: u32 = factors.iter().map(|(_, n)| *n).sum();
    let growth: f64 = factors
        .iter()
        .map(|(rate, n)| f64::from(*n) * rate.to_f64().unwrap_or(f64::INFINITY).ln_1p())
        .sum();
    let log_size = amount.ln() + f64::from(periods).ln_1p() + growth;

    if !log_size.is_finite() || log_size > MAX_MAGNITUDE.ln() {
        return Err(FinCalcError::invalid(
            field,
            "projected value exceeds the representable range",
        ));
    }
    Ok(())
}
