//! Inflation impact: what a future sum is worth in today's money.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::math::{compound_years, require_bounded_growth, require_non_negative, require_years};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, Years};
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationInput {
    pub future_value: Money,
    pub inflation_rate_percent: Percent,
    pub years: Years,
}

/// Present value and the purchasing power lost to inflation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationBreakdown {
    pub future_value: Money,
    pub present_value: Money,
    pub inflation_loss: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceChangeInput {
    pub old_price: Money,
    pub new_price: Money,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Discounts `future_value` back `years` years at `inflation_rate_percent` p.a.
pub fn present_value(
    future_value: Money,
    inflation_rate_percent: Percent,
    years: Years,
) -> FinCalcResult<Money> {
    require_non_negative("inflation_rate_percent", inflation_rate_percent)?;
    require_years("years", years)?;
    let rate = inflation_rate_percent / dec!(100);
    let whole_years = years.ceil().to_u32().unwrap_or(u32::MAX);
    require_bounded_growth("inflation_rate_percent", Decimal::ONE, &[(rate, whole_years)])?;

    if inflation_rate_percent.is_zero() || years.is_zero() {
        return Ok(future_value);
    }

    let factor = compound_years(rate, years);
    Ok(future_value / factor)
}

/// Purchasing power lost: `future_value - present_value`.
pub fn loss(
    future_value: Money,
    inflation_rate_percent: Percent,
    years: Years,
) -> FinCalcResult<Money> {
    Ok(future_value - present_value(future_value, inflation_rate_percent, years)?)
}

pub fn inflation_breakdown(
    future_value: Money,
    inflation_rate_percent: Percent,
    years: Years,
) -> FinCalcResult<InflationBreakdown> {
    let pv = present_value(future_value, inflation_rate_percent, years)?;
    Ok(InflationBreakdown {
        future_value,
        present_value: pv,
        inflation_loss: future_value - pv,
    })
}

/// Inflation rate implied by a price moving from `old_price` to `new_price`,
/// as a percentage rounded to two decimals.
pub fn implied_inflation_rate(old_price: Money, new_price: Money) -> FinCalcResult<Percent> {
    if old_price <= Decimal::ZERO {
        return Err(FinCalcError::invalid("old_price", "must be > 0"));
    }
    require_non_negative("new_price", new_price)?;

    let rate = (new_price - old_price)
        .checked_div(old_price)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or_else(|| {
            FinCalcError::invalid("new_price", "implied rate exceeds the representable range")
        })?;
    Ok(rate.round_dp(2))
}

/// Inflation impact with the standard envelope.
pub fn calculate_inflation_impact(
    input: &InflationInput,
) -> FinCalcResult<ComputationOutput<InflationBreakdown>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    tracing::debug!(
        future_value = %input.future_value,
        inflation = %input.inflation_rate_percent,
        years = %input.years,
        "calculating inflation impact"
    );

    if input.inflation_rate_percent.is_zero() {
        warnings.push("Inflation rate is zero; present value equals future value".into());
    } else if input.inflation_rate_percent > dec!(20) {
        warnings.push(format!(
            "Inflation rate of {}% is well above historical norms",
            input.inflation_rate_percent
        ));
    }

    let breakdown = inflation_breakdown(
        input.future_value,
        input.inflation_rate_percent,
        input.years,
    )?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Present value = FV / (1 + i)^years",
        input,
        warnings,
        elapsed,
        breakdown,
    ))
}
