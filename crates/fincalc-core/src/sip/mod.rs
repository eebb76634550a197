//! SIP (systematic investment plan) projections.
//!
//! * [`annuity`]: closed-form value of a level monthly deposit.
//! * [`step_up`]: deposits rising by a fixed percentage every year.
//! * [`series`]: year-by-year tables for either plan.
//!
//! All monthly rates are `annual / 12`; amounts are rounded to whole rupees
//! only at the point they are reported.

pub mod annuity;
pub mod series;
pub mod step_up;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::inflation;
use crate::math::round_currency;
use crate::types::{with_metadata, ComputationOutput, ContributionTiming, Money, Percent, Years, YearlyProjectionRow};
use crate::FinCalcResult;

/// Annual return above which a projection is flagged as optimistic.
const HIGH_RETURN_WARNING: Decimal = dec!(30);
const HIGH_STEP_UP_WARNING: Decimal = dec!(50);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A recurring monthly investment plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipInput {
    pub monthly_amount: Money,
    pub annual_rate_percent: Percent,
    pub duration_years: Years,
    #[serde(default)]
    pub timing: ContributionTiming,
    #[serde(default)]
    pub inflation_rate_percent: Percent,
}

/// A recurring plan whose monthly deposit rises every year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepUpSipInput {
    pub initial_monthly_amount: Money,
    pub annual_step_up_percent: Percent,
    pub annual_rate_percent: Percent,
    pub duration_years: Years,
    #[serde(default)]
    pub timing: ContributionTiming,
    #[serde(default)]
    pub inflation_rate_percent: Percent,
}

/// Horizon totals plus the yearly table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipOutput {
    pub total_invested: Money,
    pub estimated_returns: Money,
    pub future_value: Money,
    pub present_value: Money,
    pub inflation_loss: Money,
    pub year_by_year: Vec<YearlyProjectionRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepUpSipOutput {
    pub total_invested: Money,
    pub estimated_returns: Money,
    pub future_value: Money,
    pub present_value: Money,
    pub inflation_loss: Money,
    pub final_monthly_amount: Money,
    pub year_by_year: Vec<YearlyProjectionRow>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn common_warnings(annual_rate_percent: Percent, duration_years: Years) -> Vec<String> {
    let mut warnings = Vec::new();
    if annual_rate_percent.is_zero() {
        warnings.push("Expected return is zero; future value equals the amount invested".into());
    } else if annual_rate_percent > HIGH_RETURN_WARNING {
        warnings.push(format!(
            "Expected return of {annual_rate_percent}% p.a. is unusually high"
        ));
    }
    if !duration_years.fract().is_zero() {
        warnings.push("Yearly table covers whole years only; totals include the partial year".into());
    }
    warnings
}

/// Present value and loss at the horizon, rounded to whole rupees.
fn discount_horizon(
    future_value: Money,
    inflation_rate_percent: Percent,
    years: Years,
) -> FinCalcResult<(Money, Money)> {
    let pv = round_currency(inflation::present_value(future_value, inflation_rate_percent, years)?);
    Ok((pv, future_value - pv))
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Project a level monthly SIP.
pub fn calculate_sip(input: &SipInput) -> FinCalcResult<ComputationOutput<SipOutput>> {
    let start = Instant::now();
    tracing::debug!(
        monthly = %input.monthly_amount,
        rate = %input.annual_rate_percent,
        years = %input.duration_years,
        timing = ?input.timing,
        "calculating SIP"
    );

    let warnings = common_warnings(input.annual_rate_percent, input.duration_years);

    let future_value = annuity::future_value(
        input.monthly_amount,
        input.annual_rate_percent,
        input.duration_years,
        input.timing,
    )?;
    let total_invested = annuity::total_invested(input.monthly_amount, input.duration_years)?;
    let (present_value, inflation_loss) =
        discount_horizon(future_value, input.inflation_rate_percent, input.duration_years)?;

    let year_by_year = series::generate_sip_series(
        input.monthly_amount,
        input.annual_rate_percent,
        input.duration_years,
        input.inflation_rate_percent,
        input.timing,
    )?;

    let output = SipOutput {
        total_invested,
        estimated_returns: future_value - total_invested,
        future_value,
        present_value,
        inflation_loss,
        year_by_year,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "SIP future value: P * ((1 + r)^n - 1) / r * (1 + r if deposited at month start), r = annual / 12",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// Project a step-up SIP.
pub fn calculate_step_up_sip(
    input: &StepUpSipInput,
) -> FinCalcResult<ComputationOutput<StepUpSipOutput>> {
    let start = Instant::now();
    tracing::debug!(
        monthly = %input.initial_monthly_amount,
        step_up = %input.annual_step_up_percent,
        rate = %input.annual_rate_percent,
        years = %input.duration_years,
        timing = ?input.timing,
        "calculating step-up SIP"
    );

    let mut warnings = common_warnings(input.annual_rate_percent, input.duration_years);
    if input.annual_step_up_percent > HIGH_STEP_UP_WARNING {
        warnings.push(format!(
            "Annual step-up of {}% is unusually high",
            input.annual_step_up_percent
        ));
    }

    let future_value = step_up::future_value(
        input.initial_monthly_amount,
        input.annual_step_up_percent,
        input.annual_rate_percent,
        input.duration_years,
        input.timing,
    )?;
    let total_invested = step_up::total_invested(
        input.initial_monthly_amount,
        input.annual_step_up_percent,
        input.duration_years,
    )?;
    let (present_value, inflation_loss) =
        discount_horizon(future_value, input.inflation_rate_percent, input.duration_years)?;

    let year_by_year = series::generate_step_up_sip_series(
        input.initial_monthly_amount,
        input.annual_step_up_percent,
        input.annual_rate_percent,
        input.duration_years,
        input.inflation_rate_percent,
        input.timing,
    )?;

    let output = StepUpSipOutput {
        total_invested,
        estimated_returns: future_value - total_invested,
        future_value,
        present_value,
        inflation_loss,
        final_monthly_amount: round_currency(step_up::final_monthly_contribution(
            input.initial_monthly_amount,
            input.annual_step_up_percent,
            input.duration_years,
        )?),
        year_by_year,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Step-up SIP: sum of yearly cohorts, each a level SIP compounded to the horizon, rounded once",
        input,
        warnings,
        elapsed,
        output,
    ))
}
