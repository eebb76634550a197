//! Step-up SIP: the monthly deposit rises by a fixed percentage every year.
//!
//! Each year's deposits form a cohort. Cohort `k` deposits
//! `initial * (1 + step_up)^k` for up to twelve months, then compounds for the
//! rest of the horizon. The plan's value is the sum of the cohorts, rounded
//! once at the end.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::annuity::{cohort_future_value, validate_plan};
use crate::math::{
    compound, monthly_rate, months_in, require_bounded_growth, require_non_negative,
    require_years, round_currency,
};
use crate::types::{ContributionTiming, Money, Percent, Years};
use crate::FinCalcResult;

/// One year's block of deposits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cohort {
    pub year_index: u32,
    pub monthly_amount: Money,
    /// Deposits actually made in this cohort (12, or fewer in a final partial year).
    pub deposits: u32,
    /// Months between the cohort's last deposit period and the end of the horizon.
    pub months_after: u32,
}

/// Splits the horizon into yearly cohorts.
pub fn cohorts(initial_monthly: Money, step_up_percent: Percent, years: Years) -> Vec<Cohort> {
    let total_months = months_in(years);
    let step = step_up_percent / dec!(100);

    let mut out = Vec::new();
    let mut year_index = 0u32;
    let mut elapsed = 0u32;
    while elapsed < total_months {
        let deposits = (total_months - elapsed).min(12);
        out.push(Cohort {
            year_index,
            monthly_amount: initial_monthly * compound(step, year_index),
            deposits,
            months_after: total_months - elapsed - deposits,
        });
        elapsed += deposits;
        year_index += 1;
    }
    out
}

fn validate(initial_monthly: Money, step_up_percent: Percent, annual_rate_percent: Percent, years: Years) -> FinCalcResult<()> {
    validate_plan(initial_monthly, annual_rate_percent, years)?;
    validate_step_up(initial_monthly, step_up_percent, years)?;
    require_bounded_growth(
        "annual_rate_percent",
        initial_monthly,
        &[
            (monthly_rate(annual_rate_percent), months_in(years) + 1),
            (step_up_percent / dec!(100), cohort_count(years)),
        ],
    )
}

fn validate_deposits(initial_monthly: Money, step_up_percent: Percent, years: Years) -> FinCalcResult<()> {
    require_non_negative("monthly_amount", initial_monthly)?;
    require_years("duration_years", years)?;
    validate_step_up(initial_monthly, step_up_percent, years)
}

fn validate_step_up(initial_monthly: Money, step_up_percent: Percent, years: Years) -> FinCalcResult<()> {
    require_non_negative("annual_step_up_percent", step_up_percent)?;
    require_bounded_growth(
        "annual_step_up_percent",
        initial_monthly,
        &[(Decimal::ZERO, months_in(years)), (step_up_percent / dec!(100), cohort_count(years))],
    )
}

fn cohort_count(years: Years) -> u32 {
    months_in(years).div_ceil(12)
}

/// Unrounded future value of a step-up SIP.
pub fn future_value_exact(
    initial_monthly: Money,
    step_up_percent: Percent,
    annual_rate_percent: Percent,
    years: Years,
    timing: ContributionTiming,
) -> FinCalcResult<Money> {
    validate(initial_monthly, step_up_percent, annual_rate_percent, years)?;
    let rate = monthly_rate(annual_rate_percent);

    let total: Money = cohorts(initial_monthly, step_up_percent, years)
        .iter()
        .map(|c| {
            let at_cohort_end = cohort_future_value(c.monthly_amount, rate, c.deposits, timing);
            let value = at_cohort_end * compound(rate, c.months_after);
            tracing::trace!(year = c.year_index, monthly = %c.monthly_amount, %value, "step-up cohort");
            value
        })
        .sum();
    Ok(total)
}

/// Future value of a step-up SIP, rounded to whole rupees.
pub fn future_value(
    initial_monthly: Money,
    step_up_percent: Percent,
    annual_rate_percent: Percent,
    years: Years,
    timing: ContributionTiming,
) -> FinCalcResult<Money> {
    future_value_exact(initial_monthly, step_up_percent, annual_rate_percent, years, timing)
        .map(round_currency)
}

/// Sum of every deposit, rounded.
pub fn total_invested(initial_monthly: Money, step_up_percent: Percent, years: Years) -> FinCalcResult<Money> {
    validate_deposits(initial_monthly, step_up_percent, years)?;

    let total: Money = cohorts(initial_monthly, step_up_percent, years)
        .iter()
        .map(|c| c.monthly_amount * Decimal::from(c.deposits))
        .sum();
    Ok(round_currency(total))
}

pub fn returns(
    initial_monthly: Money,
    step_up_percent: Percent,
    annual_rate_percent: Percent,
    years: Years,
    timing: ContributionTiming,
) -> FinCalcResult<Money> {
    let fv = future_value(initial_monthly, step_up_percent, annual_rate_percent, years, timing)?;
    let invested = total_invested(initial_monthly, step_up_percent, years)?;
    Ok(fv - invested)
}

/// Monthly deposit in the final year of the plan.
pub fn final_monthly_contribution(
    initial_monthly: Money,
    step_up_percent: Percent,
    years: Years,
) -> FinCalcResult<Money> {
    validate_deposits(initial_monthly, step_up_percent, years)?;
    Ok(cohorts(initial_monthly, step_up_percent, years)
        .last()
        .map(|c| c.monthly_amount)
        .unwrap_or(Decimal::ZERO))
}
