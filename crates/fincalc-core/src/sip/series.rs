//! Year-by-year projection tables for the SIP charts.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::{annuity, step_up};
use crate::inflation;
use crate::math::{require_non_negative, require_years, round_currency};
use crate::types::{ContributionTiming, Money, Percent, Years, YearlyProjectionRow};
use crate::FinCalcResult;

/// Whole years covered by the table.
fn whole_years(years: Years) -> u32 {
    years.trunc().to_u32().unwrap_or(0)
}

fn build_row(
    year: u32,
    invested_amount: Money,
    future_value: Money,
    inflation_rate_percent: Percent,
) -> FinCalcResult<YearlyProjectionRow> {
    let present_value = if inflation_rate_percent > Decimal::ZERO {
        let lost = inflation::loss(future_value, inflation_rate_percent, Decimal::from(year))?;
        round_currency(future_value - lost)
    } else {
        future_value
    };

    Ok(YearlyProjectionRow {
        year,
        invested_amount,
        returns: future_value - invested_amount,
        future_value,
        present_value,
    })
}

/// One row per whole year of a level SIP.
pub fn generate_sip_series(
    monthly: Money,
    annual_rate_percent: Percent,
    years: Years,
    inflation_rate_percent: Percent,
    timing: ContributionTiming,
) -> FinCalcResult<Vec<YearlyProjectionRow>> {
    require_years("duration_years", years)?;
    require_non_negative("inflation_rate_percent", inflation_rate_percent)?;

    (1..=whole_years(years))
        .map(|year| {
            let y = Decimal::from(year);
            let invested = annuity::total_invested(monthly, y)?;
            let fv = annuity::future_value(monthly, annual_rate_percent, y, timing)?;
            build_row(year, invested, fv, inflation_rate_percent)
        })
        .collect()
}

/// One row per whole year of a step-up SIP. Each row recomputes the full
/// cohort sum for its horizon.
pub fn generate_step_up_sip_series(
    initial_monthly: Money,
    step_up_percent: Percent,
    annual_rate_percent: Percent,
    years: Years,
    inflation_rate_percent: Percent,
    timing: ContributionTiming,
) -> FinCalcResult<Vec<YearlyProjectionRow>> {
    require_years("duration_years", years)?;
    require_non_negative("inflation_rate_percent", inflation_rate_percent)?;

    (1..=whole_years(years))
        .map(|year| {
            let y = Decimal::from(year);
            let invested = step_up::total_invested(initial_monthly, step_up_percent, y)?;
            let fv = step_up::future_value(initial_monthly, step_up_percent, annual_rate_percent, y, timing)?;
            build_row(year, invested, fv, inflation_rate_percent)
        })
        .collect()
}
