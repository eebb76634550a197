use rust_decimal::Decimal;

use crate::math::{
    compound, monthly_rate, months_in, require_bounded_growth, require_non_negative,
    require_years, round_currency,
};
use crate::types::{ContributionTiming, Money, Percent, Years};
use crate::FinCalcResult;

pub(crate) fn validate_plan(monthly: Money, annual_rate_percent: Percent, years: Years) -> FinCalcResult<()> {
    require_non_negative("monthly_amount", monthly)?;
    require_non_negative("annual_rate_percent", annual_rate_percent)?;
    require_years("duration_years", years)?;
    require_bounded_growth(
        "annual_rate_percent",
        monthly,
        &[(monthly_rate(annual_rate_percent), months_in(years) + 1)],
    )
}

/// Future value of `months` equal deposits at monthly rate `r`, unrounded.
///
/// FV = P * ((1 + r)^n - 1) / r, times (1 + r) when deposits are made at the
/// start of each month.
pub(crate) fn cohort_future_value(
    monthly: Money,
    rate: Decimal,
    months: u32,
    timing: ContributionTiming,
) -> Money {
    if rate.is_zero() {
        return monthly * Decimal::from(months);
    }

    let growth = (compound(rate, months) - Decimal::ONE) / rate;
    let fv = monthly * growth;
    match timing {
        ContributionTiming::Start => fv * (Decimal::ONE + rate),
        ContributionTiming::End => fv,
    }
}

/// Unrounded future value of a level monthly SIP.
pub fn future_value_exact(
    monthly: Money,
    annual_rate_percent: Percent,
    years: Years,
    timing: ContributionTiming,
) -> FinCalcResult<Money> {
    validate_plan(monthly, annual_rate_percent, years)?;
    Ok(cohort_future_value(
        monthly,
        monthly_rate(annual_rate_percent),
        months_in(years),
        timing,
    ))
}

/// Future value of a level monthly SIP, rounded to whole rupees.
pub fn future_value(
    monthly: Money,
    annual_rate_percent: Percent,
    years: Years,
    timing: ContributionTiming,
) -> FinCalcResult<Money> {
    future_value_exact(monthly, annual_rate_percent, years, timing).map(round_currency)
}

/// Amount paid in: `monthly * floor(years * 12)`, rounded.
pub fn total_invested(monthly: Money, years: Years) -> FinCalcResult<Money> {
    require_non_negative("monthly_amount", monthly)?;
    require_years("duration_years", years)?;
    require_bounded_growth("monthly_amount", monthly, &[(Decimal::ZERO, months_in(years))])?;
    Ok(round_currency(monthly * Decimal::from(months_in(years))))
}

/// Gains over the amount paid in. Computed from the two rounded figures so
/// that `future_value == total_invested + returns` holds exactly.
pub fn returns(
    monthly: Money,
    annual_rate_percent: Percent,
    years: Years,
    timing: ContributionTiming,
) -> FinCalcResult<Money> {
    let fv = future_value(monthly, annual_rate_percent, years, timing)?;
    let invested = total_invested(monthly, years)?;
    Ok(fv - invested)
}
