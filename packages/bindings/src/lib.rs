use napi::Result as NapiResult;
use napi_derive::napi;

use fincalc_core::budget::{BudgetCategory, BudgetRatios};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// SIP
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_sip(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::sip::SipInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::sip::calculate_sip(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_step_up_sip(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::sip::StepUpSipInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::sip::calculate_step_up_sip(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Tax and inflation
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_income_tax(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::tax::IncomeTaxInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::tax::calculate_income_tax(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_inflation_impact(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::inflation::InflationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincalc_core::inflation::calculate_inflation_impact(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn implied_inflation_rate(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::inflation::PriceChangeInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let rate = fincalc_core::inflation::implied_inflation_rate(input.old_price, input.new_price)
        .map_err(to_napi_error)?;
    serde_json::to_string(&rate).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Budget
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_budget(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::budget::BudgetInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::budget::calculate_budget(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[derive(serde::Deserialize)]
struct AdjustBindingInput {
    #[serde(default)]
    ratios: BudgetRatios,
    category: BudgetCategory,
    value: rust_decimal::Decimal,
}

/// One slider move: `value` is a ratio in `[0, 1]` and is clamped.
#[napi]
pub fn adjust_budget_ratios(input_json: String) -> NapiResult<String> {
    let binding_input: AdjustBindingInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let adjusted = binding_input
        .ratios
        .adjust(binding_input.category, binding_input.value);
    serde_json::to_string(&adjusted).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Currency
// ---------------------------------------------------------------------------

#[napi]
pub fn format_currency(value: f64) -> NapiResult<String> {
    let formatted = fincalc_core::currency::format_currency_f64(value);
    serde_json::to_string(&formatted).map_err(to_napi_error)
}
