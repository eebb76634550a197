use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values, in whole rupees unless stated otherwise.
pub type Money = Decimal;

/// Rates expressed as percentages (12 = 12% p.a.), the way users enter them.
pub type Percent = Decimal;

/// Year counts, possibly fractional.
pub type Years = Decimal;

/// Ratios in [0, 1] (0.5 = half).
pub type Ratio = Decimal;

/// When in each month the recurring contribution is made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionTiming {
    /// Annuity due: deposit on the first day of the month.
    #[default]
    Start,
    /// Ordinary annuity: deposit on the last day of the month.
    End,
}

/// One year of a SIP or step-up SIP projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyProjectionRow {
    pub year: u32,
    pub invested_amount: Money,
    pub returns: Money,
    pub future_value: Money,
    pub present_value: Money,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    for warning in &warnings {
        tracing::warn!(methodology, %warning, "computation produced a warning");
    }
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
