//! Slab-based income tax with standard deduction, rebate, and marginal relief.
//!
//! The default table is the Indian new regime for FY 2025-26. Other tables can
//! be supplied as a [`TaxRegime`]; they are validated before use and rejected
//! with [`FinCalcError::DomainViolation`](crate::FinCalcError::DomainViolation)
//! when the slabs do not partition `[0, ∞)`.

pub mod income_tax;
pub mod regime;

pub use income_tax::{compute_tax, SlabBreakdown, TaxComputationResult};
pub use regime::{TaxRegime, TaxSlab};

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Money};
use crate::FinCalcResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeTaxInput {
    pub gross_income: Money,
    #[serde(default)]
    pub is_salaried: bool,
    /// Falls back to the default regime when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regime: Option<TaxRegime>,
}

/// Income tax with the standard envelope.
pub fn calculate_income_tax(
    input: &IncomeTaxInput,
) -> FinCalcResult<ComputationOutput<TaxComputationResult>> {
    let start = Instant::now();
    let regime = input.regime.clone().unwrap_or_default();
    tracing::debug!(
        income = %input.gross_income,
        salaried = input.is_salaried,
        regime = %regime.name,
        "calculating income tax"
    );

    let result = regime.compute_tax(input.gross_income, input.is_salaried)?;

    let mut warnings: Vec<String> = Vec::new();
    if result.marginal_relief_applied {
        warnings.push(format!(
            "Marginal relief applied: tax limited to income above {}",
            regime.rebate_limit
        ));
    }
    if input.is_salaried && result.standard_deduction_applied < regime.standard_deduction {
        warnings.push("Income is below the standard deduction; taxable income is zero".into());
    }

    let methodology = format!(
        "{}: progressive slabs, rebate up to {}, marginal relief up to {}",
        regime.name, regime.rebate_limit, regime.marginal_relief_limit
    );
    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(&methodology, input, warnings, elapsed, result))
}
