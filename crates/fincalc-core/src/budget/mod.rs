//! Needs / wants / savings budgeting.

pub mod ratios;

pub use ratios::{distribute, BudgetCategory, BudgetDistribution, BudgetRatios, BudgetRow};

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Money, Percent};
use crate::FinCalcResult;

/// A slider move: set `category` to `percent` of income.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioAdjustment {
    pub category: BudgetCategory,
    pub percent: Percent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetInput {
    pub income: Money,
    /// Starting ratios; the 50/30/20 rule when absent.
    #[serde(default)]
    pub ratios: BudgetRatios,
    /// Applied in order on top of `ratios`.
    #[serde(default)]
    pub adjustments: Vec<RatioAdjustment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetOutput {
    pub ratios: BudgetRatios,
    pub distribution: BudgetDistribution,
    pub rows: Vec<BudgetRow>,
}

/// Applies the adjustments and splits the income, with the standard envelope.
pub fn calculate_budget(input: &BudgetInput) -> FinCalcResult<ComputationOutput<BudgetOutput>> {
    let start = Instant::now();
    tracing::debug!(
        income = %input.income,
        adjustments = input.adjustments.len(),
        "calculating budget"
    );

    input.ratios.validate()?;
    let mut warnings: Vec<String> = Vec::new();

    let ratios = input
        .adjustments
        .iter()
        .fold(input.ratios, |ratios, adj| {
            if adj.percent < Percent::ZERO || adj.percent > Percent::ONE_HUNDRED {
                warnings.push(format!(
                    "{} set to {}% was clamped to 0-100%",
                    adj.category, adj.percent
                ));
            }
            ratios.adjust_percent(adj.category, adj.percent)
        });

    if input.income.is_zero() {
        warnings.push("Income is zero; every category is zero".into());
    }

    let distribution = distribute(input.income, &ratios)?;
    let rows = distribution.rows(&ratios);

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Proportional budget split; adjusting one share rescales the other two to keep the total at 100%",
        input,
        warnings,
        elapsed,
        BudgetOutput {
            ratios,
            distribution,
            rows,
        },
    ))
}
