use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::regime::TaxRegime;
use crate::error::FinCalcError;
use crate::math::require_non_negative;
use crate::types::{Money, Percent};
use crate::FinCalcResult;

/// Tax attributable to one slab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabBreakdown {
    pub min: Money,
    pub max: Option<Money>,
    pub rate_percent: Percent,
    pub income_in_slab: Money,
    pub tax_in_slab: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComputationResult {
    pub gross_income: Money,
    pub standard_deduction_applied: Money,
    pub taxable_income: Money,
    pub slab_breakdown: Vec<SlabBreakdown>,
    pub gross_tax: Money,
    pub rebate: Money,
    pub marginal_relief_applied: bool,
    pub final_tax: Money,
    pub effective_rate_percent: Percent,
}

impl TaxRegime {
    /// Applies the standard deduction (salaried only), the slab table, and the
    /// rebate / marginal-relief rule.
    pub fn compute_tax(
        &self,
        gross_income: Money,
        is_salaried: bool,
    ) -> FinCalcResult<TaxComputationResult> {
        require_non_negative("gross_income", gross_income)?;
        self.validate()?;

        let standard_deduction_applied = if is_salaried {
            self.standard_deduction.min(gross_income)
        } else {
            Decimal::ZERO
        };
        let taxable_income = gross_income - standard_deduction_applied;

        let slab_breakdown: Vec<SlabBreakdown> = self
            .slabs
            .iter()
            .map(|slab| -> FinCalcResult<SlabBreakdown> {
                let income_in_slab = slab.income_in_slab(taxable_income);
                let tax_in_slab = income_in_slab
                    .checked_mul(slab.rate_percent)
                    .ok_or_else(|| {
                        FinCalcError::invalid("gross_income", "exceeds the representable range")
                    })?
                    / dec!(100);
                Ok(SlabBreakdown {
                    min: slab.min,
                    max: slab.max,
                    rate_percent: slab.rate_percent,
                    income_in_slab,
                    tax_in_slab,
                })
            })
            .collect::<FinCalcResult<_>>()?;
        let gross_tax: Money = slab_breakdown.iter().map(|s| s.tax_in_slab).sum();

        let (final_tax, marginal_relief_applied) = if taxable_income <= self.rebate_limit {
            (Decimal::ZERO, false)
        } else if taxable_income <= self.marginal_relief_limit {
            let excess = (taxable_income - self.rebate_limit).max(Decimal::ZERO);
            (excess.min(gross_tax), excess < gross_tax)
        } else {
            (gross_tax, false)
        };

        let effective_rate_percent = if gross_income.is_zero() {
            Decimal::ZERO
        } else {
            (final_tax / gross_income * dec!(100)).round_dp(2)
        };

        tracing::trace!(%taxable_income, %gross_tax, %final_tax, "computed income tax");

        Ok(TaxComputationResult {
            gross_income,
            standard_deduction_applied,
            taxable_income,
            slab_breakdown,
            gross_tax,
            rebate: gross_tax - final_tax,
            marginal_relief_applied,
            final_tax,
            effective_rate_percent,
        })
    }
}

/// Tax under the default regime.
pub fn compute_tax(gross_income: Money, is_salaried: bool) -> FinCalcResult<TaxComputationResult> {
    TaxRegime::default().compute_tax(gross_income, is_salaried)
}
