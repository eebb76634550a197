use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FinCalcError;
use crate::types::{Money, Percent};
use crate::FinCalcResult;

/// One income band and its marginal rate. `max: None` is the open top band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub min: Money,
    pub max: Option<Money>,
    pub rate_percent: Percent,
}

impl TaxSlab {
    pub fn bounded(min: Money, max: Money, rate_percent: Percent) -> Self {
        Self {
            min,
            max: Some(max),
            rate_percent,
        }
    }

    pub fn open(min: Money, rate_percent: Percent) -> Self {
        Self {
            min,
            max: None,
            rate_percent,
        }
    }

    /// Portion of `taxable_income` falling inside this band.
    pub fn income_in_slab(&self, taxable_income: Money) -> Money {
        let upper = match self.max {
            Some(max) => taxable_income.min(max),
            None => taxable_income,
        };
        (upper - self.min).max(Decimal::ZERO)
    }
}

/// A complete regime: slab table, standard deduction, and the rebate /
/// marginal-relief thresholds. Deserializable so alternative tables can be
/// loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRegime {
    pub name: String,
    pub slabs: Vec<TaxSlab>,
    pub standard_deduction: Money,
    /// Taxable income up to this amount pays no tax.
    pub rebate_limit: Money,
    /// Up to this amount, tax is capped at the income above `rebate_limit`.
    pub marginal_relief_limit: Money,
}

impl TaxRegime {
    /// Indian new tax regime, FY 2025-26.
    pub fn new_regime_fy2025_26() -> Self {
        Self {
            name: "New regime FY 2025-26".into(),
            slabs: vec![
                TaxSlab::bounded(dec!(0), dec!(400000), dec!(0)),
                TaxSlab::bounded(dec!(400000), dec!(800000), dec!(5)),
                TaxSlab::bounded(dec!(800000), dec!(1200000), dec!(10)),
                TaxSlab::bounded(dec!(1200000), dec!(1600000), dec!(15)),
                TaxSlab::bounded(dec!(1600000), dec!(2000000), dec!(20)),
                TaxSlab::bounded(dec!(2000000), dec!(2400000), dec!(25)),
                TaxSlab::open(dec!(2400000), dec!(30)),
            ],
            standard_deduction: dec!(75000),
            rebate_limit: dec!(1200000),
            marginal_relief_limit: dec!(1270000),
        }
    }

    /// Checks that the slabs partition `[0, ∞)` in ascending order and that
    /// the thresholds are coherent.
    pub fn validate(&self) -> FinCalcResult<()> {
        let first = self
            .slabs
            .first()
            .ok_or_else(|| FinCalcError::DomainViolation("slab table is empty".into()))?;
        if !first.min.is_zero() {
            return Err(FinCalcError::DomainViolation(format!(
                "first slab must start at 0, starts at {}",
                first.min
            )));
        }

        let last_index = self.slabs.len() - 1;
        for (i, slab) in self.slabs.iter().enumerate() {
            if slab.rate_percent < Decimal::ZERO || slab.rate_percent > dec!(100) {
                return Err(FinCalcError::DomainViolation(format!(
                    "slab {i} rate {}% outside 0-100",
                    slab.rate_percent
                )));
            }
            match slab.max {
                Some(max) if max <= slab.min => {
                    return Err(FinCalcError::DomainViolation(format!(
                        "slab {i} is empty or inverted ({} to {max})",
                        slab.min
                    )));
                }
                Some(max) => {
                    let next = self.slabs.get(i + 1).ok_or_else(|| {
                        FinCalcError::DomainViolation("last slab must be open-ended".into())
                    })?;
                    if next.min != max {
                        return Err(FinCalcError::DomainViolation(format!(
                            "slab {} starts at {} but slab {i} ends at {max}",
                            i + 1,
                            next.min
                        )));
                    }
                }
                None if i != last_index => {
                    return Err(FinCalcError::DomainViolation(format!(
                        "slab {i} is open-ended but is not the last slab"
                    )));
                }
                None => {}
            }
        }

        if self.standard_deduction < Decimal::ZERO {
            return Err(FinCalcError::DomainViolation(
                "standard deduction must be >= 0".into(),
            ));
        }
        if self.rebate_limit < Decimal::ZERO || self.marginal_relief_limit < self.rebate_limit {
            return Err(FinCalcError::DomainViolation(format!(
                "marginal relief limit {} must be >= rebate limit {} >= 0",
                self.marginal_relief_limit, self.rebate_limit
            )));
        }
        Ok(())
    }
}

impl Default for TaxRegime {
    fn default() -> Self {
        Self::new_regime_fy2025_26()
    }
}
