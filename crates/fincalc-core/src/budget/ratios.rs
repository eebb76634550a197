use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FinCalcError;
use crate::math::require_non_negative;
use crate::types::{Money, Percent, Ratio};
use crate::FinCalcResult;

/// Largest drift from 1 accepted for caller-supplied ratios.
pub const RATIO_TOLERANCE: Decimal = dec!(0.000000001);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    Needs,
    Wants,
    Savings,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 3] = [
        BudgetCategory::Needs,
        BudgetCategory::Wants,
        BudgetCategory::Savings,
    ];

    /// The two categories rebalanced when this one is set.
    fn others(self) -> (BudgetCategory, BudgetCategory) {
        match self {
            BudgetCategory::Needs => (BudgetCategory::Wants, BudgetCategory::Savings),
            BudgetCategory::Wants => (BudgetCategory::Needs, BudgetCategory::Savings),
            BudgetCategory::Savings => (BudgetCategory::Needs, BudgetCategory::Wants),
        }
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetCategory::Needs => "Needs",
            BudgetCategory::Wants => "Wants",
            BudgetCategory::Savings => "Savings",
        };
        f.write_str(label)
    }
}

/// Shares of income for needs, wants, and savings. Always sums to 1 after
/// [`BudgetRatios::adjust`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRatios {
    pub needs: Ratio,
    pub wants: Ratio,
    pub savings: Ratio,
}

impl Default for BudgetRatios {
    /// The 50/30/20 rule.
    fn default() -> Self {
        Self {
            needs: dec!(0.5),
            wants: dec!(0.3),
            savings: dec!(0.2),
        }
    }
}

impl BudgetRatios {
    pub fn get(&self, category: BudgetCategory) -> Ratio {
        match category {
            BudgetCategory::Needs => self.needs,
            BudgetCategory::Wants => self.wants,
            BudgetCategory::Savings => self.savings,
        }
    }

    fn set(&mut self, category: BudgetCategory, value: Ratio) {
        match category {
            BudgetCategory::Needs => self.needs = value,
            BudgetCategory::Wants => self.wants = value,
            BudgetCategory::Savings => self.savings = value,
        }
    }

    pub fn total(&self) -> Ratio {
        self.needs + self.wants + self.savings
    }

    /// Sets one category (clamped to `[0, 1]`) and rescales the other two in
    /// proportion to their current weights so the total stays 1. When both
    /// others are zero the remainder is split evenly.
    pub fn adjust(&self, category: BudgetCategory, new_value: Ratio) -> BudgetRatios {
        let value = new_value.clamp(Decimal::ZERO, Decimal::ONE);
        let remaining = Decimal::ONE - value;
        let (first, second) = category.others();
        let weight_first = self.get(first);
        let weight_other = weight_first + self.get(second);

        let first_value = if weight_other.is_zero() {
            remaining / dec!(2)
        } else {
            weight_first / weight_other * remaining
        };

        let mut adjusted = *self;
        adjusted.set(category, value);
        adjusted.set(first, first_value);
        // Remainder rather than a second division keeps the sum exact.
        adjusted.set(second, remaining - first_value);
        adjusted
    }

    /// Slider entry point: `percent` in 0-100.
    pub fn adjust_percent(&self, category: BudgetCategory, percent: Percent) -> BudgetRatios {
        self.adjust(category, percent / dec!(100))
    }

    pub fn reset() -> BudgetRatios {
        BudgetRatios::default()
    }

    /// Rejects caller-supplied ratios that are negative, above 1, or do not
    /// sum to 1.
    pub fn validate(&self) -> FinCalcResult<()> {
        for category in BudgetCategory::ALL {
            let value = self.get(category);
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(FinCalcError::InvalidInput {
                    field: format!("ratios.{}", category.to_string().to_lowercase()),
                    reason: "must be between 0 and 1".into(),
                });
            }
        }
        if (self.total() - Decimal::ONE).abs() > RATIO_TOLERANCE {
            return Err(FinCalcError::invalid(
                "ratios",
                format!("must sum to 1, sum to {}", self.total()),
            ));
        }
        Ok(())
    }
}

/// Income split by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetDistribution {
    pub needs: Money,
    pub wants: Money,
    pub savings: Money,
}

/// One line of the exported budget table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRow {
    pub category: BudgetCategory,
    pub percent: Percent,
    pub amount: Money,
}

impl BudgetDistribution {
    pub fn get(&self, category: BudgetCategory) -> Money {
        match category {
            BudgetCategory::Needs => self.needs,
            BudgetCategory::Wants => self.wants,
            BudgetCategory::Savings => self.savings,
        }
    }

    /// Category, percentage (one decimal), and amount (two decimals) per row.
    pub fn rows(&self, ratios: &BudgetRatios) -> Vec<BudgetRow> {
        BudgetCategory::ALL
            .iter()
            .map(|&category| BudgetRow {
                category,
                percent: (ratios.get(category) * dec!(100)).round_dp(1),
                amount: self.get(category).round_dp(2),
            })
            .collect()
    }
}

/// Splits `income` according to `ratios`.
pub fn distribute(income: Money, ratios: &BudgetRatios) -> FinCalcResult<BudgetDistribution> {
    require_non_negative("income", income)?;
    ratios.validate()?;
    Ok(BudgetDistribution {
        needs: income * ratios.needs,
        wants: income * ratios.wants,
        savings: income * ratios.savings,
    })
}
