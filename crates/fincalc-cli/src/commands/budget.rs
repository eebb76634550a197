use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::budget::{self, BudgetCategory, BudgetInput, BudgetRatios, RatioAdjustment};
use fincalc_core::currency::parse_amount;

use crate::input;
use crate::store::{JsonFileStore, KeyValueStore, INCOME_KEY};

/// Arguments for the needs / wants / savings split
#[derive(Args, Default)]
pub struct BudgetArgs {
    /// Monthly income; the remembered income is used when omitted
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Share for needs, percent (the other two are rescaled)
    #[arg(long)]
    pub needs: Option<Decimal>,

    /// Share for wants, percent
    #[arg(long)]
    pub wants: Option<Decimal>,

    /// Share for savings, percent
    #[arg(long)]
    pub savings: Option<Decimal>,

    /// Start from 50/30/20, ignoring ratios and adjustments from --input
    #[arg(long)]
    pub reset: bool,

    /// Store the income for later runs
    #[arg(long)]
    pub remember: bool,

    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

impl BudgetArgs {
    /// Slider moves in flag order: needs, wants, savings.
    fn adjustments(&self) -> Vec<RatioAdjustment> {
        [
            (BudgetCategory::Needs, self.needs),
            (BudgetCategory::Wants, self.wants),
            (BudgetCategory::Savings, self.savings),
        ]
        .into_iter()
        .filter_map(|(category, percent)| percent.map(|percent| RatioAdjustment { category, percent }))
        .collect()
    }
}

pub fn run_budget(args: BudgetArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let file_input: Option<BudgetInput> = if let Some(ref path) = args.input {
        Some(input::file::read_json(path)?)
    } else if let Some(data) = input::stdin::read_stdin()? {
        Some(serde_json::from_value(data)?)
    } else {
        None
    };

    let mut store = JsonFileStore::from_env()?;
    budget_with_store(args, file_input, &mut store)
}

/// Builds the budget input from file data, flags and the remembered income,
/// in that order of precedence for the income: flag, file, store.
pub fn budget_with_store(
    args: BudgetArgs,
    file_input: Option<BudgetInput>,
    store: &mut dyn KeyValueStore,
) -> Result<Value, Box<dyn std::error::Error>> {
    let (file_income, mut ratios, mut adjustments) = match file_input {
        Some(i) => (Some(i.income), i.ratios, i.adjustments),
        None => (None, BudgetRatios::default(), Vec::new()),
    };
    if args.reset {
        ratios = BudgetRatios::reset();
        adjustments.clear();
    }
    adjustments.extend(args.adjustments());

    let income = match args.income.or(file_income) {
        Some(income) => income,
        None => {
            let remembered = store
                .get(INCOME_KEY)?
                .ok_or("--income is required (no remembered income; use --remember to store one)")?;
            tracing::debug!(income = %remembered, "using remembered income");
            parse_amount(&remembered)?
        }
    };

    let budget_input = BudgetInput {
        income,
        ratios,
        adjustments,
    };
    let result = budget::calculate_budget(&budget_input)?;

    if args.remember {
        store.set(INCOME_KEY, &income.to_string())?;
    }

    Ok(serde_json::to_value(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn ratio(value: &Value, key: &str) -> Decimal {
        value["result"]["ratios"][key].as_str().unwrap().parse().unwrap()
    }

    #[test]
    fn remembered_income_is_used_when_flag_is_absent() {
        let mut store = MemoryStore::default();
        let args = BudgetArgs {
            income: Some(dec!(90000)),
            remember: true,
            ..Default::default()
        };
        budget_with_store(args, None, &mut store).unwrap();
        assert_eq!(store.get(INCOME_KEY).unwrap().as_deref(), Some("90000"));

        let value = budget_with_store(BudgetArgs::default(), None, &mut store).unwrap();
        let needs: Decimal = value["result"]["distribution"]["needs"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(needs, dec!(45000));
    }

    #[test]
    fn missing_income_without_memory_is_an_error() {
        let mut store = MemoryStore::default();
        let err = budget_with_store(BudgetArgs::default(), None, &mut store).unwrap_err();
        assert!(err.to_string().contains("--income"));
    }

    #[test]
    fn income_is_not_stored_without_remember() {
        let mut store = MemoryStore::default();
        let args = BudgetArgs {
            income: Some(dec!(1000)),
            ..Default::default()
        };
        budget_with_store(args, None, &mut store).unwrap();
        assert_eq!(store.get(INCOME_KEY).unwrap(), None);
    }

    #[test]
    fn reset_discards_file_adjustments() {
        let file = BudgetInput {
            income: dec!(10000),
            ratios: BudgetRatios::default(),
            adjustments: vec![RatioAdjustment {
                category: BudgetCategory::Needs,
                percent: dec!(80),
            }],
        };
        let args = BudgetArgs {
            reset: true,
            savings: Some(dec!(40)),
            ..Default::default()
        };
        let value = budget_with_store(args, Some(file), &mut MemoryStore::default()).unwrap();
        assert_eq!(ratio(&value, "savings"), dec!(0.4));
        // needs:wants stays 5:3
        assert_eq!(ratio(&value, "needs"), dec!(0.375));
    }
}
