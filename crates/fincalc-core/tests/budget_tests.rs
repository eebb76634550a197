use fincalc_core::budget::{
    calculate_budget, distribute, BudgetCategory, BudgetInput, BudgetRatios, RatioAdjustment,
};
use fincalc_core::FinCalcError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_default_split_of_monthly_income() {
    let d = distribute(dec!(75000), &BudgetRatios::default()).unwrap();
    assert_eq!(d.needs, dec!(37500));
    assert_eq!(d.wants, dec!(22500));
    assert_eq!(d.savings, dec!(15000));
    assert_eq!(d.needs + d.wants + d.savings, dec!(75000));
}

#[test]
fn test_slider_sequence_keeps_total_at_one() {
    let moves = [
        (BudgetCategory::Needs, dec!(0.61)),
        (BudgetCategory::Savings, dec!(0.07)),
        (BudgetCategory::Wants, dec!(0.333)),
        (BudgetCategory::Needs, dec!(0)),
        (BudgetCategory::Savings, dec!(1)),
        (BudgetCategory::Wants, dec!(0.5)),
    ];
    let mut ratios = BudgetRatios::default();
    for (category, value) in moves {
        ratios = ratios.adjust(category, value);
        assert_eq!(ratios.total(), Decimal::ONE, "after setting {category}");
        assert_eq!(ratios.get(category), value);
    }
}

#[test]
fn test_others_keep_their_relative_weight() {
    let ratios = BudgetRatios {
        needs: dec!(0.6),
        wants: dec!(0.1),
        savings: dec!(0.3),
    }
    .adjust(BudgetCategory::Needs, dec!(0.2));
    // wants:savings was 1:3 over 0.4, now 1:3 over 0.8
    assert_eq!(ratios.wants, dec!(0.2));
    assert_eq!(ratios.savings, dec!(0.6));
}

#[test]
fn test_reset_restores_defaults() {
    let adjusted = BudgetRatios::default().adjust(BudgetCategory::Wants, dec!(0.9));
    assert_ne!(adjusted, BudgetRatios::default());
    assert_eq!(BudgetRatios::reset(), BudgetRatios::default());
}

#[test]
fn test_negative_income_is_invalid_input() {
    let err = distribute(dec!(-5), &BudgetRatios::default()).unwrap_err();
    match err {
        FinCalcError::InvalidInput { field, .. } => assert_eq!(field, "income"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_envelope_rows_for_export() {
    let input = BudgetInput {
        income: dec!(120000),
        ratios: BudgetRatios::default(),
        adjustments: vec![RatioAdjustment {
            category: BudgetCategory::Savings,
            percent: dec!(25),
        }],
    };
    let out = calculate_budget(&input).unwrap();
    let rows = &out.result.rows;
    assert_eq!(rows.len(), 3);
    let total: Decimal = rows.iter().map(|r| r.amount).sum();
    assert_eq!(total, dec!(120000));
    assert_eq!(rows[2].category, BudgetCategory::Savings);
    assert_eq!(rows[2].amount, dec!(30000));
    assert_eq!(rows[2].percent, dec!(25.0));
}

#[test]
fn test_zero_income_warns() {
    let input = BudgetInput {
        income: Decimal::ZERO,
        ratios: BudgetRatios::default(),
        adjustments: vec![],
    };
    let out = calculate_budget(&input).unwrap();
    assert_eq!(out.result.distribution.needs, Decimal::ZERO);
    assert_eq!(out.warnings.len(), 1);
}

#[test]
fn test_budget_input_from_json() {
    let input: BudgetInput = serde_json::from_str(
        r#"{"income": "50000", "adjustments": [{"category": "needs", "percent": "40"}]}"#,
    )
    .unwrap();
    assert_eq!(input.ratios, BudgetRatios::default());
    let out = calculate_budget(&input).unwrap();
    assert_eq!(out.result.ratios.needs, dec!(0.4));
    assert_eq!(out.result.distribution.needs, dec!(20000));
}
