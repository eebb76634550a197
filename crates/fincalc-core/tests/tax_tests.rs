use fincalc_core::tax::{self, compute_tax, IncomeTaxInput, TaxRegime, TaxSlab};
use fincalc_core::FinCalcError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Rebate and marginal relief boundaries
// ===========================================================================

#[test]
fn test_rebate_limit_pays_nothing() {
    let result = compute_tax(dec!(1200000), false).unwrap();
    assert_eq!(result.final_tax, Decimal::ZERO);
    assert_eq!(result.rebate, result.gross_tax);
}

#[test]
fn test_one_rupee_over_limit_pays_one_rupee() {
    let result = compute_tax(dec!(1200001), false).unwrap();
    assert_eq!(result.final_tax, dec!(1));
}

#[test]
fn test_top_slab_gross_tax() {
    // 0 + 20000 + 40000 + 60000 + 80000 + 100000 + 30000
    let result = compute_tax(dec!(2500000), false).unwrap();
    assert_eq!(result.gross_tax, dec!(330000));
    assert_eq!(result.final_tax, dec!(330000));
    assert_eq!(result.rebate, Decimal::ZERO);

    let per_slab: Vec<Decimal> = result.slab_breakdown.iter().map(|s| s.tax_in_slab).collect();
    assert_eq!(
        per_slab,
        vec![
            dec!(0),
            dec!(20000),
            dec!(40000),
            dec!(60000),
            dec!(80000),
            dec!(100000),
            dec!(30000),
        ]
    );
}

#[test]
fn test_final_tax_is_continuous_across_relief_band() {
    // Tax never jumps by more than the extra income across the band
    let mut previous = Decimal::ZERO;
    let mut income = dec!(1190000);
    while income <= dec!(1290000) {
        let tax = compute_tax(income, false).unwrap().final_tax;
        assert!(tax >= previous);
        assert!(tax - previous <= dec!(1000), "jump at {income}: {previous} -> {tax}");
        previous = tax;
        income += dec!(1000);
    }
}

#[test]
fn test_invariants_hold_across_incomes() {
    let mut income = Decimal::ZERO;
    while income <= dec!(5000000) {
        for salaried in [false, true] {
            let r = compute_tax(income, salaried).unwrap();
            let sum: Decimal = r.slab_breakdown.iter().map(|s| s.tax_in_slab).sum();
            assert_eq!(sum, r.gross_tax);
            assert_eq!(r.final_tax, r.gross_tax - r.rebate);
            assert!(r.final_tax >= Decimal::ZERO);
            assert!(r.final_tax <= r.gross_tax);
        }
        income += dec!(37500);
    }
}

#[test]
fn test_salaried_standard_deduction() {
    let salaried = compute_tax(dec!(1500000), true).unwrap();
    let other = compute_tax(dec!(1500000), false).unwrap();
    assert_eq!(salaried.taxable_income, dec!(1425000));
    assert!(salaried.final_tax < other.final_tax);
}

#[test]
fn test_zero_income() {
    let r = compute_tax(Decimal::ZERO, true).unwrap();
    assert_eq!(r.final_tax, Decimal::ZERO);
    assert_eq!(r.effective_rate_percent, Decimal::ZERO);
}

#[test]
fn test_negative_income_is_invalid_input() {
    assert!(matches!(
        compute_tax(dec!(-100), false),
        Err(FinCalcError::InvalidInput { .. })
    ));
}

// ===========================================================================
// Custom regimes
// ===========================================================================

fn flat_regime() -> TaxRegime {
    TaxRegime {
        name: "Two band".into(),
        slabs: vec![
            TaxSlab::bounded(dec!(0), dec!(100000), dec!(0)),
            TaxSlab::open(dec!(100000), dec!(10)),
        ],
        standard_deduction: dec!(0),
        rebate_limit: dec!(0),
        marginal_relief_limit: dec!(0),
    }
}

#[test]
fn test_custom_regime() {
    let r = flat_regime().compute_tax(dec!(250000), false).unwrap();
    assert_eq!(r.gross_tax, dec!(15000));
    assert_eq!(r.final_tax, dec!(15000));
}

#[test]
fn test_overlapping_regime_is_domain_violation() {
    let mut regime = flat_regime();
    regime.slabs[1].min = dec!(90000);
    let err = regime.compute_tax(dec!(250000), false).unwrap_err();
    assert!(matches!(err, FinCalcError::DomainViolation(_)));
}

#[test]
fn test_regime_loads_from_json() {
    let json = r#"{
        "name": "Two band",
        "slabs": [
            {"min": "0", "max": "100000", "rate_percent": "0"},
            {"min": "100000", "max": null, "rate_percent": "10"}
        ],
        "standard_deduction": "0",
        "rebate_limit": "0",
        "marginal_relief_limit": "0"
    }"#;
    let regime: TaxRegime = serde_json::from_str(json).unwrap();
    assert_eq!(regime, flat_regime());
}

#[test]
fn test_envelope_with_default_regime() {
    let input = IncomeTaxInput {
        gross_income: dec!(2500000),
        is_salaried: false,
        regime: None,
    };
    let out = tax::calculate_income_tax(&input).unwrap();
    assert_eq!(out.result.final_tax, dec!(330000));
    assert!(out.warnings.is_empty());
}
