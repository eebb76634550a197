use fincalc_core::budget::{BudgetCategory, BudgetRatios};
use fincalc_core::currency::{format_currency, parse_amount};
use fincalc_core::inflation::present_value;
use fincalc_core::sip::{annuity, step_up};
use fincalc_core::types::ContributionTiming;
use proptest::prelude::{prop_assert, prop_assert_eq, proptest};
use rust_decimal::{Decimal, MathematicalOps};

fn percent_from_bp(bp: u32) -> Decimal {
    Decimal::from(bp) / Decimal::from(100)
}

fn timing_from(start: bool) -> ContributionTiming {
    if start {
        ContributionTiming::Start
    } else {
        ContributionTiming::End
    }
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(64))]

    #[test]
    fn prop_future_value_is_invested_plus_returns(
        monthly in 0u32..200_000,
        rate_bp in 0u32..3_000,
        years in 0u32..41,
        start in proptest::bool::ANY
    ) {
        let monthly = Decimal::from(monthly);
        let rate = percent_from_bp(rate_bp);
        let years = Decimal::from(years);
        let timing = timing_from(start);

        let fv = annuity::future_value(monthly, rate, years, timing).unwrap();
        let invested = annuity::total_invested(monthly, years).unwrap();
        let gains = annuity::returns(monthly, rate, years, timing).unwrap();
        prop_assert_eq!(fv, invested + gains);
        prop_assert!(gains >= Decimal::ZERO);
    }

    #[test]
    fn prop_step_up_future_value_is_invested_plus_returns(
        monthly in 0u32..50_000,
        step_bp in 0u32..2_500,
        rate_bp in 0u32..2_500,
        years in 0u32..31
    ) {
        let monthly = Decimal::from(monthly);
        let step = percent_from_bp(step_bp);
        let rate = percent_from_bp(rate_bp);
        let years = Decimal::from(years);
        let timing = ContributionTiming::Start;

        let fv = step_up::future_value(monthly, step, rate, years, timing).unwrap();
        let invested = step_up::total_invested(monthly, step, years).unwrap();
        let gains = step_up::returns(monthly, step, rate, years, timing).unwrap();
        prop_assert_eq!(fv, invested + gains);
    }
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(48))]

    #[test]
    fn prop_zero_step_up_matches_level_plan(
        monthly in 1u32..100_000,
        rate_bp in 0u32..3_000,
        tenths in 0u32..300,
        start in proptest::bool::ANY
    ) {
        let monthly = Decimal::from(monthly);
        let rate = percent_from_bp(rate_bp);
        // Includes partial final years
        let years = Decimal::from(tenths) / Decimal::TEN;
        let timing = timing_from(start);

        let level = annuity::future_value_exact(monthly, rate, years, timing).unwrap();
        let stepped = step_up::future_value_exact(monthly, Decimal::ZERO, rate, years, timing).unwrap();
        prop_assert!((level - stepped).abs() < Decimal::new(1, 6), "{} vs {}", level, stepped);
        prop_assert_eq!(
            annuity::total_invested(monthly, years).unwrap(),
            step_up::total_invested(monthly, Decimal::ZERO, years).unwrap()
        );
    }

    #[test]
    fn prop_future_value_grows_with_horizon(
        monthly in 1u32..100_000,
        rate_bp in 0u32..3_000,
        years in 0u32..40
    ) {
        let monthly = Decimal::from(monthly);
        let rate = percent_from_bp(rate_bp);
        let shorter = Decimal::from(years);
        let longer = shorter + Decimal::ONE;

        let a = annuity::future_value(monthly, rate, shorter, ContributionTiming::Start).unwrap();
        let b = annuity::future_value(monthly, rate, longer, ContributionTiming::Start).unwrap();
        prop_assert!(b > a);

        let a = step_up::future_value(monthly, Decimal::TEN, rate, shorter, ContributionTiming::Start).unwrap();
        let b = step_up::future_value(monthly, Decimal::TEN, rate, longer, ContributionTiming::Start).unwrap();
        prop_assert!(b > a);
    }

    #[test]
    fn prop_present_value_reinflates_to_future_value(
        fv in 0u32..1_000_000_000,
        rate_bp in 0u32..2_000,
        years in 0u32..51
    ) {
        let fv = Decimal::from(fv);
        let rate = percent_from_bp(rate_bp);
        let pv = present_value(fv, rate, Decimal::from(years)).unwrap();
        let factor = (Decimal::ONE + rate / Decimal::ONE_HUNDRED).powu(u64::from(years));
        prop_assert!((pv * factor - fv).abs() < Decimal::new(1, 4));
    }
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(96))]

    #[test]
    fn prop_ratios_sum_to_one_after_any_adjustments(
        moves in proptest::collection::vec((0u8..3, 0u32..12_001), 1..12)
    ) {
        let mut ratios = BudgetRatios::default();
        for (index, value) in moves {
            let category = BudgetCategory::ALL[usize::from(index)];
            // Up to 120% so clamping is exercised too
            let value = Decimal::from(value) / Decimal::from(10_000);
            ratios = ratios.adjust(category, value);
            prop_assert_eq!(ratios.total(), Decimal::ONE);
            for c in BudgetCategory::ALL {
                prop_assert!(ratios.get(c) >= Decimal::ZERO);
                prop_assert!(ratios.get(c) <= Decimal::ONE);
            }
        }
    }

    #[test]
    fn prop_currency_formatting_is_stable_and_parseable(value in 0u64..10_000_000_000_000) {
        let amount = Decimal::from(value);
        let first = format_currency(amount);
        prop_assert_eq!(&first, &format_currency(amount));
        prop_assert!(first.display.starts_with('₹'));
        prop_assert_eq!(parse_amount(&first.full_value).unwrap(), amount);
    }
}
