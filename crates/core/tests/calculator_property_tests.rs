//! Property-based tests for the validate-then-calculate flow.
//!
//! These tests check invariants that must hold for every input in the
//! accepted domain, using `proptest` to generate the inputs.

use compound_core::constants::FIELD_CONTRIBUTION_AMOUNT;
use compound_core::utils::round_to_cents;
use compound_core::{
    calculate_future_value, calculate_total_invested, compute_outcome, validate,
    ContributionInterval, FieldConstraints, InvestmentFields, InvestmentInput,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

fn arb_interval() -> impl Strategy<Value = ContributionInterval> {
    prop_oneof![
        Just(ContributionInterval::None),
        Just(ContributionInterval::Yearly),
        Just(ContributionInterval::Monthly),
    ]
}

/// Amount in cents between $0 and $999,999,000.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..=99_999_900_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Annual rate in hundredths of a percent, 0% to 25%.
fn arb_rate() -> impl Strategy<Value = Decimal> {
    (0i64..=2_500).prop_map(|bp| Decimal::new(bp, 2))
}

fn arb_input() -> impl Strategy<Value = InvestmentInput> {
    (arb_amount(), arb_amount(), arb_interval(), arb_rate(), 1u32..=100).prop_map(
        |(principal, contribution, interval, rate, years)| {
            InvestmentInput::with_contributions(principal, contribution, interval, rate, years)
        },
    )
}

// =============================================================================
// Calculator properties
// =============================================================================

proptest! {
    #[test]
    fn profit_is_difference_of_rounded_figures(input in arb_input()) {
        let outcome = compute_outcome(&input).unwrap();
        let fv = calculate_future_value(&input).unwrap();
        let total = calculate_total_invested(&input).unwrap();

        prop_assert_eq!(outcome.profit, round_to_cents(fv) - round_to_cents(total));
        prop_assert_eq!(outcome.profit, outcome.future_value - outcome.total_invested);
    }

    #[test]
    fn compute_is_pure(input in arb_input()) {
        prop_assert_eq!(compute_outcome(&input).unwrap(), compute_outcome(&input).unwrap());
    }

    #[test]
    fn one_time_total_is_principal(
        principal in arb_amount(),
        contribution in arb_amount(),
        rate in arb_rate(),
        years in 1u32..=100,
    ) {
        let input = InvestmentInput::with_contributions(
            principal,
            contribution,
            ContributionInterval::None,
            rate,
            years,
        );
        prop_assert_eq!(calculate_total_invested(&input).unwrap(), principal);
    }

    #[test]
    fn zero_rate_is_simple_sum(
        principal in arb_amount(),
        contribution in arb_amount(),
        interval in arb_interval(),
        years in 1u32..=100,
    ) {
        let input = InvestmentInput::with_contributions(
            principal,
            contribution,
            interval,
            Decimal::ZERO,
            years,
        );
        let expected = principal + contribution * Decimal::from(input.total_periods());
        prop_assert_eq!(calculate_future_value(&input).unwrap(), expected);
    }

    #[test]
    fn positive_rate_never_loses_money(input in arb_input()) {
        let outcome = compute_outcome(&input).unwrap();
        prop_assert!(outcome.profit >= Decimal::ZERO);
    }
}

// =============================================================================
// Validator properties
// =============================================================================

fn arb_form() -> impl Strategy<Value = InvestmentFields> {
    (
        -1_000i64..1_000_000_000_000,
        -1_000i64..1_000_000,
        prop_oneof![Just("none"), Just("yearly"), Just("monthly")],
        -5i64..=130,
    )
        .prop_map(|(principal, contribution, interval, years)| InvestmentFields {
            principal: Decimal::new(principal, 2).to_string(),
            contribution_amount: Decimal::new(contribution, 2).to_string(),
            contribution_interval: interval.to_string(),
            annual_rate_percent: None,
            duration_years: years.to_string(),
        })
}

proptest! {
    #[test]
    fn form_is_valid_iff_every_field_in_bounds(form in arb_form()) {
        let constraints = FieldConstraints::default();
        let report = validate(&form, &constraints);

        let principal: Decimal = form.principal.parse().unwrap();
        let contribution: Decimal = form.contribution_amount.parse().unwrap();
        let years: Decimal = form.duration_years.parse().unwrap();
        let one_time = form.contribution_interval == "none";

        let expected = constraints.principal.contains(principal)
            && (one_time || constraints.contribution_amount.contains(contribution))
            && constraints.duration_years.contains(years);

        prop_assert_eq!(report.is_valid(), expected);
        prop_assert_eq!(report.is_valid(), report.results.iter().all(|r| r.valid));
        prop_assert_eq!(report.results.len(), 5);
        if one_time {
            prop_assert!(report.result_for(FIELD_CONTRIBUTION_AMOUNT).unwrap().valid);
        }
    }
}
