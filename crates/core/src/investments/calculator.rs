//! Future-value arithmetic for a principal with optional periodic contributions.
//!
//! Contributions are made at the end of each period (ordinary annuity). The
//! compounding frequency follows the contribution interval: monthly plans
//! compound monthly, yearly plans yearly, one-time investments yearly.

use log::debug;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use super::investments_model::{InvestmentInput, InvestmentOutcome};
use crate::errors::{CalculatorError, Result};
use crate::utils::round_to_cents;

const PERCENT: Decimal = dec!(100);

fn checked(value: Option<Decimal>, what: &str) -> Result<Decimal> {
    value.ok_or_else(|| CalculatorError::Overflow(what.to_string()).into())
}

/// `(1 + rate)^periods`
fn compound_factor(rate: Decimal, periods: u32) -> Result<Decimal> {
    let base = checked(Decimal::ONE.checked_add(rate), "growth base")?;
    checked(base.checked_powu(u64::from(periods)), "compound factor")
}

/// Unrounded future value of the investment.
///
/// A zero periodic rate falls back to simple accumulation, since the annuity
/// term `((1 + r)^n - 1) / r` is undefined there.
pub fn calculate_future_value(input: &InvestmentInput) -> Result<Decimal> {
    let annual_rate = input.annual_rate_percent / PERCENT;
    let periods_per_year = input.contribution_interval.periods_per_year();

    if periods_per_year == 0 {
        let growth = compound_factor(annual_rate, input.duration_years)?;
        return checked(input.principal.checked_mul(growth), "principal growth");
    }

    let periodic_rate = annual_rate / Decimal::from(periods_per_year);
    let periods = input.total_periods();

    if periodic_rate.is_zero() {
        let contributed = checked(
            input.contribution_amount.checked_mul(Decimal::from(periods)),
            "contributions",
        )?;
        return checked(input.principal.checked_add(contributed), "future value");
    }

    let growth = compound_factor(periodic_rate, periods)?;
    let principal_value = checked(input.principal.checked_mul(growth), "principal growth")?;
    let annuity_factor = checked(
        growth
            .checked_sub(Decimal::ONE)
            .and_then(|gain| gain.checked_div(periodic_rate)),
        "annuity factor",
    )?;
    let contribution_value = checked(
        input.contribution_amount.checked_mul(annuity_factor),
        "contribution growth",
    )?;
    checked(
        principal_value.checked_add(contribution_value),
        "future value",
    )
}

/// Principal plus every contribution made over the duration.
pub fn calculate_total_invested(input: &InvestmentInput) -> Result<Decimal> {
    let contributed = checked(
        input
            .contribution_amount
            .checked_mul(Decimal::from(input.total_periods())),
        "contributions",
    )?;
    checked(input.principal.checked_add(contributed), "total invested")
}

/// Profit as displayed: both figures are rounded to cents before subtracting.
pub fn calculate_profit(future_value: Decimal, total_invested: Decimal) -> Decimal {
    round_to_cents(future_value) - round_to_cents(total_invested)
}

/// Runs the full calculation and rounds every monetary figure for display.
pub fn compute_outcome(input: &InvestmentInput) -> Result<InvestmentOutcome> {
    let unrounded_future_value = calculate_future_value(input)?;
    let total_invested = calculate_total_invested(input)?;
    let outcome = InvestmentOutcome {
        future_value: round_to_cents(unrounded_future_value),
        total_invested: round_to_cents(total_invested),
        profit: calculate_profit(unrounded_future_value, total_invested),
        unrounded_future_value,
        periods: input.total_periods(),
    };
    debug!(
        "Computed outcome: interval={}, periods={}, future_value={}, total_invested={}",
        input.contribution_interval, outcome.periods, outcome.future_value, outcome.total_invested
    );
    Ok(outcome)
}
