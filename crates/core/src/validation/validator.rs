//! Form field validation.
//!
//! Every field is checked independently and produces exactly one
//! [`ValidationResult`]. The contribution amount is skipped (reported valid)
//! for one-time investments.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::validation_model::{
    BoundKind, FieldConstraint, FieldConstraints, ValidationReport, ValidationResult,
};
use crate::constants::{
    FIELD_ANNUAL_RATE, FIELD_CONTRIBUTION_AMOUNT, FIELD_CONTRIBUTION_INTERVAL,
    FIELD_DURATION_YEARS, FIELD_PRINCIPAL,
};
use crate::investments::{ContributionInterval, InvestmentFields};

pub const INVALID_INTERVAL_MESSAGE: &str =
    "Contribution interval must be one of none, yearly or monthly.";

/// Parses a raw field value. Blank input yields `Ok(None)`.
pub fn parse_field(raw: &str) -> Result<Option<Decimal>, rust_decimal::Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Decimal::from_str(trimmed).map(Some)
}

/// Checks a single numeric field against its constraint.
pub fn check_field(field_name: &str, raw: &str, constraint: &FieldConstraint) -> ValidationResult {
    let value = match parse_field(raw) {
        Ok(Some(value)) => value,
        Ok(None) if constraint.required => {
            return ValidationResult::fail(field_name, format!("{} is required.", constraint.label));
        }
        Ok(None) => return ValidationResult::pass(field_name),
        // Well-formed digits that overflow a Decimal are out of range.
        Err(_) if is_numeric_literal(raw) => {
            return if raw.trim_start().starts_with('-') {
                below_min(field_name, constraint)
            } else {
                above_max(field_name, constraint)
            };
        }
        Err(_) => {
            return ValidationResult::fail(
                field_name,
                format!("{} must be a number.", constraint.label),
            );
        }
    };

    if value < constraint.min {
        below_min(field_name, constraint)
    } else if value > constraint.max {
        above_max(field_name, constraint)
    } else if constraint.whole_number && !value.fract().is_zero() {
        let unit = match constraint.kind {
            BoundKind::Years => " of years",
            BoundKind::Money | BoundKind::Percent => "",
        };
        ValidationResult::fail(
            field_name,
            format!("{} must be a whole number{}.", constraint.label, unit),
        )
    } else {
        ValidationResult::pass(field_name)
    }
}

fn below_min(field_name: &str, constraint: &FieldConstraint) -> ValidationResult {
    ValidationResult::fail(
        field_name,
        format!(
            "{} must be greater than {}.",
            constraint.label,
            constraint.format_bound(constraint.min)
        ),
    )
}

fn above_max(field_name: &str, constraint: &FieldConstraint) -> ValidationResult {
    ValidationResult::fail(
        field_name,
        format!(
            "{} must be smaller than {}.",
            constraint.label,
            constraint.format_bound(constraint.max)
        ),
    )
}

/// `[+-]digits[.digits]`
fn is_numeric_literal(raw: &str) -> bool {
    let trimmed = raw.trim();
    let unsigned = trimmed
        .strip_prefix(['+', '-'])
        .unwrap_or(trimmed);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    !int_part.is_empty()
        && int_part.chars().all(|c| c.is_ascii_digit())
        && frac_part.chars().all(|c| c.is_ascii_digit())
}

/// Validates the whole form. Never fails; invalid input is reported in the
/// returned report.
pub fn validate(fields: &InvestmentFields, constraints: &FieldConstraints) -> ValidationReport {
    let interval = fields.contribution_interval.parse::<ContributionInterval>();

    let interval_result = match interval {
        Ok(_) => ValidationResult::pass(FIELD_CONTRIBUTION_INTERVAL),
        Err(_) => ValidationResult::fail(FIELD_CONTRIBUTION_INTERVAL, INVALID_INTERVAL_MESSAGE),
    };

    let contribution_result = match interval {
        Ok(interval) if interval.is_one_time() => ValidationResult::pass(FIELD_CONTRIBUTION_AMOUNT),
        _ => check_field(
            FIELD_CONTRIBUTION_AMOUNT,
            &fields.contribution_amount,
            &constraints.contribution_amount,
        ),
    };

    ValidationReport::new(vec![
        check_field(FIELD_PRINCIPAL, &fields.principal, &constraints.principal),
        interval_result,
        contribution_result,
        check_field(
            FIELD_ANNUAL_RATE,
            fields.annual_rate_percent.as_deref().unwrap_or_default(),
            &constraints.annual_rate_percent,
        ),
        check_field(
            FIELD_DURATION_YEARS,
            &fields.duration_years,
            &constraints.duration_years,
        ),
    ])
}
