//! Validation domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    MAX_ANNUAL_RATE_PERCENT, MAX_DURATION_YEARS, MAX_INVESTMENT_AMOUNT, MIN_DURATION_YEARS,
};
use crate::utils::format_number;

/// Controls how a bound is rendered inside an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoundKind {
    /// `$999,999,000`
    Money,
    /// `100 years`
    Years,
    /// `25%`
    Percent,
}

/// Declared limits for one numeric form field. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConstraint {
    /// Sentence subject used in messages, e.g. "The investment amount".
    pub label: String,
    pub min: Decimal,
    pub max: Decimal,
    pub required: bool,
    pub whole_number: bool,
    pub kind: BoundKind,
}

impl FieldConstraint {
    pub fn new(label: &str, min: Decimal, max: Decimal, kind: BoundKind) -> Self {
        FieldConstraint {
            label: label.to_string(),
            min,
            max,
            required: true,
            whole_number: false,
            kind,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn whole_number(mut self) -> Self {
        self.whole_number = true;
        self
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    /// Renders a bound with thousands separators and the field's unit.
    pub fn format_bound(&self, bound: Decimal) -> String {
        let number = format_number(bound);
        match self.kind {
            BoundKind::Money => format!("${}", number),
            BoundKind::Percent => format!("{}%", number),
            BoundKind::Years if bound == Decimal::ONE => format!("{} year", number),
            BoundKind::Years => format!("{} years", number),
        }
    }
}

/// The constraint set for the calculator form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConstraints {
    pub principal: FieldConstraint,
    pub contribution_amount: FieldConstraint,
    pub annual_rate_percent: FieldConstraint,
    pub duration_years: FieldConstraint,
}

impl Default for FieldConstraints {
    fn default() -> Self {
        FieldConstraints {
            principal: FieldConstraint::new(
                "The investment amount",
                Decimal::ZERO,
                MAX_INVESTMENT_AMOUNT,
                BoundKind::Money,
            ),
            contribution_amount: FieldConstraint::new(
                "The contribution amount",
                Decimal::ZERO,
                MAX_INVESTMENT_AMOUNT,
                BoundKind::Money,
            )
            .optional(),
            annual_rate_percent: FieldConstraint::new(
                "The annual rate",
                Decimal::ZERO,
                MAX_ANNUAL_RATE_PERCENT,
                BoundKind::Percent,
            )
            .optional(),
            duration_years: FieldConstraint::new(
                "The investment duration",
                MIN_DURATION_YEARS,
                MAX_DURATION_YEARS,
                BoundKind::Years,
            )
            .whole_number(),
        }
    }
}

/// Outcome of checking a single field. `message` is empty when valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub field_name: String,
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn pass(field_name: &str) -> Self {
        ValidationResult {
            field_name: field_name.to_string(),
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(field_name: &str, message: impl Into<String>) -> Self {
        ValidationResult {
            field_name: field_name.to_string(),
            valid: false,
            message: message.into(),
        }
    }
}

/// One result per field, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn new(results: Vec<ValidationResult>) -> Self {
        ValidationReport { results }
    }

    /// True iff every field passed.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|r| r.valid)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.valid)
    }

    pub fn result_for(&self, field_name: &str) -> Option<&ValidationResult> {
        self.results.iter().find(|r| r.field_name == field_name)
    }
}
