use compound_core::utils::format_currency;
use compound_core::{
    ContributionInterval, FieldConstraint, InvestmentOutcome, ValidationReport, ValidationResult,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FieldResult {
    pub field_name: String,
    pub valid: bool,
    pub message: String,
}

impl From<ValidationResult> for FieldResult {
    fn from(r: ValidationResult) -> Self {
        Self {
            field_name: r.field_name,
            valid: r.valid,
            message: r.message,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub valid: bool,
    pub results: Vec<FieldResult>,
}

impl From<ValidationReport> for ValidateResponse {
    fn from(report: ValidationReport) -> Self {
        Self {
            valid: report.is_valid(),
            results: report.results.into_iter().map(FieldResult::from).collect(),
        }
    }
}

/// Monetary figures as US-locale currency strings, ready to render.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FormattedOutcome {
    pub future_value: String,
    pub total_invested: String,
    pub profit: String,
}

/// Amounts are decimal strings rounded to cents, e.g. `"1967.15"`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ComputeResponse {
    pub future_value: String,
    pub total_invested: String,
    pub profit: String,
    pub periods: u32,
    pub formatted: FormattedOutcome,
    pub summary: String,
}

impl ComputeResponse {
    pub fn new(outcome: &InvestmentOutcome, summary: String) -> Self {
        Self {
            future_value: cents(outcome.future_value),
            total_invested: cents(outcome.total_invested),
            profit: cents(outcome.profit),
            periods: outcome.periods,
            formatted: FormattedOutcome {
                future_value: format_currency(outcome.future_value),
                total_invested: format_currency(outcome.total_invested),
                profit: format_currency(outcome.profit),
            },
            summary,
        }
    }
}

fn cents(value: Decimal) -> String {
    format!("{:.2}", value)
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FieldConstraintInfo {
    pub field_name: String,
    pub label: String,
    pub min: String,
    pub max: String,
    pub required: bool,
    pub whole_number: bool,
}

impl FieldConstraintInfo {
    pub fn new(field_name: &str, c: &FieldConstraint) -> Self {
        Self {
            field_name: field_name.to_string(),
            label: c.label.clone(),
            min: c.min.normalize().to_string(),
            max: c.max.normalize().to_string(),
            required: c.required,
            whole_number: c.whole_number,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct IntervalInfo {
    pub value: String,
    pub periods_per_year: u32,
    /// When true the front-end disables the contribution amount input.
    pub disables_contribution: bool,
}

impl From<ContributionInterval> for IntervalInfo {
    fn from(interval: ContributionInterval) -> Self {
        Self {
            value: interval.as_str().to_string(),
            periods_per_year: interval.periods_per_year(),
            disables_contribution: interval.is_one_time(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintsResponse {
    pub default_annual_rate_percent: String,
    pub intervals: Vec<IntervalInfo>,
    pub fields: Vec<FieldConstraintInfo>,
}
