use log::{debug, warn};
use rust_decimal::Decimal;

use super::calculator::compute_outcome;
use super::investments_model::{InvestmentFields, InvestmentInput, InvestmentOutcome};
use super::investments_traits::InvestmentServiceTrait;
use crate::constants::DEFAULT_ANNUAL_RATE_PERCENT;
use crate::errors::{Result, ValidationError};
use crate::utils::{format_currency, format_number};
use crate::validation::{validate, FieldConstraints, ValidationReport};

/// Stateless calculator service configured with field constraints and a
/// default annual rate.
#[derive(Debug, Clone)]
pub struct InvestmentService {
    constraints: FieldConstraints,
    default_annual_rate: Decimal,
}

impl InvestmentService {
    pub fn new(constraints: FieldConstraints, default_annual_rate: Decimal) -> Self {
        InvestmentService {
            constraints,
            default_annual_rate,
        }
    }
}

impl Default for InvestmentService {
    fn default() -> Self {
        Self::new(FieldConstraints::default(), DEFAULT_ANNUAL_RATE_PERCENT)
    }
}

impl InvestmentServiceTrait for InvestmentService {
    fn constraints(&self) -> &FieldConstraints {
        &self.constraints
    }

    fn default_annual_rate(&self) -> Decimal {
        self.default_annual_rate
    }

    fn validate(&self, fields: &InvestmentFields) -> ValidationReport {
        validate(fields, &self.constraints)
    }

    fn parse_input(&self, fields: &InvestmentFields) -> Result<InvestmentInput> {
        let report = self.validate(fields);
        if !report.is_valid() {
            warn!(
                "Rejected calculation request, invalid fields: {:?}",
                report
                    .failures()
                    .map(|r| r.field_name.as_str())
                    .collect::<Vec<_>>()
            );
            return Err(ValidationError::InvalidFields(report).into());
        }
        InvestmentInput::from_fields(fields, self.default_annual_rate)
    }

    fn calculate(&self, input: &InvestmentInput) -> Result<InvestmentOutcome> {
        debug!("Calculating future value for {:?}", input);
        compute_outcome(input)
    }

    fn summarize(&self, input: &InvestmentInput, outcome: &InvestmentOutcome) -> String {
        describe_outcome(input, outcome)
    }
}

/// Plain-text result sentence, e.g.
/// `Your investment will be $1,967.15 in 10 years.`
pub fn describe_outcome(input: &InvestmentInput, outcome: &InvestmentOutcome) -> String {
    let amount = format_currency(outcome.future_value);
    let years = plural(input.duration_years, "year");
    match input.contribution_interval.periods_per_year() {
        0 => format!("Your investment will be {} in {}.", amount, years),
        periods => format!(
            "Your investment will be {} with {} per year over {}.",
            amount,
            plural(periods, "investment period"),
            years
        ),
    }
}

fn plural(count: u32, noun: &str) -> String {
    let count_text = format_number(Decimal::from(count));
    if count == 1 {
        format!("{} {}", count_text, noun)
    } else {
        format!("{} {}s", count_text, noun)
    }
}
