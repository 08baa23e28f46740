//! Investment calculator service trait.
//!
//! The UI layer reads the current form into [`InvestmentFields`] and calls
//! into this trait; nothing is kept between calls.

use rust_decimal::Decimal;

use super::investments_model::{InvestmentFields, InvestmentInput, InvestmentOutcome};
use crate::errors::Result;
use crate::validation::{FieldConstraints, ValidationReport};

/// Trait defining the contract for the validate-then-calculate flow.
pub trait InvestmentServiceTrait: Send + Sync {
    /// Constraints the form fields are checked against.
    fn constraints(&self) -> &FieldConstraints;

    /// Annual rate used when a request does not provide one.
    fn default_annual_rate(&self) -> Decimal;

    /// Checks every field and reports one result per field.
    fn validate(&self, fields: &InvestmentFields) -> ValidationReport;

    /// Validates the form and converts it into typed input.
    ///
    /// Fails with `ValidationError::InvalidFields` carrying the full report
    /// when any field is rejected.
    fn parse_input(&self, fields: &InvestmentFields) -> Result<InvestmentInput>;

    /// Runs the calculator on already validated input.
    fn calculate(&self, input: &InvestmentInput) -> Result<InvestmentOutcome>;

    /// Validates and calculates in one step.
    fn compute(&self, fields: &InvestmentFields) -> Result<InvestmentOutcome> {
        let input = self.parse_input(fields)?;
        self.calculate(&input)
    }

    /// One-sentence description of the outcome for the results panel.
    fn summarize(&self, input: &InvestmentInput, outcome: &InvestmentOutcome) -> String;
}
