//! Core error types for the compound growth calculator.
//!
//! Invalid form input is an expected outcome and is normally carried by a
//! [`ValidationReport`]; these errors only appear when a caller asks for a
//! computation the report has already rejected, or when arithmetic leaves the
//! representable range.

use thiserror::Error;

use crate::validation::ValidationReport;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the calculator.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Growth calculation failed: {0}")]
    Calculation(#[from] CalculatorError),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{} field(s) are invalid", .0.failures().count())]
    InvalidFields(ValidationReport),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

/// Errors raised while evaluating the growth formula.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(String),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}
