//! Validation module - field constraints, per-field results, and the validator.

mod validation_model;
mod validator;

pub use validation_model::{
    BoundKind, FieldConstraint, FieldConstraints, ValidationReport, ValidationResult,
};
pub use validator::{check_field, parse_field, validate, INVALID_INTERVAL_MESSAGE};
