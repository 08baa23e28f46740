//! Compound Core - validation and future-value arithmetic.
//!
//! This crate holds the calculation and validation logic of the compound
//! growth calculator. It is UI-agnostic: callers read the current form into
//! an [`InvestmentFields`] value, validate it, and compute the outcome.

pub mod constants;
pub mod errors;
pub mod investments;
pub mod utils;
pub mod validation;

// Re-export the public calculator surface
pub use investments::*;
pub use validation::{
    validate, BoundKind, FieldConstraint, FieldConstraints, ValidationReport, ValidationResult,
};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
