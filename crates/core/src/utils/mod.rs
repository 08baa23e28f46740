//! Shared helpers.

pub mod formatting;

pub use formatting::{format_currency, format_number, format_thousands, round_to_cents};
