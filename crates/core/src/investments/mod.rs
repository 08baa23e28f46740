//! Investments module - domain models, the growth calculator, and the service.

pub mod calculator;
mod investments_model;
mod investments_service;
mod investments_traits;

pub use calculator::{
    calculate_future_value, calculate_profit, calculate_total_invested, compute_outcome,
};
pub use investments_model::{
    ContributionInterval, InvestmentFields, InvestmentInput, InvestmentOutcome,
};
pub use investments_service::{describe_outcome, InvestmentService};
pub use investments_traits::InvestmentServiceTrait;


#[cfg(test)]
mod investments_model_tests;
