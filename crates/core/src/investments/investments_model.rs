//! Investment domain models.

use std::fmt;
use std::str::FromStr;

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::validation::parse_field;

/// How often a contribution is added on top of the principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContributionInterval {
    /// One-time investment, no contributions
    #[default]
    None,
    Yearly,
    Monthly,
}

impl ContributionInterval {
    pub const ALL: [ContributionInterval; 3] = [
        ContributionInterval::None,
        ContributionInterval::Yearly,
        ContributionInterval::Monthly,
    ];

    /// Number of compounding and contribution periods in one year.
    pub fn periods_per_year(self) -> u32 {
        match self {
            ContributionInterval::None => 0,
            ContributionInterval::Yearly => 1,
            ContributionInterval::Monthly => 12,
        }
    }

    /// Whether the contribution-amount field applies to this interval.
    /// The front-end disables that field when this returns `true`.
    pub fn is_one_time(self) -> bool {
        self == ContributionInterval::None
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContributionInterval::None => "none",
            ContributionInterval::Yearly => "yearly",
            ContributionInterval::Monthly => "monthly",
        }
    }
}

impl fmt::Display for ContributionInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContributionInterval {
    type Err = ValidationError;

    /// Accepts interval names as well as the periods-per-year values the
    /// front-end select box submits (`0`, `1`, `12`).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "one-time" | "once" | "0" => Ok(ContributionInterval::None),
            "yearly" | "annually" | "1" => Ok(ContributionInterval::Yearly),
            "monthly" | "12" => Ok(ContributionInterval::Monthly),
            other => Err(ValidationError::InvalidInput(format!(
                "Unknown contribution interval '{}'",
                other
            ))),
        }
    }
}

/// Raw form state exactly as the user typed it.
///
/// Numbers may arrive either as JSON strings or JSON numbers; both are kept
/// as text so the validator can report non-numeric input per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestmentFields {
    #[serde(deserialize_with = "field_value::deserialize")]
    pub principal: String,
    #[serde(deserialize_with = "field_value::deserialize")]
    pub contribution_amount: String,
    #[serde(deserialize_with = "field_value::deserialize")]
    pub contribution_interval: String,
    #[serde(
        deserialize_with = "field_value::deserialize_optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub annual_rate_percent: Option<String>,
    #[serde(deserialize_with = "field_value::deserialize")]
    pub duration_years: String,
}

mod field_value {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawField {
        Text(String),
        Number(serde_json::Number),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(deserialize_optional(deserializer)?.unwrap_or_default())
    }

    pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawField>::deserialize(deserializer)? {
            Some(RawField::Text(text)) => Some(text),
            Some(RawField::Number(number)) => Some(number.to_string()),
            None => None,
        })
    }
}

/// Validated, typed input for one calculation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentInput {
    pub principal: Decimal,
    pub contribution_amount: Decimal,
    pub contribution_interval: ContributionInterval,
    pub annual_rate_percent: Decimal,
    pub duration_years: u32,
}

impl InvestmentInput {
    /// A single lump sum left to compound annually.
    pub fn one_time(principal: Decimal, annual_rate_percent: Decimal, duration_years: u32) -> Self {
        Self {
            principal,
            contribution_amount: Decimal::ZERO,
            contribution_interval: ContributionInterval::None,
            annual_rate_percent,
            duration_years,
        }
    }

    /// A principal plus a fixed contribution every period.
    pub fn with_contributions(
        principal: Decimal,
        contribution_amount: Decimal,
        contribution_interval: ContributionInterval,
        annual_rate_percent: Decimal,
        duration_years: u32,
    ) -> Self {
        Self {
            principal,
            contribution_amount,
            contribution_interval,
            annual_rate_percent,
            duration_years,
        }
    }

    /// Number of contribution periods over the whole duration; zero for a
    /// one-time investment.
    pub fn total_periods(&self) -> u32 {
        self.contribution_interval
            .periods_per_year()
            .saturating_mul(self.duration_years)
    }

    /// Builds the typed input from form fields that already passed validation.
    ///
    /// `default_annual_rate` is used when the form carries no rate. The
    /// contribution amount is ignored for one-time investments.
    pub fn from_fields(fields: &InvestmentFields, default_annual_rate: Decimal) -> Result<Self> {
        let contribution_interval: ContributionInterval = fields.contribution_interval.parse()?;

        let principal = parse_field(&fields.principal)?.ok_or_else(|| missing("principal"))?;

        let contribution_amount = if contribution_interval.is_one_time() {
            Decimal::ZERO
        } else {
            parse_field(&fields.contribution_amount)?.unwrap_or(Decimal::ZERO)
        };

        let annual_rate_percent = match fields.annual_rate_percent.as_deref() {
            Some(raw) => parse_field(raw)?.unwrap_or(default_annual_rate),
            None => default_annual_rate,
        };

        let years = parse_field(&fields.duration_years)?.ok_or_else(|| missing("duration"))?;
        if !years.fract().is_zero() {
            return Err(ValidationError::InvalidInput(format!(
                "Duration must be a whole number of years, got {}",
                years
            ))
            .into());
        }
        let duration_years = years.to_u32().ok_or_else(|| {
            Error::from(ValidationError::InvalidInput(format!(
                "Duration out of range: {}",
                years
            )))
        })?;

        Ok(Self {
            principal,
            contribution_amount,
            contribution_interval,
            annual_rate_percent,
            duration_years,
        })
    }
}

fn missing(field: &str) -> Error {
    ValidationError::InvalidInput(format!("Missing {} value", field)).into()
}

/// Result of one calculation, rounded to cents for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentOutcome {
    pub future_value: Decimal,
    pub total_invested: Decimal,
    /// `future_value - total_invested`, both already rounded.
    pub profit: Decimal,
    /// Full-precision future value for further composition.
    pub unrounded_future_value: Decimal,
    pub periods: u32,
}
