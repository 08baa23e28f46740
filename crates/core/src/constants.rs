use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Average annual return applied when a request does not carry its own rate.
pub const DEFAULT_ANNUAL_RATE_PERCENT: Decimal = dec!(7);

/// Largest amount accepted for the principal and for each contribution.
pub const MAX_INVESTMENT_AMOUNT: Decimal = dec!(999999000);

/// Inclusive bounds for the investment duration, in whole years.
pub const MIN_DURATION_YEARS: Decimal = dec!(1);
pub const MAX_DURATION_YEARS: Decimal = dec!(100);

/// Upper bound for a user-supplied annual rate.
pub const MAX_ANNUAL_RATE_PERCENT: Decimal = dec!(25);

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Field identifiers, as the front-end names its inputs.
pub const FIELD_PRINCIPAL: &str = "principal";
pub const FIELD_CONTRIBUTION_AMOUNT: &str = "contributionAmount";
pub const FIELD_CONTRIBUTION_INTERVAL: &str = "contributionInterval";
pub const FIELD_ANNUAL_RATE: &str = "annualRatePercent";
pub const FIELD_DURATION_YEARS: &str = "durationYears";
