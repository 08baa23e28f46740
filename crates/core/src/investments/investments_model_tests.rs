//! Tests for investment domain models.

#[cfg(test)]
mod tests {
    use crate::errors::{Error, ValidationError};
    use crate::investments::{ContributionInterval, InvestmentFields, InvestmentInput};
    use rust_decimal_macros::dec;

    fn fields(principal: &str, amount: &str, interval: &str, years: &str) -> InvestmentFields {
        InvestmentFields {
            principal: principal.to_string(),
            contribution_amount: amount.to_string(),
            contribution_interval: interval.to_string(),
            annual_rate_percent: None,
            duration_years: years.to_string(),
        }
    }

    // ==================== ContributionInterval ====================

    #[test]
    fn test_periods_per_year() {
        assert_eq!(ContributionInterval::None.periods_per_year(), 0);
        assert_eq!(ContributionInterval::Yearly.periods_per_year(), 1);
        assert_eq!(ContributionInterval::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn test_interval_parses_names_and_period_counts() {
        for (raw, expected) in [
            ("none", ContributionInterval::None),
            ("", ContributionInterval::None),
            ("One-Time", ContributionInterval::None),
            ("0", ContributionInterval::None),
            ("yearly", ContributionInterval::Yearly),
            ("Annually", ContributionInterval::Yearly),
            ("1", ContributionInterval::Yearly),
            (" MONTHLY ", ContributionInterval::Monthly),
            ("12", ContributionInterval::Monthly),
        ] {
            assert_eq!(raw.parse::<ContributionInterval>().unwrap(), expected, "{raw:?}");
        }
    }

    #[test]
    fn test_interval_rejects_unknown_values() {
        assert!("weekly".parse::<ContributionInterval>().is_err());
        assert!("4".parse::<ContributionInterval>().is_err());
    }

    #[test]
    fn test_interval_serialization() {
        assert_eq!(
            serde_json::to_string(&ContributionInterval::Monthly).unwrap(),
            "\"monthly\""
        );
        assert_eq!(
            serde_json::from_str::<ContributionInterval>("\"none\"").unwrap(),
            ContributionInterval::None
        );
    }

    // ==================== InvestmentFields ====================

    #[test]
    fn test_fields_accept_strings_numbers_and_nulls() {
        let json = r#"{
            "principal": 1000,
            "contributionAmount": "100.50",
            "contributionInterval": "monthly",
            "annualRatePercent": 6.5,
            "durationYears": null
        }"#;
        let parsed: InvestmentFields = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.principal, "1000");
        assert_eq!(parsed.contribution_amount, "100.50");
        assert_eq!(parsed.contribution_interval, "monthly");
        assert_eq!(parsed.annual_rate_percent.as_deref(), Some("6.5"));
        assert_eq!(parsed.duration_years, "");
    }

    #[test]
    fn test_fields_missing_keys_default_to_empty() {
        let parsed: InvestmentFields = serde_json::from_str(r#"{"principal": "5"}"#).unwrap();
        assert_eq!(parsed.principal, "5");
        assert_eq!(parsed.contribution_interval, "");
        assert_eq!(parsed.annual_rate_percent, None);
    }

    // ==================== InvestmentInput::from_fields ====================

    #[test]
    fn test_from_fields_uses_default_rate() {
        let input =
            InvestmentInput::from_fields(&fields("1000", "100", "monthly", "10"), dec!(7)).unwrap();

        assert_eq!(input.principal, dec!(1000));
        assert_eq!(input.contribution_amount, dec!(100));
        assert_eq!(input.contribution_interval, ContributionInterval::Monthly);
        assert_eq!(input.annual_rate_percent, dec!(7));
        assert_eq!(input.duration_years, 10);
        assert_eq!(input.total_periods(), 120);
    }

    #[test]
    fn test_from_fields_prefers_explicit_rate() {
        let mut form = fields("1000", "", "yearly", "3");
        form.annual_rate_percent = Some("4.25".to_string());
        let input = InvestmentInput::from_fields(&form, dec!(7)).unwrap();

        assert_eq!(input.annual_rate_percent, dec!(4.25));
        assert_eq!(input.contribution_amount, dec!(0));
    }

    #[test]
    fn test_from_fields_one_time_ignores_contribution_text() {
        let input =
            InvestmentInput::from_fields(&fields("1000", "not a number", "none", "5"), dec!(7))
                .unwrap();
        assert_eq!(input.contribution_amount, dec!(0));
        assert_eq!(input.total_periods(), 0);
    }

    #[test]
    fn test_from_fields_rejects_fractional_years() {
        let err = InvestmentInput::from_fields(&fields("1000", "", "none", "2.5"), dec!(7))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_fields_rejects_missing_principal() {
        let err =
            InvestmentInput::from_fields(&fields("", "", "none", "5"), dec!(7)).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }
}
