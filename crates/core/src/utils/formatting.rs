//! US-locale number and currency rendering.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Rounds a monetary amount to cents, half away from zero.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Formats `value` with `dp` decimal places and comma thousands separators.
///
/// `format_thousands(dec!(999999000), 0)` yields `"999,999,000"`.
pub fn format_thousands(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.*}", dp as usize, rounded.abs());
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats a number keeping only the decimals it actually carries.
pub fn format_number(value: Decimal) -> String {
    let normalized = value.normalize();
    format_thousands(normalized, normalized.scale())
}

/// Formats an amount as US dollars, e.g. `$1,967.15` or `-$12.00`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_to_cents(value);
    let amount = format_thousands(rounded.abs(), DISPLAY_DECIMAL_PRECISION);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${amount}")
    } else {
        format!("${amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn groups_integer_digits() {
        assert_eq!(format_thousands(dec!(999999000), 0), "999,999,000");
        assert_eq!(format_thousands(dec!(100), 0), "100");
        assert_eq!(format_thousands(dec!(1000), 0), "1,000");
        assert_eq!(format_thousands(dec!(0), 0), "0");
    }

    #[test]
    fn keeps_requested_decimals() {
        assert_eq!(format_thousands(dec!(1234567.891), 2), "1,234,567.89");
        assert_eq!(format_thousands(dec!(1967.1), 2), "1,967.10");
        assert_eq!(format_thousands(dec!(-4321.5), 1), "-4,321.5");
    }

    #[test]
    fn format_number_drops_trailing_zeros() {
        assert_eq!(format_number(dec!(25.00)), "25");
        assert_eq!(format_number(dec!(2.50)), "2.5");
        assert_eq!(format_number(dec!(1000000)), "1,000,000");
    }

    #[test]
    fn formats_us_currency() {
        assert_eq!(format_currency(dec!(1967.151357)), "$1,967.15");
        assert_eq!(format_currency(dec!(691150.47264)), "$691,150.47");
        assert_eq!(format_currency(dec!(-12)), "-$12.00");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn rounds_half_cents_away_from_zero() {
        assert_eq!(round_to_cents(dec!(2.345)), dec!(2.35));
        assert_eq!(round_to_cents(dec!(-2.345)), dec!(-2.35));
        assert_eq!(round_to_cents(dec!(2.344)), dec!(2.34));
    }
}
