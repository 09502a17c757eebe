//! Common helpers shared by the calculators.
//!
//! Rounding, flooring and the display conventions for currency and
//! percentages.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to `dp` decimal places using half-up rounding.
///
/// Values at exactly the midpoint are rounded away from zero, which for the
/// non-negative amounts handled here means upwards.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use prequal_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(80.04), 1), dec!(80.0));
/// assert_eq!(round_half_up(dec!(80.05), 1), dec!(80.1));
/// assert_eq!(round_half_up(dec!(457491.5), 0), dec!(457492));
/// ```
pub fn round_half_up(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use prequal_core::calculations::common::max;
///
/// assert_eq!(max(dec!(-250.00), dec!(0)), dec!(0));
/// assert_eq!(max(dec!(3750.00), dec!(0)), dec!(3750.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Formats a currency amount as whole dollars with comma thousands
/// separators (en-AU grouping). No currency symbol is added.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use prequal_core::calculations::common::format_whole_dollars;
///
/// assert_eq!(format_whole_dollars(dec!(1234567.5)), "1,234,568");
/// assert_eq!(format_whole_dollars(dec!(160000)), "160,000");
/// assert_eq!(format_whole_dollars(dec!(999.49)), "999");
/// ```
pub fn format_whole_dollars(value: Decimal) -> String {
    let rounded = round_half_up(value, 0);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an LVR percentage with exactly one decimal place.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use prequal_core::calculations::common::format_percent;
///
/// assert_eq!(format_percent(dec!(80)), "80.0");
/// assert_eq!(format_percent(dec!(83.3)), "83.3");
/// ```
pub fn format_percent(value: Decimal) -> String {
    format!("{:.1}", round_half_up(value, 1))
}
