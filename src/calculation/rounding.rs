//! Decimal rounding shared by the calculation steps.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places hours and money are reported with.
pub const REPORTED_DECIMAL_PLACES: u32 = 2;

/// Rounds to two decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_2dp;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_2dp(Decimal::from_str("107.025").unwrap()), Decimal::from_str("107.03").unwrap());
/// assert_eq!(round_2dp(Decimal::from_str("8.3333").unwrap()), Decimal::from_str("8.33").unwrap());
/// ```
pub fn round_2dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(REPORTED_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
