//! Pay rate resolution.
//!
//! This module derives the effective hourly and overtime hourly rates from a
//! monthly salary and the monthly regular-hours budget.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Hourly rates derived from a monthly salary.
///
/// Rates are kept unrounded; only the pay amounts built from them are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayRates {
    /// Monthly salary divided by the monthly regular-hours budget.
    pub hourly_rate: Decimal,
    /// Hourly rate multiplied by the overtime multiplier.
    pub overtime_hourly_rate: Decimal,
}

/// Resolves the hourly and overtime hourly rates.
///
/// # Arguments
///
/// * `monthly_salary` - The employee's base salary per month
/// * `regular_hours_per_month` - The monthly regular-hours budget
/// * `overtime_rate_multiplier` - The multiplier for overtime hours (e.g., 1.5)
///
/// # Errors
///
/// - `InvalidConfiguration` if `regular_hours_per_month` is not positive
/// - `InvalidInput` if the salary or the multiplier is negative, or if a
///   rate does not fit in a `Decimal`
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_pay_rates;
/// use rust_decimal::Decimal;
///
/// let rates = resolve_pay_rates(Decimal::new(8800, 0), Decimal::new(176, 0), Decimal::new(15, 1)).unwrap();
/// assert_eq!(rates.hourly_rate, Decimal::new(50, 0));
/// assert_eq!(rates.overtime_hourly_rate, Decimal::new(75, 0));
/// ```
pub fn resolve_pay_rates(
    monthly_salary: Decimal,
    regular_hours_per_month: Decimal,
    overtime_rate_multiplier: Decimal,
) -> EngineResult<PayRates> {
    if regular_hours_per_month <= Decimal::ZERO {
        return Err(EngineError::invalid_configuration(format!(
            "regular hours per month must be positive, got {}",
            regular_hours_per_month
        )));
    }

    if monthly_salary < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "monthly_salary",
            format!("must not be negative, got {}", monthly_salary),
        ));
    }

    if overtime_rate_multiplier < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "overtime_rate",
            format!("must not be negative, got {}", overtime_rate_multiplier),
        ));
    }

    let hourly_rate = monthly_salary
        .checked_div(regular_hours_per_month)
        .ok_or_else(|| {
            EngineError::invalid_input(
                "monthly_salary",
                format!(
                    "hourly rate for {} over {} hours is out of range",
                    monthly_salary, regular_hours_per_month
                ),
            )
        })?;

    let overtime_hourly_rate = hourly_rate
        .checked_mul(overtime_rate_multiplier)
        .ok_or_else(|| {
            EngineError::invalid_input(
                "overtime_rate",
                format!(
                    "overtime hourly rate for {} at {}x is out of range",
                    hourly_rate, overtime_rate_multiplier
                ),
            )
        })?;

    Ok(PayRates {
        hourly_rate,
        overtime_hourly_rate,
    })
}
