//! Payroll entry construction.
//!
//! This module combines an employee, their aggregated hours and their resolved
//! rates into a [`PayrollEntry`].

use chrono::{DateTime, Utc};

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeePayrollInput, PayPeriod, PayrollEntry, PayrollStatus};

use super::attendance_aggregation::AggregatedHours;
use super::pay_rates::PayRates;
use super::rounding::round_2dp;

/// Builds the payroll entry for one employee.
///
/// Regular and overtime pay are each rounded to cents, and `total_salary` is
/// the sum of those rounded parts, so the three stored amounts always add up.
/// The entry starts in [`PayrollStatus::Pending`].
///
/// This is a pure function: identical inputs give identical entries.
///
/// # Errors
///
/// - `InvalidInput` if a pay amount does not fit in a `Decimal`
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{build_payroll_entry, AggregatedHours, PayRates};
/// use payroll_engine::models::{EmployeePayrollInput, PayPeriod};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeePayrollInput {
///     employee_id: "emp_001".to_string(),
///     name: "Ada Lovelace".to_string(),
///     position: "Engineer".to_string(),
///     monthly_salary: Decimal::new(8800, 0),
///     overtime_rate: Decimal::new(15, 1),
///     attendance: vec![],
/// };
/// let hours = AggregatedHours {
///     regular_hours: Decimal::new(176, 0),
///     overtime_hours: Decimal::new(14, 0),
/// };
/// let rates = PayRates {
///     hourly_rate: Decimal::new(50, 0),
///     overtime_hourly_rate: Decimal::new(75, 0),
/// };
/// let period = PayPeriod::for_month(3, 2026).unwrap();
///
/// let entry = build_payroll_entry(&employee, &hours, &rates, &period, Utc::now()).unwrap();
/// assert_eq!(entry.regular_pay, Decimal::new(8800, 0));
/// assert_eq!(entry.overtime_pay, Decimal::new(1050, 0));
/// assert_eq!(entry.total_salary, Decimal::new(9850, 0));
/// ```
pub fn build_payroll_entry(
    employee: &EmployeePayrollInput,
    hours: &AggregatedHours,
    rates: &PayRates,
    period: &PayPeriod,
    generated_at: DateTime<Utc>,
) -> EngineResult<PayrollEntry> {
    let regular_pay = pay_for("regular_hours", hours.regular_hours, rates.hourly_rate)?;
    let overtime_pay = pay_for(
        "overtime_hours",
        hours.overtime_hours,
        rates.overtime_hourly_rate,
    )?;
    let total_salary = regular_pay.checked_add(overtime_pay).ok_or_else(|| {
        EngineError::invalid_input(
            "total_salary",
            format!("{} + {} is out of range", regular_pay, overtime_pay),
        )
    })?;

    Ok(PayrollEntry {
        employee_id: employee.employee_id.clone(),
        employee_name: employee.name.clone(),
        position: employee.position.clone(),
        regular_hours: hours.regular_hours,
        overtime_hours: hours.overtime_hours,
        regular_pay,
        overtime_rate: employee.overtime_rate,
        overtime_pay,
        total_salary,
        month: period.month_name().to_string(),
        year: period.year,
        generated_at,
        status: PayrollStatus::Pending,
    })
}

/// Hours times rate, rounded to cents.
fn pay_for(field: &str, hours: Decimal, rate: Decimal) -> EngineResult<Decimal> {
    hours.checked_mul(rate).map(round_2dp).ok_or_else(|| {
        EngineError::invalid_input(
            field,
            format!("{} hours at {} per hour is out of range", hours, rate),
        )
    })
}
