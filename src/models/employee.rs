//! Employee models.
//!
//! This module defines [`DirectoryEmployee`], the row the employee directory
//! returns for a department, and [`EmployeePayrollInput`], the per-employee
//! projection the engine computes a payroll entry from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AttendanceRecord;

/// An employee as listed by the employee directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryEmployee {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// Display name.
    pub name: String,
    /// Job position shown on the payroll entry.
    pub position: String,
    /// The employee's current base salary per month.
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_salary: Decimal,
    /// The employee's own overtime multiplier, if set.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub overtime_rate: Option<Decimal>,
    /// The role the employee holds, if any.
    #[serde(default)]
    pub role_id: Option<String>,
}

/// The per-employee input to a payroll computation.
///
/// Assembled by the runner from the directory row, the resolved overtime
/// multiplier and the employee's attendance for the period. It only lives
/// for the duration of one run.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmployeePayrollInput;
/// use rust_decimal::Decimal;
///
/// let input = EmployeePayrollInput {
///     employee_id: "emp_001".to_string(),
///     name: "Ada Lovelace".to_string(),
///     position: "Engineer".to_string(),
///     monthly_salary: Decimal::new(8800, 0),
///     overtime_rate: Decimal::new(15, 1),
///     attendance: vec![],
/// };
/// assert!(input.attendance.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeePayrollInput {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// Display name.
    pub name: String,
    /// Job position.
    pub position: String,
    /// The employee's current base salary per month.
    pub monthly_salary: Decimal,
    /// The overtime multiplier in effect for this employee.
    pub overtime_rate: Decimal,
    /// Attendance records for the employee.
    pub attendance: Vec<AttendanceRecord>,
}

impl EmployeePayrollInput {
    /// Builds the input from a directory row.
    pub fn from_directory(
        employee: &DirectoryEmployee,
        overtime_rate: Decimal,
        attendance: Vec<AttendanceRecord>,
    ) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            name: employee.name.clone(),
            position: employee.position.clone(),
            monthly_salary: employee.monthly_salary,
            overtime_rate,
            attendance,
        }
    }
}
