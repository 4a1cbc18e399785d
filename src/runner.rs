//! Department payroll runs.
//!
//! A run computes one [`PayrollEntry`] per employee of a department for one
//! month. Failures are per employee: an employee whose attendance, role or
//! rates cannot be resolved is reported as an [`EmployeeFailure`] and the run
//! carries on with the next employee.

use std::time::Instant;
use std::vec;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::calculation::{
    OvertimePolicy, aggregate_attendance, build_payroll_entry, resolve_pay_rates,
};
use crate::config::PayrollSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{DirectoryEmployee, EmployeePayrollInput, PayPeriod, PayrollEntry};
use crate::sources::{AttendanceSource, EmployeeDirectory};

/// The step at which an employee's computation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStage {
    /// Fetching attendance failed.
    Attendance,
    /// Looking up the employee's role failed.
    Role,
    /// The salary or overtime rate could not be turned into pay rates.
    Rates,
}

/// An employee left out of a run, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeFailure {
    /// The employee that was skipped.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// Where the computation stopped.
    pub stage: FailureStage,
    /// Description of the underlying error.
    pub message: String,
}

impl EmployeeFailure {
    fn new(employee: &DirectoryEmployee, stage: FailureStage, message: impl ToString) -> Self {
        Self {
            employee_id: employee.employee_id.clone(),
            employee_name: employee.name.clone(),
            stage,
            message: message.to_string(),
        }
    }
}

/// The collected result of a department run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollOutcome {
    /// Department the run covered.
    pub department_id: String,
    /// Month number of the period.
    pub month: u32,
    /// Year of the period.
    pub year: i32,
    /// Entries for every employee that succeeded, in directory order.
    pub entries: Vec<PayrollEntry>,
    /// Employees that were left out, in directory order.
    pub failures: Vec<EmployeeFailure>,
}

impl PayrollOutcome {
    /// Number of employees left out.
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if every employee got an entry.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs payroll for departments against a directory and an attendance source.
///
/// # Example
///
/// ```
/// use payroll_engine::config::{PayrollSettings, RoleCatalog};
/// use payroll_engine::models::DirectoryEmployee;
/// use payroll_engine::runner::PayrollRunner;
/// use payroll_engine::sources::{SnapshotAttendance, SnapshotDirectory};
/// use rust_decimal::Decimal;
///
/// let directory = SnapshotDirectory::new(RoleCatalog::default()).with_department(
///     "dept_ops",
///     vec![DirectoryEmployee {
///         employee_id: "emp_001".to_string(),
///         name: "Ada Lovelace".to_string(),
///         position: "Engineer".to_string(),
///         monthly_salary: Decimal::new(8800, 0),
///         overtime_rate: None,
///         role_id: None,
///     }],
/// );
/// let attendance = SnapshotAttendance::new(vec![]);
/// let settings = PayrollSettings::default();
///
/// let runner = PayrollRunner::new(&settings, &directory, &attendance);
/// let outcome = runner.run("dept_ops", 3, 2026).unwrap().into_outcome();
/// assert_eq!(outcome.entries.len(), 1);
/// assert!(outcome.is_complete());
/// ```
#[derive(Debug)]
pub struct PayrollRunner<'a, D, A> {
    settings: &'a PayrollSettings,
    directory: &'a D,
    attendance: &'a A,
}

impl<'a, D, A> PayrollRunner<'a, D, A>
where
    D: EmployeeDirectory,
    A: AttendanceSource,
{
    /// Creates a runner over the given settings and collaborators.
    pub fn new(settings: &'a PayrollSettings, directory: &'a D, attendance: &'a A) -> Self {
        Self {
            settings,
            directory,
            attendance,
        }
    }

    /// Starts a run for `department_id` and `(month, year)`, stamped with the current time.
    pub fn run(&self, department_id: &str, month: u32, year: i32) -> EngineResult<PayrollRun<'a, D, A>> {
        self.run_at(department_id, month, year, Utc::now())
    }

    /// Starts a run whose entries are all stamped with `generated_at`.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the month or year is invalid
    /// - `DirectoryUnavailable` if the department cannot be listed
    pub fn run_at(
        &self,
        department_id: &str,
        month: u32,
        year: i32,
        generated_at: DateTime<Utc>,
    ) -> EngineResult<PayrollRun<'a, D, A>> {
        let period = PayPeriod::for_month(month, year)?;

        let employees = self
            .directory
            .list_by_department(department_id)
            .map_err(|e| EngineError::DirectoryUnavailable {
                department_id: department_id.to_string(),
                message: e.to_string(),
            })?;

        info!(
            department_id = %department_id,
            month,
            year,
            employees = employees.len(),
            "Starting payroll run"
        );

        Ok(PayrollRun {
            department_id: department_id.to_string(),
            period,
            generated_at,
            regular_hours_per_month: self.settings.regular_hours_per_month(),
            overtime_policy: self.settings.overtime_policy(),
            default_overtime_rate: self.settings.default_overtime_rate,
            directory: self.directory,
            attendance: self.attendance,
            employees: employees.into_iter(),
            started: Instant::now(),
        })
    }
}

/// A one-shot, lazy payroll run.
///
/// Each call to `next` computes one employee, in directory order. Dropping the
/// run part way leaves nothing half-computed.
#[derive(Debug)]
pub struct PayrollRun<'a, D, A> {
    department_id: String,
    period: PayPeriod,
    generated_at: DateTime<Utc>,
    regular_hours_per_month: Decimal,
    overtime_policy: OvertimePolicy,
    default_overtime_rate: Decimal,
    directory: &'a D,
    attendance: &'a A,
    employees: vec::IntoIter<DirectoryEmployee>,
    started: Instant,
}

impl<D, A> PayrollRun<'_, D, A>
where
    D: EmployeeDirectory,
    A: AttendanceSource,
{
    /// The period this run covers.
    pub fn period(&self) -> &PayPeriod {
        &self.period
    }

    /// Drains the run into entries and failures.
    pub fn into_outcome(mut self) -> PayrollOutcome {
        let mut entries = Vec::new();
        let mut failures = Vec::new();

        for result in self.by_ref() {
            match result {
                Ok(entry) => entries.push(entry),
                Err(failure) => failures.push(failure),
            }
        }

        info!(
            department_id = %self.department_id,
            month = self.period.month,
            year = self.period.year,
            entries = entries.len(),
            failures = failures.len(),
            duration_us = self.started.elapsed().as_micros(),
            "Payroll run completed"
        );

        PayrollOutcome {
            department_id: self.department_id,
            month: self.period.month,
            year: self.period.year,
            entries,
            failures,
        }
    }

    fn compute(&self, employee: &DirectoryEmployee) -> Result<PayrollEntry, EmployeeFailure> {
        let attendance = self
            .attendance
            .fetch(
                &employee.employee_id,
                self.period.start_date,
                self.period.end_date,
            )
            .map_err(|e| EmployeeFailure::new(employee, FailureStage::Attendance, e))?;

        let overtime_rate = self.overtime_rate_for(employee)?;
        let input = EmployeePayrollInput::from_directory(employee, overtime_rate, attendance);

        let hours = aggregate_attendance(
            &input.attendance,
            self.period.start_date,
            self.period.end_date,
            self.regular_hours_per_month,
            self.overtime_policy,
        );

        let rates = resolve_pay_rates(
            input.monthly_salary,
            self.regular_hours_per_month,
            input.overtime_rate,
        )
        .map_err(|e| EmployeeFailure::new(employee, FailureStage::Rates, e))?;

        debug!(
            employee_id = %input.employee_id,
            records = input.attendance.len(),
            regular_hours = %hours.regular_hours,
            overtime_hours = %hours.overtime_hours,
            "Computed payroll hours"
        );

        build_payroll_entry(&input, &hours, &rates, &self.period, self.generated_at)
            .map_err(|e| EmployeeFailure::new(employee, FailureStage::Rates, e))
    }

    /// Employee's own rate, else the role's, else the configured default.
    fn overtime_rate_for(&self, employee: &DirectoryEmployee) -> Result<Decimal, EmployeeFailure> {
        if let Some(rate) = employee.overtime_rate {
            return Ok(rate);
        }

        match &employee.role_id {
            Some(role_id) => self
                .directory
                .find_role(role_id)
                .map(|role| role.overtime_rate)
                .map_err(|e| EmployeeFailure::new(employee, FailureStage::Role, e)),
            None => Ok(self.default_overtime_rate),
        }
    }
}

impl<D, A> Iterator for PayrollRun<'_, D, A>
where
    D: EmployeeDirectory,
    A: AttendanceSource,
{
    type Item = Result<PayrollEntry, EmployeeFailure>;

    fn next(&mut self) -> Option<Self::Item> {
        let employee = self.employees.next()?;
        let result = self.compute(&employee);

        if let Err(failure) = &result {
            warn!(
                department_id = %self.department_id,
                employee_id = %failure.employee_id,
                stage = ?failure.stage,
                error = %failure.message,
                "Employee excluded from payroll run"
            );
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.employees.size_hint()
    }
}
