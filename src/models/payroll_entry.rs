//! Payroll entry models.
//!
//! This module contains the [`PayrollEntry`] type, the computed pay of one
//! employee for one period, and its approval [`PayrollStatus`].

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Approval state of a payroll entry.
///
/// The engine only creates `Pending` entries; the approval workflow moves them
/// forward with [`PayrollEntry::approve`] and [`PayrollEntry::mark_paid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayrollStatus {
    /// Generated, awaiting approval.
    Pending,
    /// Approved for payment.
    Approved,
    /// Paid out.
    Paid,
}

impl fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayrollStatus::Pending => "pending",
            PayrollStatus::Approved => "approved",
            PayrollStatus::Paid => "paid",
        };
        f.write_str(name)
    }
}

/// The computed pay of one employee for one period.
///
/// Monetary fields are rounded to two decimal places and
/// `total_salary == regular_pay + overtime_pay` holds for every entry the
/// engine builds. The regular pay is serialized as `baseSalary` so stored
/// records keep their field names.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayrollEntry, PayrollStatus};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let entry = PayrollEntry {
///     employee_id: "emp_001".to_string(),
///     employee_name: "Ada Lovelace".to_string(),
///     position: "Engineer".to_string(),
///     regular_hours: Decimal::new(160, 0),
///     overtime_hours: Decimal::ZERO,
///     regular_pay: Decimal::new(8000, 0),
///     overtime_rate: Decimal::new(15, 1),
///     overtime_pay: Decimal::ZERO,
///     total_salary: Decimal::new(8000, 0),
///     month: "March".to_string(),
///     year: 2026,
///     generated_at: Utc::now(),
///     status: PayrollStatus::Pending,
/// };
/// assert_eq!(entry.status, PayrollStatus::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollEntry {
    /// The employee this entry pays.
    pub employee_id: String,
    /// The employee's display name at generation time.
    pub employee_name: String,
    /// The employee's position at generation time.
    pub position: String,
    /// Hours paid at the regular hourly rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub overtime_hours: Decimal,
    /// Pay for the regular hours.
    #[serde(rename = "baseSalary", with = "rust_decimal::serde::float")]
    pub regular_pay: Decimal,
    /// The overtime multiplier that was applied.
    #[serde(with = "rust_decimal::serde::float")]
    pub overtime_rate: Decimal,
    /// Pay for the overtime hours.
    #[serde(with = "rust_decimal::serde::float")]
    pub overtime_pay: Decimal,
    /// Regular plus overtime pay.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_salary: Decimal,
    /// Display name of the period's month (e.g., "March").
    pub month: String,
    /// The period's year.
    pub year: i32,
    /// When the run that produced this entry started.
    pub generated_at: DateTime<Utc>,
    /// Approval state.
    pub status: PayrollStatus,
}

impl PayrollEntry {
    /// Moves a pending entry to approved.
    pub fn approve(&mut self) -> EngineResult<()> {
        self.transition(PayrollStatus::Pending, PayrollStatus::Approved)
    }

    /// Moves an approved entry to paid.
    pub fn mark_paid(&mut self) -> EngineResult<()> {
        self.transition(PayrollStatus::Approved, PayrollStatus::Paid)
    }

    fn transition(&mut self, expected: PayrollStatus, next: PayrollStatus) -> EngineResult<()> {
        if self.status != expected {
            return Err(EngineError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}
