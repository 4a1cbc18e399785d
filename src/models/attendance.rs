//! Attendance record model.
//!
//! This module defines the [`AttendanceRecord`] struct, one employee's
//! check-in/check-out pair for a single calendar day.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const SECONDS_PER_HOUR: i64 = 3600;

/// Represents one employee's presence on one calendar day.
///
/// Records are produced by an external attendance tracker and are read-only
/// to the engine. A record without a `check_out` is an open shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day of the record.
    pub date: NaiveDate,
    /// When the employee checked in.
    pub check_in: NaiveDateTime,
    /// When the employee checked out, if they have.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
}

impl AttendanceRecord {
    /// Returns the unrounded hours between check-in and check-out.
    ///
    /// Returns `None` when the shift is still open or when `check_out` is not
    /// strictly after `check_in`; such records contribute nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::AttendanceRecord;
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use rust_decimal::Decimal;
    ///
    /// let record = AttendanceRecord {
    ///     employee_id: "emp_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
    ///     check_in: NaiveDateTime::parse_from_str("2026-03-02 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     check_out: Some(NaiveDateTime::parse_from_str("2026-03-02 17:30:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    /// };
    /// assert_eq!(record.worked_hours(), Some(Decimal::new(85, 1)));
    /// ```
    pub fn worked_hours(&self) -> Option<Decimal> {
        let check_out = self.check_out?;
        if check_out <= self.check_in {
            return None;
        }

        let seconds = (check_out - self.check_in).num_seconds();
        Some(Decimal::new(seconds, 0) / Decimal::new(SECONDS_PER_HOUR, 0))
    }
}
