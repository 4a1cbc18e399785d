//! Request types for the payroll API.

use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, DirectoryEmployee, PayrollEntry, Role};

/// Request body for `POST /payroll/preview`.
///
/// Carries a snapshot of the department: its employees in directory order,
/// their attendance and any roles that should override the configured ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    /// The department to run.
    pub department_id: String,
    /// Month number, 1 to 12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Employees of the department, in directory order.
    pub employees: Vec<DirectoryEmployee>,
    /// Roles added to or replacing the configured catalog for this request.
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Attendance records of the department's employees.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

/// Request body for `POST /payroll/runs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRunRequest {
    /// The department the entries belong to.
    pub department_id: String,
    /// Month number, 1 to 12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// The confirmed entries.
    pub entries: Vec<PayrollEntry>,
}
