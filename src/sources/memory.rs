//! In-memory collaborators built from snapshots.
//!
//! Used by the HTTP preview endpoint, which receives the directory and
//! attendance data in the request body, and by tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::warn;

use crate::config::RoleCatalog;
use crate::models::{AttendanceRecord, DirectoryEmployee, PayrollEntry, Role};

use super::{
    AttendanceSource, CollaboratorError, CollaboratorResult, EmployeeDirectory, PayrollSink, RunId,
};

/// An employee directory over fixed department listings and a role catalog.
#[derive(Debug, Clone, Default)]
pub struct SnapshotDirectory {
    departments: HashMap<String, Vec<DirectoryEmployee>>,
    roles: RoleCatalog,
}

impl SnapshotDirectory {
    /// Creates a directory that resolves roles from `roles`.
    pub fn new(roles: RoleCatalog) -> Self {
        Self {
            departments: HashMap::new(),
            roles,
        }
    }

    /// Sets the employee listing of a department, in directory order.
    pub fn with_department(
        mut self,
        department_id: impl Into<String>,
        employees: Vec<DirectoryEmployee>,
    ) -> Self {
        self.departments.insert(department_id.into(), employees);
        self
    }
}

impl EmployeeDirectory for SnapshotDirectory {
    fn list_by_department(&self, department_id: &str) -> CollaboratorResult<Vec<DirectoryEmployee>> {
        Ok(self
            .departments
            .get(department_id)
            .cloned()
            .unwrap_or_default())
    }

    fn find_role(&self, role_id: &str) -> CollaboratorResult<Role> {
        self.roles
            .get(role_id)
            .cloned()
            .map_err(|_| CollaboratorError::NotFound {
                kind: "role".to_string(),
                id: role_id.to_string(),
            })
    }
}

/// An attendance source over a fixed list of records.
#[derive(Debug, Clone, Default)]
pub struct SnapshotAttendance {
    by_employee: HashMap<String, Vec<AttendanceRecord>>,
}

impl SnapshotAttendance {
    /// Indexes `records` by employee, keeping their relative order.
    pub fn new(records: Vec<AttendanceRecord>) -> Self {
        let mut by_employee: HashMap<String, Vec<AttendanceRecord>> = HashMap::new();
        for record in records {
            by_employee
                .entry(record.employee_id.clone())
                .or_default()
                .push(record);
        }
        Self { by_employee }
    }
}

impl AttendanceSource for SnapshotAttendance {
    fn fetch(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> CollaboratorResult<Vec<AttendanceRecord>> {
        Ok(self
            .by_employee
            .get(employee_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| r.date >= start && r.date <= end)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// A payroll run held by [`InMemoryPayrollSink`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRun {
    /// The id returned by `save`.
    pub run_id: RunId,
    /// Department the run covers.
    pub department_id: String,
    /// Month number of the period.
    pub month: u32,
    /// Year of the period.
    pub year: i32,
    /// The saved entries.
    pub entries: Vec<PayrollEntry>,
    /// When the run was saved.
    pub saved_at: DateTime<Utc>,
}

/// Runs an [`InMemoryPayrollSink`] keeps unless told otherwise.
pub const DEFAULT_RETAINED_RUNS: usize = 1000;

/// A payroll sink that keeps the most recent saved runs in memory.
///
/// This backs the demo server and tests; nothing survives a restart. Duplicate
/// runs for the same department and period are all kept. Once `max_runs` is
/// reached, each save evicts the oldest run.
#[derive(Debug)]
pub struct InMemoryPayrollSink {
    runs: Mutex<VecDeque<StoredRun>>,
    max_runs: usize,
}

impl Default for InMemoryPayrollSink {
    fn default() -> Self {
        Self::with_retention(DEFAULT_RETAINED_RUNS)
    }
}

impl InMemoryPayrollSink {
    /// Creates an empty sink keeping [`DEFAULT_RETAINED_RUNS`] runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sink keeping at most `max_runs` runs (at least one).
    pub fn with_retention(max_runs: usize) -> Self {
        Self {
            runs: Mutex::new(VecDeque::new()),
            max_runs: max_runs.max(1),
        }
    }

    /// Returns a copy of every retained run, oldest first.
    pub fn runs(&self) -> CollaboratorResult<Vec<StoredRun>> {
        self.runs
            .lock()
            .map(|runs| runs.iter().cloned().collect())
            .map_err(|_| poisoned())
    }

    /// Returns the saved run with `run_id`, if any.
    pub fn find(&self, run_id: RunId) -> CollaboratorResult<Option<StoredRun>> {
        let runs = self.runs.lock().map_err(|_| poisoned())?;
        Ok(runs.iter().find(|r| r.run_id == run_id).cloned())
    }
}

impl PayrollSink for InMemoryPayrollSink {
    fn save(
        &self,
        department_id: &str,
        month: u32,
        year: i32,
        entries: Vec<PayrollEntry>,
    ) -> CollaboratorResult<RunId> {
        let run_id = RunId::new();
        let mut runs = self.runs.lock().map_err(|_| poisoned())?;
        while runs.len() >= self.max_runs {
            if let Some(evicted) = runs.pop_front() {
                warn!(
                    run_id = %evicted.run_id,
                    department_id = %evicted.department_id,
                    max_runs = self.max_runs,
                    "Evicted oldest payroll run from memory"
                );
            }
        }
        runs.push_back(StoredRun {
            run_id,
            department_id: department_id.to_string(),
            month,
            year,
            entries,
            saved_at: Utc::now(),
        });
        Ok(run_id)
    }
}

fn poisoned() -> CollaboratorError {
    CollaboratorError::Unavailable {
        source_name: "payroll store".to_string(),
        message: "lock poisoned".to_string(),
    }
}
