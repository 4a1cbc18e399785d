//! Collaborator interfaces consumed and fed by the payroll runner.
//!
//! The engine reads employees and roles from an [`EmployeeDirectory`] and
//! attendance from an [`AttendanceSource`]; the presentation layer stores
//! confirmed runs through a [`PayrollSink`]. The engine never calls the sink.

mod memory;

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{AttendanceRecord, DirectoryEmployee, PayrollEntry, Role};

pub use memory::{
    DEFAULT_RETAINED_RUNS, InMemoryPayrollSink, SnapshotAttendance, SnapshotDirectory, StoredRun,
};

/// Error reported by a collaborator (directory, attendance source or sink).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollaboratorError {
    /// The requested record does not exist.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// What was looked up (e.g., "role").
        kind: String,
        /// The id that was looked up.
        id: String,
    },

    /// The collaborator could not serve the request.
    #[error("{source_name} unavailable: {message}")]
    Unavailable {
        /// Which collaborator failed.
        source_name: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results returned by collaborators.
pub type CollaboratorResult<T> = Result<T, CollaboratorError>;

/// Read-only view of employees and roles.
pub trait EmployeeDirectory {
    /// Lists the employees of a department in directory order.
    fn list_by_department(&self, department_id: &str) -> CollaboratorResult<Vec<DirectoryEmployee>>;

    /// Looks up a role by id.
    fn find_role(&self, role_id: &str) -> CollaboratorResult<Role>;
}

/// Read-only view of attendance records.
pub trait AttendanceSource {
    /// Fetches an employee's records dated within `[start, end]`.
    ///
    /// Implementations may return records outside the window; the engine
    /// filters again.
    fn fetch(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> CollaboratorResult<Vec<AttendanceRecord>>;
}

/// Identifier of a persisted payroll run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(Uuid);

impl RunId {
    /// Generates a fresh random run id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Storage for confirmed payroll runs.
///
/// Uniqueness per `(department_id, month, year)` is the sink's policy.
pub trait PayrollSink {
    /// Persists a run and returns its id.
    fn save(
        &self,
        department_id: &str,
        month: u32,
        year: i32,
        entries: Vec<PayrollEntry>,
    ) -> CollaboratorResult<RunId>;
}
