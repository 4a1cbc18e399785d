//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can stop a single calculation. Per-employee
//! failures inside a payroll run are not errors; they are collected as data
//! (see [`crate::runner::EmployeeFailure`]).

use thiserror::Error;

use crate::models::PayrollStatus;

/// The main error type for the payroll engine.
///
/// Pure computation errors (`InvalidConfiguration`, `InvalidInput`,
/// `LevelNotFound`) propagate synchronously to the immediate caller.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::LevelNotFound {
///     role_id: "engineer".to_string(),
///     level: 7,
/// };
/// assert_eq!(error.to_string(), "Seniority level 7 not found for role 'engineer'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A structural precondition such as a positive hours budget was violated.
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// A description of the violated precondition.
        message: String,
    },

    /// A numeric or calendar input was malformed (negative salary, month 13, ...).
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The offending input.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// The requested seniority level is absent from the role's table.
    #[error("Seniority level {level} not found for role '{role_id}'")]
    LevelNotFound {
        /// The role that was searched.
        role_id: String,
        /// The requested level.
        level: u32,
    },

    /// No role with the given id exists.
    #[error("Role not found: {role_id}")]
    RoleNotFound {
        /// The role id that was not found.
        role_id: String,
    },

    /// A payroll entry status change was not allowed.
    #[error("Cannot move payroll entry from {from} to {to}")]
    InvalidStatusTransition {
        /// The current status.
        from: PayrollStatus,
        /// The requested status.
        to: PayrollStatus,
    },

    /// The employee directory could not list a department, so no run is possible.
    #[error("Employee directory unavailable for department '{department_id}': {message}")]
    DirectoryUnavailable {
        /// The department that was requested.
        department_id: String,
        /// The collaborator's error message.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Shorthand for an [`EngineError::InvalidConfiguration`].
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
