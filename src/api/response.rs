//! Response types for the payroll API.
//!
//! This module defines the success bodies, the error response structure and
//! the mapping from engine and collaborator errors to HTTP statuses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::runner::PayrollOutcome;
use crate::sources::{CollaboratorError, RunId};

/// Body of a successful `POST /payroll/preview`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    /// Entries and failures of the run.
    #[serde(flatten)]
    pub outcome: PayrollOutcome,
    /// Number of employees left out.
    pub failure_count: usize,
}

impl From<PayrollOutcome> for PreviewResponse {
    fn from(outcome: PayrollOutcome) -> Self {
        Self {
            failure_count: outcome.failure_count(),
            outcome,
        }
    }
}

/// Body of a successful `POST /payroll/runs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRunResponse {
    /// Id of the saved run.
    pub run_id: RunId,
}

/// Body of a successful salary preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryPreviewResponse {
    /// The role previewed.
    pub role_id: String,
    /// The seniority level previewed.
    pub level: u32,
    /// Salary at that level.
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                )
            }
            EngineError::InvalidConfiguration { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_CONFIGURATION", message),
            ),
            EngineError::InvalidInput { field, .. } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_INPUT",
                    message,
                    format!("The value of '{}' was rejected", field),
                ),
            ),
            EngineError::LevelNotFound { .. } => Self::new(
                StatusCode::NOT_FOUND,
                ApiError::new("LEVEL_NOT_FOUND", message),
            ),
            EngineError::RoleNotFound { .. } => Self::new(
                StatusCode::NOT_FOUND,
                ApiError::new("ROLE_NOT_FOUND", message),
            ),
            EngineError::InvalidStatusTransition { .. } => Self::new(
                StatusCode::CONFLICT,
                ApiError::new("INVALID_STATUS_TRANSITION", message),
            ),
            EngineError::DirectoryUnavailable { .. } => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new("DIRECTORY_UNAVAILABLE", message),
            ),
        }
    }
}

impl From<CollaboratorError> for ApiErrorResponse {
    fn from(error: CollaboratorError) -> Self {
        let message = error.to_string();
        match error {
            CollaboratorError::NotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", message))
            }
            CollaboratorError::Unavailable { .. } => Self::new(
                StatusCode::SERVICE_UNAVAILABLE,
                ApiError::new("STORE_UNAVAILABLE", message),
            ),
        }
    }
}
