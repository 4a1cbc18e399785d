//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::PayPeriod;
use crate::runner::PayrollRunner;
use crate::sources::{PayrollSink, SnapshotAttendance, SnapshotDirectory};

use super::request::{PreviewRequest, SaveRunRequest};
use super::response::{
    ApiError, ApiErrorResponse, PreviewResponse, SalaryPreviewResponse, SaveRunResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/preview", post(preview_handler))
        .route("/payroll/runs", post(save_run_handler))
        .route("/roles/:role_id/levels/:level/salary", get(salary_handler))
        .with_state(state)
}

/// Handler for `POST /payroll/preview`.
///
/// Runs the engine over the department snapshot in the body and returns the
/// entries together with the employees that were left out.
async fn preview_handler(
    State(state): State<AppState>,
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll preview request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection(correlation_id, rejection).into_response(),
    };

    let start_time = Instant::now();
    match preview(&state, request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                department_id = %response.outcome.department_id,
                entries = response.outcome.entries.len(),
                failures = response.failure_count,
                duration_us = start_time.elapsed().as_micros(),
                "Payroll preview completed"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                code = %err.error.code,
                error = %err.error.message,
                "Payroll preview failed"
            );
            err.into_response()
        }
    }
}

fn preview(state: &AppState, request: PreviewRequest) -> Result<PreviewResponse, ApiErrorResponse> {
    let config = state.config();
    let roles = config.roles().with_overrides(request.roles)?;

    let directory =
        SnapshotDirectory::new(roles).with_department(request.department_id.clone(), request.employees);
    let attendance = SnapshotAttendance::new(request.attendance);

    let outcome = PayrollRunner::new(config.settings(), &directory, &attendance)
        .run(&request.department_id, request.month, request.year)?
        .into_outcome();

    Ok(outcome.into())
}

/// Handler for `POST /payroll/runs`.
///
/// Saves confirmed entries and returns the id of the stored run.
async fn save_run_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRunRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll save request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return json_rejection(correlation_id, rejection).into_response(),
    };

    match save_run(&state, request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                run_id = %response.run_id,
                "Payroll run saved"
            );
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                code = %err.error.code,
                error = %err.error.message,
                "Payroll save failed"
            );
            err.into_response()
        }
    }
}

fn save_run(state: &AppState, request: SaveRunRequest) -> Result<SaveRunResponse, ApiErrorResponse> {
    PayPeriod::for_month(request.month, request.year)?;

    let run_id = state.sink().save(
        &request.department_id,
        request.month,
        request.year,
        request.entries,
    )?;

    Ok(SaveRunResponse { run_id })
}

/// Handler for `GET /roles/:role_id/levels/:level/salary`.
///
/// Previews what a role pays at a seniority level.
async fn salary_handler(
    State(state): State<AppState>,
    path: Result<Path<(String, u32)>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let (role_id, level) = match path {
        Ok(Path(params)) => params,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid salary preview path"
            );
            return ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(rejection.body_text()),
            )
            .into_response();
        }
    };

    info!(
        correlation_id = %correlation_id,
        role_id = %role_id,
        level,
        "Processing salary preview request"
    );

    match state.config().salary_for_level(&role_id, level) {
        Ok(salary) => (
            StatusCode::OK,
            Json(SalaryPreviewResponse {
                role_id,
                level,
                salary,
            }),
        )
            .into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Salary preview failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
}
