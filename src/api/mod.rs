//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for previewing a department's
//! payroll, saving confirmed runs and previewing role salaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PreviewRequest, SaveRunRequest};
pub use response::{
    ApiError, ApiErrorResponse, PreviewResponse, SalaryPreviewResponse, SaveRunResponse,
};
pub use state::AppState;
