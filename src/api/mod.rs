//! HTTP API module for the Compensation Scenario Engine.
//!
//! This module provides the REST API endpoints for submitting compensation
//! requests and reading back stored records and market salary data.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeDetailsRequest, NumericInput, RoleSalaryQuery};
pub use response::{ApiError, ApiErrorResponse, SubmissionResponse};
pub use state::AppState;
