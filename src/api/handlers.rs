//! HTTP request handlers for the Compensation Scenario Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::CompensationRequest;

use super::request::{EmployeeDetailsRequest, RoleSalaryQuery};
use super::response::{ApiError, ApiErrorResponse, SubmissionResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// Cross-origin requests are allowed from any origin so a browser front end
/// served elsewhere can call the API.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/employee-details", post(employee_details_handler))
        .route("/employees", get(list_employees_handler))
        .route("/employees/:employee_id", get(get_employee_handler))
        .route("/role-salaries/:role", get(role_salary_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handler for GET / (liveness).
async fn root_handler() -> &'static str {
    "Hello from the backend!"
}

/// Handler for POST /employee-details endpoint.
///
/// Validates the submission, resolves the market salary for the role,
/// computes the staffing scenarios and stores the record.
async fn employee_details_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeDetailsRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee details submission");

    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let request = match CompensationRequest::try_from(body) {
        Ok(request) => request,
        Err(err) => return error_response(err, correlation_id),
    };

    let employee_id = request.employee_id.clone();
    let start_time = Instant::now();
    match state.service().submit(request).await {
        Ok(record) => {
            let (cheapest, cheapest_cost) = record.scenarios.cheapest();
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                role = %record.role,
                market_salary = %record.market_salary,
                cheapest_scenario = cheapest,
                cheapest_cost = %cheapest_cost,
                duration_us = start_time.elapsed().as_micros(),
                "Staffing scenarios computed and stored"
            );
            json_response(StatusCode::CREATED, SubmissionResponse::from(record))
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for GET /employees endpoint.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().records().await {
        Ok(records) => {
            info!(
                correlation_id = %correlation_id,
                count = records.len(),
                "Listed employee records"
            );
            json_response(StatusCode::OK, records)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for GET /employees/{employee_id} endpoint.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().record(&employee_id).await {
        Ok(record) => json_response(StatusCode::OK, record),
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for GET /role-salaries/{role} endpoint.
async fn role_salary_handler(
    State(state): State<AppState>,
    Path(role): Path<String>,
    Query(query): Query<RoleSalaryQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let location = query
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty());

    match state.service().resolve_role_salary(&role, location).await {
        Ok(record) => json_response(StatusCode::OK, record),
        Err(err) => error_response(err, correlation_id),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Maps an engine error to a response, logging it at a level that
/// matches who has to act on it.
fn error_response(err: EngineError, correlation_id: Uuid) -> Response {
    match &err {
        EngineError::Storage { .. }
        | EngineError::ConfigNotFound { .. }
        | EngineError::ConfigParseError { .. } => {
            error!(correlation_id = %correlation_id, error = %err, "Request failed");
        }
        _ => {
            warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
        }
    }
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
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
    json_response(StatusCode::BAD_REQUEST, error)
}
