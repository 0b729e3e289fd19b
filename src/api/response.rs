//! Response types for the Compensation Scenario Engine API.
//!
//! This module defines the success and error response structures and the
//! mapping from engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{EmployeeRecord, ScenarioResult};

/// Response body for a successful `/employee-details` submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    /// Confirmation message.
    pub message: String,
    /// The stored record.
    pub employee_details: EmployeeRecord,
    /// The computed scenarios (also present on the record).
    pub scenarios: ScenarioResult,
}

impl From<EmployeeRecord> for SubmissionResponse {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            message: "Employee details saved successfully".to_string(),
            scenarios: record.scenarios,
            employee_details: record,
        }
    }
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

    /// Creates a role salary not found error response.
    pub fn role_salary_not_found(role: &str, location: Option<&str>) -> Self {
        let details = match location {
            Some(location) => format!(
                "No market salary is recorded for role '{}' in '{}'",
                role, location
            ),
            None => format!("No market salary is recorded for role '{}'", role),
        };
        Self::with_details("ROLE_SALARY_NOT_FOUND", "Role salary data not found.", details)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an internal error response. Internal details stay in the logs.
    pub fn internal() -> Self {
        Self::new("INTERNAL_ERROR", "Failed to process request.")
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::Validation { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid field '{}': {}", field, message),
                    field,
                ),
            },
            EngineError::RoleSalaryNotFound { role, location } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::role_salary_not_found(&role, location.as_deref()),
            },
            EngineError::DuplicateEmployee { employee_id } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "DUPLICATE_EMPLOYEE",
                    format!("Employee '{}' already has a submitted request", employee_id),
                    "Each employee may have one submitted compensation request",
                ),
            },
            EngineError::EmployeeNotFound { employee_id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new(
                    "EMPLOYEE_NOT_FOUND",
                    format!("Employee not found: {}", employee_id),
                ),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::new("CONFIG_ERROR", "Configuration error"),
                }
            }
            EngineError::Storage { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::internal(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_role_salary_not_found_error() {
        let error = ApiError::role_salary_not_found("Astronaut", Some("Houston"));
        assert_eq!(error.code, "ROLE_SALARY_NOT_FOUND");
        assert_eq!(error.message, "Role salary data not found.");
        assert!(error.details.unwrap().contains("Houston"));
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response: ApiErrorResponse =
            EngineError::validation("currentSalary", "is required").into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
        assert_eq!(response.error.details.as_deref(), Some("currentSalary"));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ApiErrorResponse = EngineError::RoleSalaryNotFound {
            role: "Astronaut".to_string(),
            location: None,
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "ROLE_SALARY_NOT_FOUND");
    }

    #[test]
    fn test_duplicate_maps_to_conflict() {
        let response: ApiErrorResponse = EngineError::DuplicateEmployee {
            employee_id: "E-1".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_storage_fault_hides_details() {
        let response: ApiErrorResponse = EngineError::Storage {
            message: "password=hunter2".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "INTERNAL_ERROR");
        assert!(response.error.details.is_none());
        assert!(!response.error.message.contains("hunter2"));
    }
}
