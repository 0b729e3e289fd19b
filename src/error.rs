//! Error types for the Compensation Scenario Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating a compensation
//! request, resolving market salary data, and persisting submissions.
//!
//! The scenario calculator itself never fails; every variant here is raised
//! before or after the calculation runs.

use thiserror::Error;

/// The main error type for the Compensation Scenario Engine.
///
/// # Example
///
/// ```
/// use compensation_engine::error::EngineError;
///
/// let error = EngineError::RoleSalaryNotFound {
///     role: "Data Engineer".to_string(),
///     location: None,
/// };
/// assert_eq!(error.to_string(), "Role salary data not found for role 'Data Engineer'");
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

    /// A request field was missing, non-numeric, or out of range.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The request field that failed validation.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No market salary record exists for the role.
    #[error("Role salary data not found for role '{role}'{}", location_suffix(.location))]
    RoleSalaryNotFound {
        /// The role that was looked up.
        role: String,
        /// The location the lookup was narrowed to, if any.
        location: Option<String>,
    },

    /// A record for this employee has already been submitted.
    #[error("Employee '{employee_id}' already has a submitted request")]
    DuplicateEmployee {
        /// The employee identifier that collided.
        employee_id: String,
    },

    /// No submitted record exists for the employee.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee identifier that was requested.
        employee_id: String,
    },

    /// The storage collaborator failed.
    #[error("Storage error: {message}")]
    Storage {
        /// A description of the storage failure.
        message: String,
    },
}

fn location_suffix(location: &Option<String>) -> String {
    match location {
        Some(location) => format!(" in '{}'", location),
        None => String::new(),
    }
}

impl EngineError {
    /// Creates a validation error for the given field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
