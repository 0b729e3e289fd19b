//! Persisted employee submission model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CompensationRequest, ScenarioInputs, ScenarioResult};

/// A compensation request as stored after its scenarios were computed.
///
/// The record captures the market salary the scenarios were computed
/// against, so stored results stay explainable after the reference data
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Unique identifier for this stored record.
    pub record_id: Uuid,
    /// The employee's identifier (unique across records).
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The city the employee works in.
    pub city: String,
    /// The employee's role.
    pub role: String,
    /// The financial figures submitted with the request.
    #[serde(flatten)]
    pub inputs: ScenarioInputs,
    /// The market salary the scenarios were computed against.
    #[serde(with = "rust_decimal::serde::float")]
    pub market_salary: Decimal,
    /// The computed scenario costs.
    pub scenarios: ScenarioResult,
    /// When the request was submitted.
    pub submitted_at: DateTime<Utc>,
}

impl EmployeeRecord {
    /// Builds a new record for a validated request and its scenarios.
    pub fn new(
        request: CompensationRequest,
        market_salary: Decimal,
        scenarios: ScenarioResult,
    ) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            employee_id: request.employee_id,
            employee_name: request.employee_name,
            city: request.city,
            role: request.role,
            inputs: request.inputs,
            market_salary,
            scenarios,
            submitted_at: Utc::now(),
        }
    }
}
