//! Compensation request model.
//!
//! A [`CompensationRequest`] is the validated form of an employee's
//! request for a salary change. It is produced by the API layer's
//! validation step and never constructed from unchecked input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The financial figures the scenario calculator works from.
///
/// Salaries are the figures entered on the request form; the
/// staffing cost is per month and the recruitment cost is one-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioInputs {
    /// The employee's current salary.
    #[serde(with = "rust_decimal::serde::float")]
    pub current_salary: Decimal,
    /// The salary the employee has requested.
    #[serde(with = "rust_decimal::serde::float")]
    pub requested_salary: Decimal,
    /// Monthly cost of a temporary staff-augmentation placement.
    #[serde(with = "rust_decimal::serde::float")]
    pub staffing_salary_per_month: Decimal,
    /// Months the temporary placement covers before a permanent hire.
    #[serde(with = "rust_decimal::serde::float")]
    pub months_for_staffing: Decimal,
    /// One-time cost of sourcing and hiring a replacement.
    #[serde(with = "rust_decimal::serde::float")]
    pub recruitment_cost: Decimal,
}

/// A validated compensation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompensationRequest {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The city the employee works in.
    pub city: String,
    /// The employee's role, used to resolve market salary.
    pub role: String,
    /// The financial figures for scenario costing.
    pub inputs: ScenarioInputs,
}

impl CompensationRequest {
    /// Returns the raise requested, which may be negative when the request
    /// is for a lower salary.
    ///
    /// # Examples
    ///
    /// ```
    /// use compensation_engine::models::{CompensationRequest, ScenarioInputs};
    /// use rust_decimal::Decimal;
    ///
    /// let request = CompensationRequest {
    ///     employee_id: "E-001".to_string(),
    ///     employee_name: "Ada".to_string(),
    ///     city: "Berlin".to_string(),
    ///     role: "Software Engineer".to_string(),
    ///     inputs: ScenarioInputs {
    ///         current_salary: Decimal::new(50000, 0),
    ///         requested_salary: Decimal::new(60000, 0),
    ///         staffing_salary_per_month: Decimal::new(7000, 0),
    ///         months_for_staffing: Decimal::new(3, 0),
    ///         recruitment_cost: Decimal::new(5000, 0),
    ///     },
    /// };
    /// assert_eq!(request.requested_raise(), Decimal::new(10000, 0));
    /// ```
    pub fn requested_raise(&self) -> Decimal {
        self.inputs.requested_salary - self.inputs.current_salary
    }
}
