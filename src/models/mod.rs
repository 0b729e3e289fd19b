//! Core data models for the Compensation Scenario Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod compensation_request;
mod employee_record;
mod role_salary;
mod scenario_result;

pub use compensation_request::{CompensationRequest, ScenarioInputs};
pub use employee_record::EmployeeRecord;
pub use role_salary::RoleSalary;
pub use scenario_result::ScenarioResult;
