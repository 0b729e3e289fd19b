//! Request types for the Compensation Scenario Engine API.
//!
//! This module defines the JSON request structures for the
//! `/employee-details` endpoint and the validation step that turns them
//! into a [`CompensationRequest`].
//!
//! Request bodies come from form fields, so numeric figures may arrive as
//! JSON numbers or as numeric text. Every field is optional at the parsing
//! stage; missing or malformed values are reported as validation errors
//! naming the offending field.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{MAX_AMOUNT, MONTHS_PER_YEAR};
use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationRequest, ScenarioInputs};

/// A numeric field as it arrives in a request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// A JSON number.
    Number(serde_json::Number),
    /// Numeric text, e.g. from a form field.
    Text(String),
}

impl NumericInput {
    /// Parses the input into a [`Decimal`].
    fn parse(&self, field: &str) -> EngineResult<Decimal> {
        let text = match self {
            NumericInput::Number(n) => n.to_string(),
            NumericInput::Text(s) => s.trim().to_string(),
        };
        if text.is_empty() {
            return Err(EngineError::validation(field, "must not be empty"));
        }
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|_| EngineError::validation(field, unparsable_message(&text)))
    }
}

/// Explains why text that `Decimal` rejected could not be used.
fn unparsable_message(text: &str) -> String {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value.abs() < 1.0 => {
            format!("'{}' has too many decimal places", text)
        }
        Ok(value) if value.is_finite() => format!("'{}' is too large", text),
        _ => format!("'{}' is not a number", text),
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        NumericInput::Number(value.into())
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

/// Request body for the `/employee-details` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetailsRequest {
    /// Unique identifier for the employee.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The employee's display name.
    #[serde(default)]
    pub employee_name: Option<String>,
    /// The city the employee works in.
    #[serde(default)]
    pub city: Option<String>,
    /// The employee's role.
    #[serde(default)]
    pub role: Option<String>,
    /// The employee's current salary.
    #[serde(default)]
    pub current_salary: Option<NumericInput>,
    /// The salary the employee has requested.
    #[serde(default)]
    pub requested_salary: Option<NumericInput>,
    /// Monthly cost of temporary staffing.
    #[serde(default)]
    pub staffing_salary_per_month: Option<NumericInput>,
    /// Months of temporary staffing before a permanent hire.
    #[serde(default)]
    pub months_for_staffing: Option<NumericInput>,
    /// One-time recruitment cost.
    #[serde(default)]
    pub recruitment_cost: Option<NumericInput>,
}

fn required_text(value: Option<String>, field: &str) -> EngineResult<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Some(_) => Err(EngineError::validation(field, "must not be blank")),
        None => Err(EngineError::validation(field, "is required")),
    }
}

fn required_number(value: Option<&NumericInput>, field: &str) -> EngineResult<Decimal> {
    value
        .ok_or_else(|| EngineError::validation(field, "is required"))?
        .parse(field)
}

fn amount(value: Option<&NumericInput>, field: &str) -> EngineResult<Decimal> {
    let amount = required_number(value, field)?;
    if amount < Decimal::ZERO {
        return Err(EngineError::validation(field, "must not be negative"));
    }
    if amount > MAX_AMOUNT {
        return Err(EngineError::validation(
            field,
            format!("must not exceed {}", MAX_AMOUNT),
        ));
    }
    Ok(amount)
}

fn months(value: Option<&NumericInput>, field: &str) -> EngineResult<Decimal> {
    let months = required_number(value, field)?;
    if months < Decimal::ZERO || months > MONTHS_PER_YEAR {
        return Err(EngineError::validation(
            field,
            format!("must be between 0 and {}", MONTHS_PER_YEAR),
        ));
    }
    Ok(months)
}

impl TryFrom<EmployeeDetailsRequest> for CompensationRequest {
    type Error = EngineError;

    /// Validates a request body. Fields are checked in declaration order
    /// and the first failure is returned.
    fn try_from(req: EmployeeDetailsRequest) -> EngineResult<Self> {
        let employee_id = required_text(req.employee_id, "employeeId")?;
        let employee_name = required_text(req.employee_name, "employeeName")?;
        let city = required_text(req.city, "city")?;
        let role = required_text(req.role, "role")?;

        let inputs = ScenarioInputs {
            current_salary: amount(req.current_salary.as_ref(), "currentSalary")?,
            requested_salary: amount(req.requested_salary.as_ref(), "requestedSalary")?,
            staffing_salary_per_month: amount(
                req.staffing_salary_per_month.as_ref(),
                "staffingSalaryPerMonth",
            )?,
            months_for_staffing: months(req.months_for_staffing.as_ref(), "monthsForStaffing")?,
            recruitment_cost: amount(req.recruitment_cost.as_ref(), "recruitmentCost")?,
        };

        Ok(CompensationRequest {
            employee_id,
            employee_name,
            city,
            role,
            inputs,
        })
    }
}

/// Query parameters for the `/role-salaries/{role}` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoleSalaryQuery {
    /// Optional location to narrow the lookup.
    #[serde(default)]
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn num(value: i64) -> NumericInput {
        NumericInput::from(value)
    }

    fn valid_request() -> EmployeeDetailsRequest {
        EmployeeDetailsRequest {
            employee_id: Some("E-001".to_string()),
            employee_name: Some("Ada Lovelace".to_string()),
            city: Some("Berlin".to_string()),
            role: Some("Software Engineer".to_string()),
            current_salary: Some(num(50000)),
            requested_salary: Some(num(60000)),
            staffing_salary_per_month: Some(num(7000)),
            months_for_staffing: Some(num(3)),
            recruitment_cost: Some(num(5000)),
        }
    }

    fn expect_validation(req: EmployeeDetailsRequest, expected_field: &str) -> String {
        match CompensationRequest::try_from(req) {
            Err(EngineError::Validation { field, message }) => {
                assert_eq!(field, expected_field);
                message
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_mixed_numbers_and_text() {
        let json = r#"{
            "employeeId": "E-001",
            "employeeName": "Ada Lovelace",
            "city": "Berlin",
            "role": "Software Engineer",
            "currentSalary": "50000",
            "requestedSalary": 60000,
            "staffingSalaryPerMonth": " 7000.50 ",
            "monthsForStaffing": 2.5,
            "recruitmentCost": "5e3"
        }"#;

        let req: EmployeeDetailsRequest = serde_json::from_str(json).unwrap();
        let request = CompensationRequest::try_from(req).unwrap();

        assert_eq!(request.employee_id, "E-001");
        assert_eq!(request.inputs.current_salary, dec("50000"));
        assert_eq!(request.inputs.requested_salary, dec("60000"));
        assert_eq!(request.inputs.staffing_salary_per_month, dec("7000.50"));
        assert_eq!(request.inputs.months_for_staffing, dec("2.5"));
        assert_eq!(request.inputs.recruitment_cost, dec("5000"));
    }

    #[test]
    fn test_valid_request_converts() {
        let request = CompensationRequest::try_from(valid_request()).unwrap();
        assert_eq!(request.role, "Software Engineer");
        assert_eq!(request.inputs.months_for_staffing, dec("3"));
    }

    #[test]
    fn test_text_fields_are_trimmed() {
        let mut req = valid_request();
        req.role = Some("  Software Engineer ".to_string());

        let request = CompensationRequest::try_from(req).unwrap();
        assert_eq!(request.role, "Software Engineer");
    }

    #[test]
    fn test_missing_numeric_field_is_rejected() {
        let mut req = valid_request();
        req.recruitment_cost = None;

        let message = expect_validation(req, "recruitmentCost");
        assert_eq!(message, "is required");
    }

    #[test]
    fn test_non_numeric_text_is_rejected() {
        let mut req = valid_request();
        req.current_salary = Some("fifty thousand".into());

        let message = expect_validation(req, "currentSalary");
        assert!(message.contains("is not a number"));
    }

    #[test]
    fn test_empty_numeric_text_is_rejected() {
        let mut req = valid_request();
        req.requested_salary = Some("   ".into());

        expect_validation(req, "requestedSalary");
    }

    #[test]
    fn test_nan_text_is_rejected() {
        let mut req = valid_request();
        req.staffing_salary_per_month = Some("NaN".into());

        let message = expect_validation(req, "staffingSalaryPerMonth");
        assert_eq!(message, "'NaN' is not a number");
    }

    #[test]
    fn test_tiny_scientific_value_reports_precision() {
        let mut req = valid_request();
        req.recruitment_cost = Some("1e-30".into());

        let message = expect_validation(req, "recruitmentCost");
        assert_eq!(message, "'1e-30' has too many decimal places");
    }

    #[test]
    fn test_huge_scientific_value_reports_magnitude() {
        let mut req = valid_request();
        req.current_salary = Some("1e40".into());

        let message = expect_validation(req, "currentSalary");
        assert_eq!(message, "'1e40' is too large");
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let mut req = valid_request();
        req.recruitment_cost = Some(num(-1));

        let message = expect_validation(req, "recruitmentCost");
        assert_eq!(message, "must not be negative");
    }

    #[test]
    fn test_amount_above_limit_is_rejected() {
        let mut req = valid_request();
        req.current_salary = Some("1000000000001".into());

        expect_validation(req, "currentSalary");
    }

    #[test]
    fn test_amount_at_limit_is_accepted() {
        let mut req = valid_request();
        req.current_salary = Some("1000000000000".into());

        assert!(CompensationRequest::try_from(req).is_ok());
    }

    #[test]
    fn test_months_out_of_range_are_rejected() {
        for value in ["-1", "12.01", "13"] {
            let mut req = valid_request();
            req.months_for_staffing = Some(value.into());

            let message = expect_validation(req, "monthsForStaffing");
            assert_eq!(message, "must be between 0 and 12");
        }
    }

    #[test]
    fn test_months_at_bounds_are_accepted() {
        for value in ["0", "12"] {
            let mut req = valid_request();
            req.months_for_staffing = Some(value.into());

            assert!(CompensationRequest::try_from(req).is_ok());
        }
    }

    #[test]
    fn test_blank_role_is_rejected() {
        let mut req = valid_request();
        req.role = Some(" ".to_string());

        let message = expect_validation(req, "role");
        assert_eq!(message, "must not be blank");
    }

    #[test]
    fn test_missing_employee_id_is_rejected() {
        let mut req = valid_request();
        req.employee_id = None;

        expect_validation(req, "employeeId");
    }

    #[test]
    fn test_current_above_requested_is_accepted() {
        let mut req = valid_request();
        req.current_salary = Some(num(70000));

        let request = CompensationRequest::try_from(req).unwrap();
        assert_eq!(request.requested_raise(), dec("-10000"));
    }
}
