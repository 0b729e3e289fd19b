//! Compensation request processing.
//!
//! [`CompensationService`] runs a validated request through the market
//! salary lookup, the scenario calculator and the record store. It has no
//! HTTP knowledge, so the same flow can back other front ends.

use std::sync::Arc;

use tracing::debug;

use rust_decimal::Decimal;

use crate::calculation::{MAX_AMOUNT, compute_scenarios};
use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationRequest, EmployeeRecord, RoleSalary};
use crate::store::{EmployeeRecordStore, RoleSalaryLookup};

/// Processes compensation requests against injected storage.
#[derive(Clone)]
pub struct CompensationService {
    role_salaries: Arc<dyn RoleSalaryLookup>,
    records: Arc<dyn EmployeeRecordStore>,
}

impl CompensationService {
    /// Creates a service over the given stores.
    pub fn new(
        role_salaries: Arc<dyn RoleSalaryLookup>,
        records: Arc<dyn EmployeeRecordStore>,
    ) -> Self {
        Self {
            role_salaries,
            records,
        }
    }

    /// Resolves the market salary record for a role.
    ///
    /// Returns [`EngineError::RoleSalaryNotFound`] when the lookup finds no
    /// record.
    pub async fn resolve_role_salary(
        &self,
        role: &str,
        location: Option<&str>,
    ) -> EngineResult<RoleSalary> {
        self.role_salaries
            .lookup(role, location)
            .await?
            .ok_or_else(|| EngineError::RoleSalaryNotFound {
                role: role.to_string(),
                location: location.map(str::to_string),
            })
    }

    /// Computes and stores the staffing scenarios for a request.
    ///
    /// The employee's city is used as the lookup location. Nothing is
    /// stored when the lookup fails or returns a salary outside
    /// `[0, MAX_AMOUNT]`.
    pub async fn submit(&self, request: CompensationRequest) -> EngineResult<EmployeeRecord> {
        let role_salary = self
            .resolve_role_salary(&request.role, Some(&request.city))
            .await?;
        let market_salary = role_salary.average_market_salary;
        if market_salary < Decimal::ZERO || market_salary > MAX_AMOUNT {
            return Err(EngineError::Storage {
                message: format!(
                    "market salary {} for role '{}' is out of range",
                    market_salary, role_salary.role
                ),
            });
        }

        let scenarios = compute_scenarios(&request.inputs, market_salary);
        debug!(
            employee_id = %request.employee_id,
            role = %request.role,
            salary_location = %role_salary.location,
            market_salary = %market_salary,
            "Computed staffing scenarios"
        );

        let record = EmployeeRecord::new(request, market_salary, scenarios);
        self.records.insert(record.clone()).await?;
        Ok(record)
    }

    /// Returns the stored record for an employee.
    pub async fn record(&self, employee_id: &str) -> EngineResult<EmployeeRecord> {
        self.records
            .get(employee_id)
            .await?
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    /// Returns all stored records in submission order.
    pub async fn records(&self) -> EngineResult<Vec<EmployeeRecord>> {
        self.records.list().await
    }
}
