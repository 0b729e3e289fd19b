//! Storage seams for the Compensation Scenario Engine.
//!
//! The engine never owns a storage connection. Handlers receive trait
//! objects through [`crate::api::AppState`], so a database-backed store and
//! the in-memory stores in [`memory`] are interchangeable.

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::models::{EmployeeRecord, RoleSalary};

pub mod memory;

pub use memory::{InMemoryEmployeeRecords, InMemoryRoleSalaries};

/// Read-only access to market salary reference data.
#[async_trait]
pub trait RoleSalaryLookup: Send + Sync {
    /// Resolves the market salary record for a role.
    ///
    /// When `location` is given and a record exists for that role and
    /// location, it is returned. Otherwise the role's only record is
    /// returned. `Ok(None)` means no record could be resolved; `Err` is
    /// reserved for storage faults.
    async fn lookup(&self, role: &str, location: Option<&str>) -> EngineResult<Option<RoleSalary>>;
}

/// Append-only storage for submitted compensation requests.
#[async_trait]
pub trait EmployeeRecordStore: Send + Sync {
    /// Stores a new record.
    ///
    /// Fails with [`crate::error::EngineError::DuplicateEmployee`] when a
    /// record with the same employee ID already exists.
    async fn insert(&self, record: EmployeeRecord) -> EngineResult<()>;

    /// Returns the record for an employee, if one was submitted.
    async fn get(&self, employee_id: &str) -> EngineResult<Option<EmployeeRecord>>;

    /// Returns all records in submission order.
    async fn list(&self) -> EngineResult<Vec<EmployeeRecord>>;
}
