//! In-memory store implementations.
//!
//! Used by the server binary (seeded from configuration) and by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, RoleSalary};

use super::{EmployeeRecordStore, RoleSalaryLookup};

/// A role salary catalog held in memory.
#[derive(Debug, Default)]
pub struct InMemoryRoleSalaries {
    records: RwLock<Vec<RoleSalary>>,
}

impl InMemoryRoleSalaries {
    /// Creates a catalog from a list of records.
    ///
    /// A later record for the same role and location replaces an earlier
    /// one, so the catalog holds at most one record per pair.
    pub fn new(records: Vec<RoleSalary>) -> Self {
        let mut deduped: Vec<RoleSalary> = Vec::with_capacity(records.len());
        for record in records {
            match deduped
                .iter_mut()
                .find(|r| r.matches_role(&record.role) && r.matches_location(&record.location))
            {
                Some(existing) => *existing = record,
                None => deduped.push(record),
            }
        }
        Self {
            records: RwLock::new(deduped),
        }
    }

    /// Returns the number of records in the catalog.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if the catalog holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RoleSalaryLookup for InMemoryRoleSalaries {
    async fn lookup(&self, role: &str, location: Option<&str>) -> EngineResult<Option<RoleSalary>> {
        let records = self.records.read().await;
        let candidates: Vec<&RoleSalary> = records.iter().filter(|r| r.matches_role(role)).collect();

        if let Some(location) = location {
            if let Some(record) = candidates.iter().find(|r| r.matches_location(location)) {
                return Ok(Some((*record).clone()));
            }
        }

        match candidates.as_slice() {
            [only] => Ok(Some((*only).clone())),
            [] => Ok(None),
            many => {
                debug!(
                    role = %role,
                    location = ?location,
                    candidates = many.len(),
                    "Role has several locations and none matched"
                );
                Ok(None)
            }
        }
    }
}

/// An employee record store held in memory.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRecords {
    inner: RwLock<RecordsInner>,
}

#[derive(Debug, Default)]
struct RecordsInner {
    records: Vec<EmployeeRecord>,
    by_employee: HashMap<String, usize>,
}

impl InMemoryEmployeeRecords {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRecordStore for InMemoryEmployeeRecords {
    async fn insert(&self, record: EmployeeRecord) -> EngineResult<()> {
        let mut inner = self.inner.write().await;
        if inner.by_employee.contains_key(&record.employee_id) {
            return Err(EngineError::DuplicateEmployee {
                employee_id: record.employee_id,
            });
        }
        let index = inner.records.len();
        inner.by_employee.insert(record.employee_id.clone(), index);
        inner.records.push(record);
        Ok(())
    }

    async fn get(&self, employee_id: &str) -> EngineResult<Option<EmployeeRecord>> {
        let inner = self.inner.read().await;
        Ok(inner
            .by_employee
            .get(employee_id)
            .map(|&index| inner.records[index].clone()))
    }

    async fn list(&self) -> EngineResult<Vec<EmployeeRecord>> {
        Ok(self.inner.read().await.records.clone())
    }
}
