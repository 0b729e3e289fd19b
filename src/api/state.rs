//! Application state for the Compensation Scenario Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::service::CompensationService;
use crate::store::{EmployeeRecordStore, InMemoryEmployeeRecords, InMemoryRoleSalaries, RoleSalaryLookup};

/// Shared application state.
///
/// Holds the compensation service and, through it, the injected stores.
#[derive(Clone)]
pub struct AppState {
    service: CompensationService,
}

impl AppState {
    /// Creates a new application state over the given stores.
    pub fn new(
        role_salaries: Arc<dyn RoleSalaryLookup>,
        records: Arc<dyn EmployeeRecordStore>,
    ) -> Self {
        Self {
            service: CompensationService::new(role_salaries, records),
        }
    }

    /// Creates state backed by in-memory stores, with the role salary
    /// catalog seeded from configuration.
    pub fn in_memory(config: &ConfigLoader) -> Self {
        Self::new(
            Arc::new(InMemoryRoleSalaries::new(config.role_salaries().to_vec())),
            Arc::new(InMemoryEmployeeRecords::new()),
        )
    }

    /// Returns the compensation service.
    pub fn service(&self) -> &CompensationService {
        &self.service
    }
}
