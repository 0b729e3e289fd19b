//! Configuration types for the compensation service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::models::RoleSalary;

/// Default port, matching the service's historical deployment.
pub const DEFAULT_PORT: u16 = 4000;

/// Log output format for the server binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Server settings from `service.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceSettings {
    /// The address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// The port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The log output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_format: LogFormat::default(),
        }
    }
}

impl ServiceSettings {
    /// Returns the `host:port` address to bind to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Role salary catalog file structure (`role_salaries.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RoleSalariesConfig {
    /// The market salary records to seed the catalog with.
    pub role_salaries: Vec<RoleSalaryEntry>,
}

/// A single catalog entry as written in YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleSalaryEntry {
    /// The role identifier.
    pub role: String,
    /// The location the salary applies to.
    pub location: String,
    /// The average market salary.
    pub average_market_salary: rust_decimal::Decimal,
}

impl From<RoleSalaryEntry> for RoleSalary {
    fn from(entry: RoleSalaryEntry) -> Self {
        RoleSalary {
            role: entry.role,
            location: entry.location,
            average_market_salary: entry.average_market_salary,
        }
    }
}

/// The complete service configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Server settings.
    settings: ServiceSettings,
    /// Market salary records, in file order.
    role_salaries: Vec<RoleSalary>,
}

impl ServiceConfig {
    /// Creates a new ServiceConfig from its component parts.
    pub fn new(settings: ServiceSettings, role_salaries: Vec<RoleSalary>) -> Self {
        Self {
            settings,
            role_salaries,
        }
    }

    /// Returns the server settings.
    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    /// Returns the market salary records.
    pub fn role_salaries(&self) -> &[RoleSalary] {
        &self.role_salaries
    }
}
