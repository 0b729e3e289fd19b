//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading service
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::MAX_AMOUNT;
use crate::error::{EngineError, EngineResult};
use crate::models::RoleSalary;

use super::types::{RoleSalariesConfig, ServiceConfig, ServiceSettings};

/// Environment variable overriding the configured port.
pub const PORT_ENV: &str = "PORT";

/// Loads and provides access to service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// ├── service.yaml        # Bind address, port, log format
/// └── role_salaries.yaml  # Market salary catalog seed
/// ```
///
/// # Example
///
/// ```no_run
/// use compensation_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Listening on {}", loader.settings().bind_address());
/// # Ok::<(), compensation_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A catalog entry has a blank role or location, or a salary outside
    ///   `[0, MAX_AMOUNT]`
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings_path = path.join("service.yaml");
        let settings = Self::load_yaml::<ServiceSettings>(&settings_path)?;

        let catalog_path = path.join("role_salaries.yaml");
        let catalog = Self::load_yaml::<RoleSalariesConfig>(&catalog_path)?;
        let role_salaries = Self::validate_catalog(&catalog_path, catalog)?;

        info!(
            config_dir = %path.display(),
            role_salaries = role_salaries.len(),
            "Loaded service configuration"
        );

        Ok(Self {
            config: ServiceConfig::new(settings, role_salaries),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks catalog entries and converts them to domain records.
    fn validate_catalog(path: &Path, catalog: RoleSalariesConfig) -> EngineResult<Vec<RoleSalary>> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        catalog
            .role_salaries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                if entry.role.trim().is_empty() {
                    return Err(parse_error(format!("entry {}: role is blank", index)));
                }
                if entry.location.trim().is_empty() {
                    return Err(parse_error(format!(
                        "entry {} ({}): location is blank",
                        index, entry.role
                    )));
                }
                if entry.average_market_salary < Decimal::ZERO {
                    return Err(parse_error(format!(
                        "entry {} ({}): average_market_salary is negative",
                        index, entry.role
                    )));
                }
                if entry.average_market_salary > MAX_AMOUNT {
                    return Err(parse_error(format!(
                        "entry {} ({}): average_market_salary exceeds {}",
                        index, entry.role, MAX_AMOUNT
                    )));
                }
                Ok(RoleSalary::from(entry))
            })
            .collect()
    }

    /// Applies a port override, typically the value of [`PORT_ENV`].
    ///
    /// `None` leaves the configured port unchanged.
    pub fn with_port_override(mut self, port: Option<&str>) -> EngineResult<Self> {
        if let Some(raw) = port {
            let port = raw.trim().parse::<u16>().map_err(|e| EngineError::ConfigParseError {
                path: PORT_ENV.to_string(),
                message: format!("invalid port '{}': {}", raw, e),
            })?;
            let mut settings = self.config.settings().clone();
            settings.port = port;
            self.config = ServiceConfig::new(settings, self.config.role_salaries().to_vec());
        }
        Ok(self)
    }

    /// Returns the server settings.
    pub fn settings(&self) -> &ServiceSettings {
        self.config.settings()
    }

    /// Returns the market salary records.
    pub fn role_salaries(&self) -> &[RoleSalary] {
        self.config.role_salaries()
    }
}
