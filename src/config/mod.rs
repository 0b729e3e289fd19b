//! Configuration loading and management for the Compensation Scenario Engine.
//!
//! This module loads the service settings and the market salary catalog from
//! YAML files.
//!
//! # Example
//!
//! ```no_run
//! use compensation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded {} role salaries", config.role_salaries().len());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, PORT_ENV};
pub use types::{
    DEFAULT_PORT, LogFormat, RoleSalariesConfig, RoleSalaryEntry, ServiceConfig, ServiceSettings,
};
