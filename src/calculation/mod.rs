//! Calculation logic for the Compensation Scenario Engine.
//!
//! This module contains the staffing scenario cost model. Everything here is
//! pure: inputs are validated figures, outputs are plain values, and nothing
//! touches storage.

mod scenarios;

pub use scenarios::{MAX_AMOUNT, MONTHS_PER_YEAR, compute_scenarios};
