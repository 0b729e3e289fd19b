//! Market salary reference data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The average market salary recorded for a role in one location.
///
/// Records are created and maintained outside the engine; the engine only
/// reads them through [`crate::store::RoleSalaryLookup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSalary {
    /// The role identifier (e.g., "Software Engineer").
    pub role: String,
    /// The location the salary was surveyed in.
    pub location: String,
    /// The average market salary for the role.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_market_salary: Decimal,
}

impl RoleSalary {
    /// Returns true if this record is for `role`, ignoring case and
    /// surrounding whitespace.
    pub fn matches_role(&self, role: &str) -> bool {
        self.role.trim().eq_ignore_ascii_case(role.trim())
    }

    /// Returns true if this record is for `location`, ignoring case and
    /// surrounding whitespace.
    pub fn matches_location(&self, location: &str) -> bool {
        self.location.trim().eq_ignore_ascii_case(location.trim())
    }
}
