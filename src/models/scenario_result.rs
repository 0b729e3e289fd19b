//! Scenario result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four annualized costs compared for a compensation request.
///
/// Figures carry whatever currency unit the inputs were entered in.
///
/// # Example
///
/// ```
/// use compensation_engine::models::ScenarioResult;
/// use rust_decimal::Decimal;
///
/// let result = ScenarioResult {
///     hiring_cost: Decimal::new(665000, 0),
///     full_time_staffing_cost: Decimal::new(660000, 0),
///     partial_and_subsequent_hiring_cost: Decimal::new(521000, 0),
///     retention_cost: Decimal::new(720000, 0),
/// };
/// let json = serde_json::to_value(&result).unwrap();
/// assert_eq!(json["hiringCost"].as_f64(), Some(665000.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    /// Hiring a permanent replacement at market rate, plus recruitment.
    #[serde(with = "rust_decimal::serde::float")]
    pub hiring_cost: Decimal,
    /// Market-rate cost with no recruitment overhead.
    #[serde(with = "rust_decimal::serde::float")]
    pub full_time_staffing_cost: Decimal,
    /// Temporary staffing for the staffing interval, then a permanent hire.
    #[serde(with = "rust_decimal::serde::float")]
    pub partial_and_subsequent_hiring_cost: Decimal,
    /// Keeping the employee at the requested salary.
    #[serde(with = "rust_decimal::serde::float")]
    pub retention_cost: Decimal,
}

impl ScenarioResult {
    /// Returns the scenarios as `(name, cost)` pairs in a fixed order.
    pub fn entries(&self) -> [(&'static str, Decimal); 4] {
        [
            ("hiringCost", self.hiring_cost),
            ("fullTimeStaffingCost", self.full_time_staffing_cost),
            (
                "partialAndSubsequentHiringCost",
                self.partial_and_subsequent_hiring_cost,
            ),
            ("retentionCost", self.retention_cost),
        ]
    }

    /// Returns the name and cost of the lowest-cost scenario.
    ///
    /// Ties resolve to the earliest entry in [`ScenarioResult::entries`].
    pub fn cheapest(&self) -> (&'static str, Decimal) {
        let entries = self.entries();
        let mut best = entries[0];
        for entry in &entries[1..] {
            if entry.1 < best.1 {
                best = *entry;
            }
        }
        best
    }
}
