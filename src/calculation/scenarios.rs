//! Staffing scenario cost model.
//!
//! This module compares the four ways of handling a compensation request:
//! retaining the employee at the requested salary, hiring a replacement at
//! market rate, staffing the role at market rate with no recruitment
//! overhead, and covering the role temporarily before a permanent hire.

use rust_decimal::Decimal;

use crate::models::{ScenarioInputs, ScenarioResult};

/// The costing horizon, in months.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Upper bound accepted for any monetary figure, request or catalog.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Computes the four staffing scenario costs for a request.
///
/// | Scenario | Cost |
/// |---|---|
/// | hiring | `market_salary * 12 + recruitment_cost` |
/// | full-time staffing | `market_salary * 12` |
/// | partial then hire | `staffing_salary_per_month * months + market_salary * (12 - months) + recruitment_cost` |
/// | retention | `requested_salary * 12` |
///
/// The function is pure and total: `months_for_staffing` is not clamped, so
/// a value above 12 yields a negative market-rate remainder. Callers
/// range-check inputs before calling.
///
/// # Arguments
///
/// * `inputs` - The validated financial figures from the request
/// * `market_salary` - The average market salary resolved for the role
///
/// # Panics
///
/// Panics on `Decimal` overflow, which cannot happen while every figure and
/// the market salary are within [`MAX_AMOUNT`] and months are within the
/// costing horizon. Request validation and the catalog loader enforce both.
///
/// # Examples
///
/// ```
/// use compensation_engine::calculation::compute_scenarios;
/// use compensation_engine::models::ScenarioInputs;
/// use rust_decimal::Decimal;
///
/// let inputs = ScenarioInputs {
///     current_salary: Decimal::new(50000, 0),
///     requested_salary: Decimal::new(60000, 0),
///     staffing_salary_per_month: Decimal::new(7000, 0),
///     months_for_staffing: Decimal::new(3, 0),
///     recruitment_cost: Decimal::new(5000, 0),
/// };
///
/// let result = compute_scenarios(&inputs, Decimal::new(55000, 0));
/// assert_eq!(result.hiring_cost, Decimal::new(665000, 0));
/// assert_eq!(result.partial_and_subsequent_hiring_cost, Decimal::new(521000, 0));
/// ```
pub fn compute_scenarios(inputs: &ScenarioInputs, market_salary: Decimal) -> ScenarioResult {
    let full_time_staffing_cost = market_salary * MONTHS_PER_YEAR;
    let hiring_cost = full_time_staffing_cost + inputs.recruitment_cost;

    let partial_staffing_cost = inputs.staffing_salary_per_month * inputs.months_for_staffing;
    let subsequent_hiring_cost = market_salary * (MONTHS_PER_YEAR - inputs.months_for_staffing)
        + inputs.recruitment_cost;

    // Reduced form of (requested - current + current) * 12. Evaluating the
    // long form rounds past 28 significant digits, so current would leak in.
    let retention_cost = inputs.requested_salary * MONTHS_PER_YEAR;

    ScenarioResult {
        hiring_cost,
        full_time_staffing_cost,
        partial_and_subsequent_hiring_cost: partial_staffing_cost + subsequent_hiring_cost,
        retention_cost,
    }
}
