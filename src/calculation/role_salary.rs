//! Seniority-based salary preview for promotions.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::Role;

use super::rounding::round_2dp;

/// Computes the base salary a role pays at a given seniority level.
///
/// Returns `role.base_salary × multiplier` for the matching level, rounded to
/// two decimal places. Nothing is written anywhere; the promotion workflow
/// uses this to preview a change before committing it.
///
/// # Errors
///
/// - `LevelNotFound` if the role has no entry for `level`
/// - `InvalidInput` if the base salary or the matched multiplier is negative,
///   or if their product does not fit in a `Decimal`
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::salary_for_level;
/// use payroll_engine::models::{Role, SeniorityLevel};
/// use rust_decimal::Decimal;
///
/// let role = Role {
///     id: "role_dev".to_string(),
///     title: "Developer".to_string(),
///     base_salary: Decimal::new(80000, 0),
///     overtime_rate: Decimal::new(15, 1),
///     seniority_levels: vec![
///         SeniorityLevel { level: 1, salary_multiplier: Decimal::ONE },
///         SeniorityLevel { level: 3, salary_multiplier: Decimal::new(15, 1) },
///     ],
/// };
/// assert_eq!(salary_for_level(&role, 3).unwrap(), Decimal::new(120000, 0));
/// assert!(salary_for_level(&role, 7).is_err());
/// ```
pub fn salary_for_level(role: &Role, level: u32) -> EngineResult<Decimal> {
    let entry = role
        .seniority_level(level)
        .ok_or_else(|| EngineError::LevelNotFound {
            role_id: role.id.clone(),
            level,
        })?;

    if role.base_salary < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "base_salary",
            format!("must not be negative, got {}", role.base_salary),
        ));
    }

    if entry.salary_multiplier < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            "salary_multiplier",
            format!("must not be negative, got {}", entry.salary_multiplier),
        ));
    }

    role.base_salary
        .checked_mul(entry.salary_multiplier)
        .map(round_2dp)
        .ok_or_else(|| {
            EngineError::invalid_input(
                "salary_multiplier",
                format!(
                    "{} x {} is out of range",
                    role.base_salary, entry.salary_multiplier
                ),
            )
        })
}
