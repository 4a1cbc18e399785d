//! Role model and its seniority table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// One tier of a role's seniority table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeniorityLevel {
    /// The tier number, starting at 1.
    pub level: u32,
    /// Multiplier applied to the role's base salary at this tier.
    #[serde(with = "rust_decimal::serde::float")]
    pub salary_multiplier: Decimal,
}

/// A job title with its compensation rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Unique identifier for the role.
    pub id: String,
    /// Human-readable title (e.g., "Software Engineer").
    pub title: String,
    /// Base salary in currency units per month.
    #[serde(with = "rust_decimal::serde::float")]
    pub base_salary: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours (e.g., 1.5).
    #[serde(with = "rust_decimal::serde::float")]
    pub overtime_rate: Decimal,
    /// Seniority tiers sorted by ascending level.
    pub seniority_levels: Vec<SeniorityLevel>,
}

impl Role {
    /// Finds the seniority entry for `level`, if the role defines one.
    pub fn seniority_level(&self, level: u32) -> Option<&SeniorityLevel> {
        self.seniority_levels.iter().find(|s| s.level == level)
    }

    /// Checks the structural rules of the seniority table.
    ///
    /// The table must be non-empty, strictly ascending by level starting at 1
    /// or above, and every multiplier must be positive. Multipliers that
    /// decrease with level are accepted but logged.
    ///
    /// # Examples
    ///
    /// ```
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
    ///         SeniorityLevel { level: 2, salary_multiplier: Decimal::new(12, 1) },
    ///     ],
    /// };
    /// assert!(role.validate().is_ok());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.seniority_levels.is_empty() {
            return Err(EngineError::invalid_configuration(format!(
                "role '{}' has no seniority levels",
                self.id
            )));
        }

        if self.base_salary < Decimal::ZERO {
            return Err(EngineError::invalid_configuration(format!(
                "role '{}' has a negative base salary",
                self.id
            )));
        }

        if self.overtime_rate < Decimal::ZERO {
            return Err(EngineError::invalid_configuration(format!(
                "role '{}' has a negative overtime rate",
                self.id
            )));
        }

        for entry in &self.seniority_levels {
            if entry.level == 0 {
                return Err(EngineError::invalid_configuration(format!(
                    "role '{}' has a seniority level below 1",
                    self.id
                )));
            }
            if entry.salary_multiplier <= Decimal::ZERO {
                return Err(EngineError::invalid_configuration(format!(
                    "role '{}' level {} has a non-positive multiplier",
                    self.id, entry.level
                )));
            }
        }

        for pair in self.seniority_levels.windows(2) {
            if pair[1].level <= pair[0].level {
                return Err(EngineError::invalid_configuration(format!(
                    "role '{}' seniority levels are not strictly ascending",
                    self.id
                )));
            }
            if pair[1].salary_multiplier < pair[0].salary_multiplier {
                warn!(
                    role_id = %self.id,
                    level = pair[1].level,
                    "Seniority multiplier decreases with level"
                );
            }
        }

        Ok(())
    }
}
