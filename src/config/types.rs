//! Configuration types for payroll generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::{DEFAULT_DAILY_THRESHOLD_HOURS, OvertimePolicy};
use crate::error::{EngineError, EngineResult};
use crate::models::Role;

/// Which overtime split the runner applies, as written in `payroll.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimePolicyKind {
    /// Split against the monthly regular-hours budget.
    #[default]
    Monthly,
    /// Split each date against a daily threshold.
    Daily,
}

fn default_hours_per_day() -> Decimal {
    Decimal::new(8, 0)
}

fn default_working_days_per_month() -> u32 {
    22
}

fn default_overtime_rate() -> Decimal {
    Decimal::new(15, 1)
}

/// Payroll settings from `payroll.yaml`.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollSettings;
/// use rust_decimal::Decimal;
///
/// let settings = PayrollSettings::default();
/// assert_eq!(settings.regular_hours_per_month(), Decimal::new(176, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayrollSettings {
    /// Regular working hours in one day.
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: Decimal,
    /// Working days assumed in one month.
    #[serde(default = "default_working_days_per_month")]
    pub working_days_per_month: u32,
    /// Overtime multiplier for employees with neither their own nor a role rate.
    #[serde(default = "default_overtime_rate")]
    pub default_overtime_rate: Decimal,
    /// Which overtime split to apply.
    #[serde(default)]
    pub overtime_policy: OvertimePolicyKind,
    /// Daily threshold for the daily policy; defaults to 8 hours.
    #[serde(default)]
    pub daily_threshold_hours: Option<Decimal>,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            hours_per_day: default_hours_per_day(),
            working_days_per_month: default_working_days_per_month(),
            default_overtime_rate: default_overtime_rate(),
            overtime_policy: OvertimePolicyKind::Monthly,
            daily_threshold_hours: None,
        }
    }
}

impl PayrollSettings {
    /// Hours per day times working days per month, saturating at `Decimal::MAX`.
    pub fn regular_hours_per_month(&self) -> Decimal {
        self.hours_per_day
            .saturating_mul(Decimal::from(self.working_days_per_month))
    }

    /// The overtime split these settings select.
    pub fn overtime_policy(&self) -> OvertimePolicy {
        match self.overtime_policy {
            OvertimePolicyKind::Monthly => OvertimePolicy::Monthly,
            OvertimePolicyKind::Daily => OvertimePolicy::Daily {
                threshold_hours: self
                    .daily_threshold_hours
                    .unwrap_or(DEFAULT_DAILY_THRESHOLD_HOURS),
            },
        }
    }

    /// Checks the structural preconditions of the settings.
    pub fn validate(&self) -> EngineResult<()> {
        if self
            .hours_per_day
            .checked_mul(Decimal::from(self.working_days_per_month))
            .is_none()
        {
            return Err(EngineError::invalid_configuration(
                "hours_per_day times working_days_per_month is out of range",
            ));
        }

        if self.regular_hours_per_month() <= Decimal::ZERO {
            return Err(EngineError::invalid_configuration(
                "hours_per_day and working_days_per_month must give a positive monthly budget",
            ));
        }

        if self.default_overtime_rate < Decimal::ZERO {
            return Err(EngineError::invalid_configuration(
                "default_overtime_rate must not be negative",
            ));
        }

        if let Some(threshold) = self.daily_threshold_hours {
            if threshold <= Decimal::ZERO {
                return Err(EngineError::invalid_configuration(
                    "daily_threshold_hours must be positive",
                ));
            }
        }

        Ok(())
    }
}

/// Roles file structure (`roles.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RolesFile {
    /// All configured roles.
    pub roles: Vec<Role>,
}

/// Validated roles indexed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleCatalog {
    roles: BTreeMap<String, Role>,
}

impl RoleCatalog {
    /// Builds a catalog, validating every role and rejecting duplicate ids.
    pub fn new(roles: Vec<Role>) -> EngineResult<Self> {
        let mut catalog = Self::default();
        for role in roles {
            if catalog.roles.contains_key(&role.id) {
                return Err(EngineError::invalid_configuration(format!(
                    "duplicate role id '{}'",
                    role.id
                )));
            }
            catalog.insert(role)?;
        }
        Ok(catalog)
    }

    /// Returns a copy of this catalog with `roles` added or replacing existing ids.
    pub fn with_overrides(&self, roles: Vec<Role>) -> EngineResult<Self> {
        let mut catalog = self.clone();
        for role in roles {
            catalog.insert(role)?;
        }
        Ok(catalog)
    }

    fn insert(&mut self, role: Role) -> EngineResult<()> {
        role.validate()?;
        self.roles.insert(role.id.clone(), role);
        Ok(())
    }

    /// Looks up a role by id.
    pub fn get(&self, role_id: &str) -> EngineResult<&Role> {
        self.roles
            .get(role_id)
            .ok_or_else(|| EngineError::RoleNotFound {
                role_id: role_id.to_string(),
            })
    }

    /// Number of roles in the catalog.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns true if the catalog has no roles.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// The complete payroll configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    settings: PayrollSettings,
    roles: RoleCatalog,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(settings: PayrollSettings, roles: RoleCatalog) -> Self {
        Self { settings, roles }
    }

    /// Returns the payroll settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Returns the role catalog.
    pub fn roles(&self) -> &RoleCatalog {
        &self.roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeniorityLevel;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_role(id: &str) -> Role {
        Role {
            id: id.to_string(),
            title: "Developer".to_string(),
            base_salary: dec("80000"),
            overtime_rate: dec("1.5"),
            seniority_levels: vec![SeniorityLevel {
                level: 1,
                salary_multiplier: dec("1.0"),
            }],
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = PayrollSettings::default();
        assert_eq!(settings.regular_hours_per_month(), dec("176"));
        assert_eq!(settings.default_overtime_rate, dec("1.5"));
        assert_eq!(settings.overtime_policy(), OvertimePolicy::Monthly);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_daily_policy_uses_default_threshold() {
        let settings = PayrollSettings {
            overtime_policy: OvertimePolicyKind::Daily,
            ..PayrollSettings::default()
        };
        assert_eq!(
            settings.overtime_policy(),
            OvertimePolicy::Daily {
                threshold_hours: dec("8")
            }
        );
    }

    #[test]
    fn test_daily_policy_custom_threshold() {
        let settings = PayrollSettings {
            overtime_policy: OvertimePolicyKind::Daily,
            daily_threshold_hours: Some(dec("7.5")),
            ..PayrollSettings::default()
        };
        assert_eq!(
            settings.overtime_policy(),
            OvertimePolicy::Daily {
                threshold_hours: dec("7.5")
            }
        );
    }

    #[test]
    fn test_zero_working_days_invalid() {
        let settings = PayrollSettings {
            working_days_per_month: 0,
            ..PayrollSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_out_of_range_monthly_budget_invalid() {
        let settings = PayrollSettings {
            hours_per_day: dec("70000000000000000000000000000"),
            ..PayrollSettings::default()
        };
        assert_eq!(settings.regular_hours_per_month(), Decimal::MAX);
        assert!(matches!(
            settings.validate(),
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_negative_default_overtime_rate_invalid() {
        let settings = PayrollSettings {
            default_overtime_rate: dec("-1"),
            ..PayrollSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_settings_from_yaml_with_defaults() {
        let settings: PayrollSettings =
            serde_yaml::from_str("working_days_per_month: 20\novertime_policy: daily\n").unwrap();
        assert_eq!(settings.hours_per_day, dec("8"));
        assert_eq!(settings.regular_hours_per_month(), dec("160"));
        assert_eq!(settings.overtime_policy, OvertimePolicyKind::Daily);
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = RoleCatalog::new(vec![create_test_role("role_a")]).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("role_a").is_ok());
        assert!(matches!(
            catalog.get("role_b"),
            Err(EngineError::RoleNotFound { .. })
        ));
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let result = RoleCatalog::new(vec![create_test_role("role_a"), create_test_role("role_a")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_rejects_invalid_role() {
        let mut role = create_test_role("role_a");
        role.seniority_levels.clear();
        assert!(RoleCatalog::new(vec![role]).is_err());
    }

    #[test]
    fn test_overrides_replace_existing_roles() {
        let catalog = RoleCatalog::new(vec![create_test_role("role_a")]).unwrap();
        let mut replacement = create_test_role("role_a");
        replacement.base_salary = dec("90000");

        let merged = catalog
            .with_overrides(vec![replacement, create_test_role("role_b")])
            .unwrap();

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("role_a").unwrap().base_salary, dec("90000"));
        assert_eq!(catalog.get("role_a").unwrap().base_salary, dec("80000"));
    }
}
