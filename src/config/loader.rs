//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::salary_for_level;
use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, PayrollSettings, RoleCatalog, RolesFile};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── payroll.yaml   # Hours budget, overtime policy and default overtime rate
/// └── roles.yaml     # Roles with their seniority tables
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Regular hours per month: {}", loader.settings().regular_hours_per_month());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The settings or a role break a structural rule (`InvalidConfiguration`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<PayrollSettings>(&path.join("payroll.yaml"))?;
        settings.validate()?;

        let roles_file = Self::load_yaml::<RolesFile>(&path.join("roles.yaml"))?;
        let roles = RoleCatalog::new(roles_file.roles)?;

        info!(
            path = %path.display(),
            regular_hours_per_month = %settings.regular_hours_per_month(),
            roles = roles.len(),
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(settings, roles),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
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

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the payroll settings.
    pub fn settings(&self) -> &PayrollSettings {
        self.config.settings()
    }

    /// Returns the role catalog.
    pub fn roles(&self) -> &RoleCatalog {
        self.config.roles()
    }

    /// Previews the salary of `role_id` at seniority `level`.
    ///
    /// # Errors
    ///
    /// `RoleNotFound` if the role is not configured, otherwise the errors of
    /// [`salary_for_level`].
    pub fn salary_for_level(&self, role_id: &str, level: u32) -> EngineResult<Decimal> {
        let role = self.roles().get(role_id)?;
        salary_for_level(role, level)
    }
}
