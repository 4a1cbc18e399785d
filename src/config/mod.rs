//! Configuration loading and management for the payroll engine.
//!
//! This module loads payroll settings (monthly hours budget, overtime policy,
//! default overtime rate) and the role catalog from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Roles configured: {}", config.roles().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{OvertimePolicyKind, PayrollConfig, PayrollSettings, RoleCatalog, RolesFile};
