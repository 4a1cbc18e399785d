//! Payroll Calculation Engine
//!
//! This crate turns attendance records and salary data into monthly payroll
//! entries. It aggregates worked hours into regular and overtime hours,
//! derives hourly rates from monthly salaries, runs payroll for whole
//! departments and previews role salaries by seniority level.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod runner;
pub mod sources;
