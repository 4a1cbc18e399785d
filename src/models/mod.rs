//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod pay_period;
mod payroll_entry;
mod role;

pub use attendance::AttendanceRecord;
pub use employee::{DirectoryEmployee, EmployeePayrollInput};
pub use pay_period::PayPeriod;
pub use payroll_entry::{PayrollEntry, PayrollStatus};
pub use role::{Role, SeniorityLevel};
