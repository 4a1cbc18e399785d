//! Calculation logic for the payroll engine.
//!
//! This module contains the synchronous arithmetic core: attendance
//! aggregation into regular/overtime hours, pay rate resolution, payroll
//! entry construction, and the seniority salary preview used by promotions.

mod attendance_aggregation;
mod entry_builder;
mod pay_rates;
mod role_salary;
mod rounding;

pub use attendance_aggregation::{
    AggregatedHours, DEFAULT_DAILY_THRESHOLD_HOURS, OvertimePolicy, aggregate_attendance,
};
pub use entry_builder::build_payroll_entry;
pub use pay_rates::{PayRates, resolve_pay_rates};
pub use role_salary::salary_for_level;
pub use rounding::{REPORTED_DECIMAL_PLACES, round_2dp};
