//! Attendance aggregation.
//!
//! This module converts one employee's raw check-in/check-out records for a
//! period into a single regular/overtime hours split. Malformed records never
//! produce an error: they contribute zero hours.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::AttendanceRecord;

use super::rounding::round_2dp;

/// Default daily threshold for [`OvertimePolicy::Daily`].
pub const DEFAULT_DAILY_THRESHOLD_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// How worked hours are split into regular and overtime hours.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{OvertimePolicy, DEFAULT_DAILY_THRESHOLD_HOURS};
///
/// let policy = OvertimePolicy::Daily { threshold_hours: DEFAULT_DAILY_THRESHOLD_HOURS };
/// assert_ne!(policy, OvertimePolicy::Monthly);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvertimePolicy {
    /// Only hours beyond the monthly regular-hours budget are overtime.
    Monthly,
    /// Hours beyond `threshold_hours` on a single calendar date are overtime.
    Daily {
        /// Regular hours allowed per date.
        threshold_hours: Decimal,
    },
}

/// The regular/overtime split of an employee's hours for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AggregatedHours {
    /// Hours paid at the regular rate.
    pub regular_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
}

impl AggregatedHours {
    /// Regular plus overtime hours.
    pub fn total_hours(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }
}

/// Aggregates attendance records into regular and overtime hours.
///
/// Only records dated within `[period_start, period_end]` (inclusive) count,
/// even if the attendance source returned others. Each counted record
/// contributes its check-in/check-out span rounded to two decimal places;
/// open shifts and records whose check-out is not after check-in contribute
/// nothing.
///
/// Under [`OvertimePolicy::Monthly`] the period total is split against
/// `regular_hours_per_month`. Under [`OvertimePolicy::Daily`] hours are summed
/// per date and split against the daily threshold, and the monthly budget is
/// not applied.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{aggregate_attendance, OvertimePolicy};
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
/// let records = vec![
///     AttendanceRecord {
///         employee_id: "emp_001".to_string(),
///         date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///         check_in: at("2026-03-02 09:00"),
///         check_out: Some(at("2026-03-02 17:00")),
///     },
///     AttendanceRecord {
///         employee_id: "emp_001".to_string(),
///         date: NaiveDate::from_ymd_opt(2026, 3, 3).unwrap(),
///         check_in: at("2026-03-03 09:00"),
///         check_out: None,
///     },
/// ];
///
/// let hours = aggregate_attendance(
///     &records,
///     NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
///     Decimal::new(176, 0),
///     OvertimePolicy::Monthly,
/// );
/// assert_eq!(hours.regular_hours, Decimal::new(8, 0));
/// assert_eq!(hours.overtime_hours, Decimal::ZERO);
/// ```
pub fn aggregate_attendance(
    records: &[AttendanceRecord],
    period_start: NaiveDate,
    period_end: NaiveDate,
    regular_hours_per_month: Decimal,
    policy: OvertimePolicy,
) -> AggregatedHours {
    // Hours per date; a BTreeMap keeps the summation order deterministic
    let mut hours_by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for record in records
        .iter()
        .filter(|r| r.date >= period_start && r.date <= period_end)
    {
        if let Some(hours) = record.worked_hours() {
            *hours_by_date.entry(record.date).or_insert(Decimal::ZERO) += round_2dp(hours);
        }
    }

    match policy {
        OvertimePolicy::Monthly => {
            let total_hours: Decimal = hours_by_date.values().copied().sum();
            split_at_threshold(total_hours, regular_hours_per_month)
        }
        OvertimePolicy::Daily { threshold_hours } => hours_by_date.values().fold(
            AggregatedHours::default(),
            |acc, day_hours| {
                let day = split_at_threshold(*day_hours, threshold_hours);
                AggregatedHours {
                    regular_hours: acc.regular_hours + day.regular_hours,
                    overtime_hours: acc.overtime_hours + day.overtime_hours,
                }
            },
        ),
    }
}

fn split_at_threshold(hours: Decimal, threshold: Decimal) -> AggregatedHours {
    let threshold = threshold.max(Decimal::ZERO);
    AggregatedHours {
        regular_hours: hours.min(threshold),
        overtime_hours: (hours - threshold).max(Decimal::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn record(date: &str, check_in: &str, check_out: Option<&str>) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: "emp_001".to_string(),
            date: make_date(date),
            check_in: make_datetime(date, check_in),
            check_out: check_out.map(|t| make_datetime(date, t)),
        }
    }

    fn march(records: &[AttendanceRecord], policy: OvertimePolicy) -> AggregatedHours {
        aggregate_attendance(
            records,
            make_date("2026-03-01"),
            make_date("2026-03-31"),
            dec("176"),
            policy,
        )
    }

    fn daily() -> OvertimePolicy {
        OvertimePolicy::Daily {
            threshold_hours: DEFAULT_DAILY_THRESHOLD_HOURS,
        }
    }

    /// Twenty 8-hour days in March
    fn twenty_full_days() -> Vec<AttendanceRecord> {
        (2..=21)
            .map(|day| {
                record(
                    &format!("2026-03-{:02}", day),
                    "09:00:00",
                    Some("17:00:00"),
                )
            })
            .collect()
    }

    // ==========================================================================
    // AGG-001: no records
    // ==========================================================================
    #[test]
    fn test_agg_001_no_records_is_zero() {
        let hours = march(&[], OvertimePolicy::Monthly);
        assert_eq!(hours, AggregatedHours::default());
    }

    // ==========================================================================
    // AGG-002: only open or inverted records
    // ==========================================================================
    #[test]
    fn test_agg_002_invalid_records_are_zero() {
        let records = vec![
            record("2026-03-02", "09:00:00", None),
            record("2026-03-03", "17:00:00", Some("09:00:00")),
            record("2026-03-04", "09:00:00", Some("09:00:00")),
        ];
        assert_eq!(march(&records, OvertimePolicy::Monthly), AggregatedHours::default());
        assert_eq!(march(&records, daily()), AggregatedHours::default());
    }

    // ==========================================================================
    // AGG-003: open shift next to a valid 8-hour record
    // ==========================================================================
    #[test]
    fn test_agg_003_open_shift_skipped() {
        let records = vec![
            record("2026-03-02", "09:00:00", None),
            record("2026-03-03", "09:00:00", Some("17:00:00")),
        ];
        let hours = march(&records, OvertimePolicy::Monthly);
        assert_eq!(hours.total_hours(), dec("8"));
        assert_eq!(hours.regular_hours, dec("8"));
    }

    // ==========================================================================
    // AGG-004: 160 hours stays regular under the monthly budget
    // ==========================================================================
    #[test]
    fn test_agg_004_under_budget_all_regular() {
        let hours = march(&twenty_full_days(), OvertimePolicy::Monthly);
        assert_eq!(hours.regular_hours, dec("160"));
        assert_eq!(hours.overtime_hours, Decimal::ZERO);
    }

    // ==========================================================================
    // AGG-005: 190 hours splits into 176 + 14
    // ==========================================================================
    #[test]
    fn test_agg_005_over_budget_splits() {
        let mut records = twenty_full_days();
        // 30 more hours: three 10-hour days
        for day in 23..=25 {
            records.push(record(
                &format!("2026-03-{:02}", day),
                "08:00:00",
                Some("18:00:00"),
            ));
        }

        let hours = march(&records, OvertimePolicy::Monthly);
        assert_eq!(hours.regular_hours, dec("176"));
        assert_eq!(hours.overtime_hours, dec("14"));
        assert_eq!(hours.total_hours(), dec("190"));
    }

    #[test]
    fn test_records_outside_period_ignored() {
        let records = vec![
            record("2026-02-28", "09:00:00", Some("17:00:00")),
            record("2026-03-01", "09:00:00", Some("17:00:00")),
            record("2026-03-31", "09:00:00", Some("17:00:00")),
            record("2026-04-01", "09:00:00", Some("17:00:00")),
        ];
        let hours = march(&records, OvertimePolicy::Monthly);
        assert_eq!(hours.regular_hours, dec("16"));
    }

    #[test]
    fn test_each_record_rounded_to_two_places() {
        // 09:00:00 -> 09:20:00 is 0.3333... hours, counted as 0.33
        let records = vec![
            record("2026-03-02", "09:00:00", Some("09:20:00")),
            record("2026-03-03", "09:00:00", Some("09:20:00")),
            record("2026-03-04", "09:00:00", Some("09:20:00")),
        ];
        let hours = march(&records, OvertimePolicy::Monthly);
        assert_eq!(hours.regular_hours, dec("0.99"));
    }

    #[test]
    fn test_exactly_at_budget_has_no_overtime() {
        let mut records = twenty_full_days();
        records.push(record("2026-03-23", "09:00:00", Some("17:00:00")));
        records.push(record("2026-03-24", "09:00:00", Some("17:00:00")));

        let hours = march(&records, OvertimePolicy::Monthly);
        assert_eq!(hours.regular_hours, dec("176"));
        assert_eq!(hours.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_custom_monthly_budget() {
        let hours = aggregate_attendance(
            &twenty_full_days(),
            make_date("2026-03-01"),
            make_date("2026-03-31"),
            dec("150"),
            OvertimePolicy::Monthly,
        );
        assert_eq!(hours.regular_hours, dec("150"));
        assert_eq!(hours.overtime_hours, dec("10"));
    }

    #[test]
    fn test_daily_policy_splits_each_day() {
        let records = vec![
            record("2026-03-02", "08:00:00", Some("18:00:00")), // 10h
            record("2026-03-03", "09:00:00", Some("15:00:00")), // 6h
            record("2026-03-04", "07:00:00", Some("18:30:00")), // 11.5h
        ];
        let hours = march(&records, daily());
        assert_eq!(hours.regular_hours, dec("22"));
        assert_eq!(hours.overtime_hours, dec("5.5"));
    }

    #[test]
    fn test_daily_policy_sums_records_on_same_date() {
        let records = vec![
            record("2026-03-02", "06:00:00", Some("11:00:00")), // 5h
            record("2026-03-02", "13:00:00", Some("18:00:00")), // 5h
        ];
        let hours = march(&records, daily());
        assert_eq!(hours.regular_hours, dec("8"));
        assert_eq!(hours.overtime_hours, dec("2"));
    }

    #[test]
    fn test_daily_policy_ignores_monthly_budget() {
        let hours = aggregate_attendance(
            &twenty_full_days(),
            make_date("2026-03-01"),
            make_date("2026-03-31"),
            dec("100"),
            daily(),
        );
        assert_eq!(hours.regular_hours, dec("160"));
        assert_eq!(hours.overtime_hours, Decimal::ZERO);
    }

    #[test]
    fn test_policies_differ_on_long_days_under_budget() {
        let records = vec![record("2026-03-02", "08:00:00", Some("20:00:00"))]; // 12h
        let monthly = march(&records, OvertimePolicy::Monthly);
        let per_day = march(&records, daily());

        assert_eq!(monthly.overtime_hours, Decimal::ZERO);
        assert_eq!(per_day.overtime_hours, dec("4"));
        assert_eq!(monthly.total_hours(), per_day.total_hours());
    }
}
