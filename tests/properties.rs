//! Property-based tests for the payroll arithmetic.
//!
//! These tests check the conservation, linearity and rounding invariants of
//! the calculation functions using proptest.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{
    OvertimePolicy, aggregate_attendance, build_payroll_entry, resolve_pay_rates, round_2dp,
    salary_for_level,
};
use payroll_engine::config::PayrollSettings;
use payroll_engine::error::EngineError;
use payroll_engine::models::{
    AttendanceRecord, DirectoryEmployee, EmployeePayrollInput, PayPeriod, Role, SeniorityLevel,
};
use payroll_engine::runner::{FailureStage, PayrollRunner};
use payroll_engine::sources::{SnapshotAttendance, SnapshotDirectory};

fn march_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
}

fn march_end() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 31).unwrap()
}

fn record(day: u32, minutes: i64) -> AttendanceRecord {
    let date = NaiveDate::from_ymd_opt(2026, 3, day).unwrap();
    let check_in = NaiveDateTime::new(date, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
    AttendanceRecord {
        employee_id: "emp_1".to_string(),
        date,
        check_in,
        check_out: Some(check_in + Duration::minutes(minutes)),
    }
}

/// Shift lengths in multiples of 3 minutes, so hours are exact at 2dp.
fn shift_minutes() -> impl Strategy<Value = i64> {
    (1i64..=240).prop_map(|n| n * 3)
}

fn shifts_strategy() -> impl Strategy<Value = Vec<(u32, i64)>> {
    prop::collection::vec((1u32..=31, shift_minutes()), 0..40)
}

fn total_hours(shifts: &[(u32, i64)]) -> Decimal {
    shifts
        .iter()
        .map(|(_, minutes)| Decimal::from(*minutes) / Decimal::from(60))
        .sum()
}

/// Money amounts with cent precision.
fn money() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn hours_budget() -> impl Strategy<Value = Decimal> {
    (1i64..=400).prop_map(Decimal::from)
}

fn multiplier() -> impl Strategy<Value = Decimal> {
    (0i64..=400).prop_map(|n| Decimal::new(n, 2))
}

proptest! {
    /// Property: Records without a valid check-out contribute nothing.
    #[test]
    fn prop_invalid_records_aggregate_to_zero(
        shifts in prop::collection::vec((1u32..=31, 0i64..=600, any::<bool>()), 0..20),
    ) {
        let records: Vec<AttendanceRecord> = shifts
            .iter()
            .map(|(day, minutes, open)| {
                let mut r = record(*day, -minutes);
                if *open {
                    r.check_out = None;
                }
                r
            })
            .collect();

        let hours = aggregate_attendance(&records, march_start(), march_end(), Decimal::from(176), OvertimePolicy::Monthly);
        prop_assert_eq!(hours.regular_hours, Decimal::ZERO);
        prop_assert_eq!(hours.overtime_hours, Decimal::ZERO);
    }

    /// Property: Under the monthly budget, every hour is regular.
    #[test]
    fn prop_under_budget_all_regular(shifts in prop::collection::vec((1u32..=31, shift_minutes()), 0..22)) {
        // At most 22 shifts of 12h stays under a 264h budget
        let budget = Decimal::from(264);
        let records: Vec<AttendanceRecord> = shifts.iter().map(|(d, m)| record(*d, *m)).collect();

        let hours = aggregate_attendance(&records, march_start(), march_end(), budget, OvertimePolicy::Monthly);
        prop_assert_eq!(hours.regular_hours, total_hours(&shifts));
        prop_assert_eq!(hours.overtime_hours, Decimal::ZERO);
    }

    /// Property: The monthly split neither loses nor duplicates hours.
    #[test]
    fn prop_monthly_split_conserves_hours(shifts in shifts_strategy(), budget in hours_budget()) {
        let records: Vec<AttendanceRecord> = shifts.iter().map(|(d, m)| record(*d, *m)).collect();

        let hours = aggregate_attendance(&records, march_start(), march_end(), budget, OvertimePolicy::Monthly);
        let total = total_hours(&shifts);

        prop_assert_eq!(hours.regular_hours + hours.overtime_hours, total);
        prop_assert!(hours.regular_hours <= budget);
        if total > budget {
            prop_assert_eq!(hours.regular_hours, budget);
        }
    }

    /// Property: The daily split also conserves hours.
    #[test]
    fn prop_daily_split_conserves_hours(shifts in shifts_strategy()) {
        let records: Vec<AttendanceRecord> = shifts.iter().map(|(d, m)| record(*d, *m)).collect();
        let policy = OvertimePolicy::Daily { threshold_hours: Decimal::from(8) };

        let hours = aggregate_attendance(&records, march_start(), march_end(), Decimal::from(176), policy);
        prop_assert_eq!(hours.total_hours(), total_hours(&shifts));
    }

    /// Property: Hourly rate is linear in the monthly salary.
    #[test]
    fn prop_rate_linear_in_salary(salary in money(), budget in hours_budget(), rate in multiplier()) {
        let single = resolve_pay_rates(salary, budget, rate).unwrap();
        let double = resolve_pay_rates(salary * Decimal::TWO, budget, rate).unwrap();

        // Division keeps 28 significant digits; compare well inside that
        prop_assert_eq!(
            double.hourly_rate.round_dp(20),
            (single.hourly_rate * Decimal::TWO).round_dp(20)
        );
    }

    /// Property: Stored amounts are cents and the total is their exact sum.
    #[test]
    fn prop_total_is_sum_of_entry_fields(
        salary in money(),
        rate in multiplier(),
        shifts in shifts_strategy(),
    ) {
        let budget = Decimal::from(176);
        let records: Vec<AttendanceRecord> = shifts.iter().map(|(d, m)| record(*d, *m)).collect();
        let hours = aggregate_attendance(&records, march_start(), march_end(), budget, OvertimePolicy::Monthly);
        let rates = resolve_pay_rates(salary, budget, rate).unwrap();
        let period = PayPeriod::for_month(3, 2026).unwrap();
        let input = EmployeePayrollInput {
            employee_id: "emp_1".to_string(),
            name: "Employee 1".to_string(),
            position: "Engineer".to_string(),
            monthly_salary: salary,
            overtime_rate: rate,
            attendance: records,
        };

        let entry = build_payroll_entry(&input, &hours, &rates, &period, Utc::now()).unwrap();

        prop_assert_eq!(entry.regular_pay, round_2dp(hours.regular_hours * rates.hourly_rate));
        prop_assert_eq!(entry.overtime_pay, round_2dp(hours.overtime_hours * rates.overtime_hourly_rate));
        prop_assert_eq!(entry.total_salary, entry.regular_pay + entry.overtime_pay);
        prop_assert!(entry.regular_pay.scale() <= 2);
        prop_assert!(entry.overtime_pay.scale() <= 2);
        prop_assert!(entry.total_salary.scale() <= 2);
    }

    /// Property: Amounts too large for a Decimal fail the employee, not the run.
    #[test]
    fn prop_out_of_range_salary_is_a_rates_failure(
        exponent in 27u32..=28,
        rate in (2i64..=100_000).prop_map(Decimal::from),
        shifts in prop::collection::vec((1u32..=31, shift_minutes()), 1..40),
    ) {
        // 7 * 10^exponent / 176 * rate overflows for every rate >= 2 at 7e28,
        // and for rates above about 11.3 at 7e27
        let salary = Decimal::from_i128_with_scale(7 * 10i128.pow(exponent), 0);
        prop_assume!((salary / Decimal::from(176)).checked_mul(rate).is_none());

        let directory = SnapshotDirectory::default().with_department(
            "dept_eng",
            vec![
                DirectoryEmployee {
                    employee_id: "emp_1".to_string(),
                    name: "Employee 1".to_string(),
                    position: "Engineer".to_string(),
                    monthly_salary: salary,
                    overtime_rate: Some(rate),
                    role_id: None,
                },
                DirectoryEmployee {
                    employee_id: "emp_2".to_string(),
                    name: "Employee 2".to_string(),
                    position: "Engineer".to_string(),
                    monthly_salary: Decimal::from(8800),
                    overtime_rate: None,
                    role_id: None,
                },
            ],
        );
        let attendance = SnapshotAttendance::new(shifts.iter().map(|(d, m)| record(*d, *m)).collect());
        let settings = PayrollSettings::default();

        let outcome = PayrollRunner::new(&settings, &directory, &attendance)
            .run("dept_eng", 3, 2026)
            .unwrap()
            .into_outcome();

        prop_assert_eq!(outcome.entries.len(), 1);
        prop_assert_eq!(outcome.entries[0].employee_id.as_str(), "emp_2");
        prop_assert_eq!(outcome.failure_count(), 1);
        prop_assert_eq!(outcome.failures[0].stage, FailureStage::Rates);
    }

    /// Property: Levels outside the table never yield a salary.
    #[test]
    fn prop_missing_level_is_error(levels in prop::collection::btree_set(1u32..20, 1..6), probe in 1u32..40) {
        prop_assume!(!levels.contains(&probe));
        let role = Role {
            id: "role_a".to_string(),
            title: "Role A".to_string(),
            base_salary: Decimal::from(50_000),
            overtime_rate: Decimal::new(15, 1),
            seniority_levels: levels
                .iter()
                .map(|level| SeniorityLevel { level: *level, salary_multiplier: Decimal::ONE })
                .collect(),
        };

        let result = salary_for_level(&role, probe);
        let is_level_not_found = matches!(result, Err(EngineError::LevelNotFound { level, .. }) if level == probe);
        prop_assert!(is_level_not_found);
    }

    /// Property: Identical snapshots give identical runs.
    #[test]
    fn prop_runs_are_idempotent(shifts in shifts_strategy(), salary in money()) {
        let directory = SnapshotDirectory::default().with_department(
            "dept_eng",
            vec![DirectoryEmployee {
                employee_id: "emp_1".to_string(),
                name: "Employee 1".to_string(),
                position: "Engineer".to_string(),
                monthly_salary: salary,
                overtime_rate: None,
                role_id: None,
            }],
        );
        let attendance = SnapshotAttendance::new(shifts.iter().map(|(d, m)| record(*d, *m)).collect());
        let settings = PayrollSettings::default();
        let runner = PayrollRunner::new(&settings, &directory, &attendance);
        let generated_at = Utc.with_ymd_and_hms(2026, 4, 1, 0, 0, 0).unwrap();

        let first = runner.run_at("dept_eng", 3, 2026, generated_at).unwrap().into_outcome();
        let second = runner.run_at("dept_eng", 3, 2026, generated_at).unwrap().into_outcome();
        prop_assert_eq!(first, second);
    }
}
