//! Monthly pay period model.
//!
//! This module contains the [`PayPeriod`] type that turns a `(month, year)`
//! pair into the inclusive calendar window a payroll run covers.

use chrono::{Month, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month used as a payroll period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod::for_month(2, 2028).unwrap();
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2028, 2, 1).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
/// assert_eq!(period.month_name(), "February");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayPeriod {
    /// Month number, 1 through 12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// First day of the month (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the month (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Builds the period covering `month` of `year`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `month` is outside 1..=12 or the year is out
    /// of the supported calendar range.
    pub fn for_month(month: u32, year: i32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::invalid_input(
                "month",
                format!("{} is not a month between 1 and 12", month),
            ));
        }

        let start_date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            EngineError::invalid_input("year", format!("{} is out of range", year))
        })?;

        let end_date = start_date
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| {
                EngineError::invalid_input("year", format!("{} is out of range", year))
            })?;

        Ok(Self {
            month,
            year,
            start_date,
            end_date,
        })
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// The English month name used as the display string on payroll entries.
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }
}
