//! Payroll reporting period.
//!
//! This module contains the [`PayPeriod`] type that bounds a payroll report.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date range for a payroll report.
///
/// # Example
///
/// ```
/// use shift_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let pay_period = PayPeriod::new(
///     NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
/// );
///
/// assert!(pay_period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()));
/// assert_eq!(pay_period.days(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a pay period. A period whose end precedes its start contains no dates.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod::new(
    ///     NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
    ///     NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
    /// );
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap())); // end date
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())); // before
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 27).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of calendar days in the period, or zero if it is empty.
    pub fn days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }
}
