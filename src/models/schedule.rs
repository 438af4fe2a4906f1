//! Weekly schedule model.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Publication state of a weekly schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    /// Still being edited by managers.
    Draft,
    /// Visible to staff.
    Published,
}

/// A week of shifts. Deleting a schedule deletes all of its shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Unique identifier for the schedule.
    pub id: String,
    /// The first day of the scheduled week.
    pub week_start_date: NaiveDate,
    /// Whether the schedule is a draft or published.
    pub status: ScheduleStatus,
}

/// Returns the Monday of the week after the one containing `today`.
///
/// Returns `None` only at the edge of chrono's supported date range.
///
/// # Example
///
/// ```
/// use shift_engine::models::next_week_start;
/// use chrono::NaiveDate;
///
/// // 2026-01-15 is a Thursday
/// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(next_week_start(today), NaiveDate::from_ymd_opt(2026, 1, 19));
/// ```
pub fn next_week_start(today: NaiveDate) -> Option<NaiveDate> {
    let since_monday = u64::from(today.weekday().num_days_from_monday());
    today
        .checked_sub_days(Days::new(since_monday))?
        .checked_add_days(Days::new(7))
}
