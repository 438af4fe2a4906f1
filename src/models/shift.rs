//! Shift model and related types.
//!
//! This module defines the persisted [`Shift`] record and the [`ShiftDraft`]
//! input used when a manager schedules a new shift.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::ShiftInterval;

use super::ClockTime;

/// One scheduled work period for one employee on one calendar date.
///
/// `start_time`, `employee_id`, `date` and `end_time` never change after the
/// shift is created; only `actual_hours` may be overridden later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The employee working the shift.
    pub employee_id: String,
    /// The weekly schedule this shift belongs to.
    pub schedule_id: String,
    /// The calendar date the shift starts on.
    pub date: NaiveDate,
    /// Local wall-clock start time.
    pub start_time: ClockTime,
    /// Local wall-clock end time. Earlier than `start_time` for overnight shifts.
    pub end_time: ClockTime,
    /// Manager-entered override of the scheduled duration, in hours.
    #[serde(default)]
    pub actual_hours: Option<Decimal>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl Shift {
    /// Returns the normalized `[start, end)` minute interval for the shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_engine::models::{ClockTime, Shift};
    /// use chrono::NaiveDate;
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     schedule_id: "sched_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     start_time: ClockTime::parse("22:00").unwrap(),
    ///     end_time: ClockTime::parse("06:00").unwrap(),
    ///     actual_hours: None,
    ///     notes: None,
    /// };
    ///
    /// let interval = shift.interval();
    /// assert_eq!(interval.start_minutes, 1320);
    /// assert_eq!(interval.end_minutes, 1800);
    /// ```
    pub fn interval(&self) -> ShiftInterval {
        ShiftInterval::from_times(self.start_time, self.end_time)
    }

    /// Returns the scheduled duration in hours, ignoring any override.
    pub fn scheduled_hours(&self) -> Decimal {
        self.interval().hours()
    }

    /// Returns true if the shift runs past midnight into the next day.
    pub fn is_overnight(&self) -> bool {
        self.end_time < self.start_time
    }

    /// Returns true if a manager has overridden the scheduled hours.
    pub fn is_overridden(&self) -> bool {
        self.actual_hours.is_some()
    }
}

/// Typed input for creating a shift.
///
/// Every field is optional so that a missing value is reported as
/// [`MissingField`](crate::error::EngineError::MissingField) by the validator
/// rather than as a deserialization failure. The date and times stay as raw
/// strings until validation parses them, so a blank value is also reported as
/// missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDraft {
    /// The weekly schedule to add the shift to.
    pub schedule_id: Option<String>,
    /// The employee to schedule.
    pub employee_id: Option<String>,
    /// The date of the shift as entered (`YYYY-MM-DD`).
    pub date: Option<String>,
    /// Start time as entered (`HH:MM`).
    pub start_time: Option<String>,
    /// End time as entered (`HH:MM`).
    pub end_time: Option<String>,
    /// Optional notes.
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_shift(start: &str, end: &str) -> Shift {
        Shift {
            id: "shift_001".to_string(),
            employee_id: "emp_001".to_string(),
            schedule_id: "sched_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            start_time: ClockTime::parse(start).unwrap(),
            end_time: ClockTime::parse(end).unwrap(),
            actual_hours: None,
            notes: None,
        }
    }

    #[test]
    fn test_day_shift_scheduled_hours() {
        let shift = make_shift("09:00", "17:00");
        assert_eq!(shift.scheduled_hours(), Decimal::new(8, 0));
        assert!(!shift.is_overnight());
    }

    #[test]
    fn test_overnight_shift_scheduled_hours() {
        let shift = make_shift("22:00", "06:00");
        assert_eq!(shift.scheduled_hours(), Decimal::new(8, 0));
        assert!(shift.is_overnight());
    }

    #[test]
    fn test_shift_ending_at_midnight_is_overnight() {
        let shift = make_shift("18:00", "00:00");
        assert!(shift.is_overnight());
        assert_eq!(shift.scheduled_hours(), Decimal::new(6, 0));
    }

    #[test]
    fn test_is_overridden() {
        let mut shift = make_shift("09:00", "17:00");
        assert!(!shift.is_overridden());
        shift.actual_hours = Some(Decimal::new(625, 2));
        assert!(shift.is_overridden());
    }

    #[test]
    fn test_shift_deserialization() {
        let json = r#"{
            "id": "shift_001",
            "employee_id": "emp_001",
            "schedule_id": "sched_001",
            "date": "2026-01-15",
            "start_time": "09:00",
            "end_time": "17:30",
            "actual_hours": "7.75"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.start_time.to_string(), "09:00");
        assert_eq!(shift.end_time.to_string(), "17:30");
        assert_eq!(shift.actual_hours, Some(Decimal::new(775, 2)));
        assert_eq!(shift.notes, None);
    }

    #[test]
    fn test_shift_deserialization_rejects_bad_time() {
        let json = r#"{
            "id": "shift_001",
            "employee_id": "emp_001",
            "schedule_id": "sched_001",
            "date": "2026-01-15",
            "start_time": "9am",
            "end_time": "17:30"
        }"#;

        assert!(serde_json::from_str::<Shift>(json).is_err());
    }

    #[test]
    fn test_draft_missing_fields_deserialize_as_none() {
        let draft: ShiftDraft = serde_json::from_str(r#"{"employee_id": "emp_001"}"#).unwrap();
        assert_eq!(draft.employee_id.as_deref(), Some("emp_001"));
        assert!(draft.schedule_id.is_none());
        assert!(draft.date.is_none());
        assert!(draft.start_time.is_none());
    }

    #[test]
    fn test_draft_keeps_blank_date_as_text() {
        let draft: ShiftDraft = serde_json::from_str(r#"{"date": ""}"#).unwrap();
        assert_eq!(draft.date.as_deref(), Some(""));
    }
}
