//! Shift overlap detection and validated shift creation.
//!
//! A new shift is rejected if its interval intersects any existing shift for
//! the same employee on the same date. Intervals are half-open, so
//! back-to-back shifts are allowed. Comparison against the neighbouring
//! dates is a separate check, see [`find_adjacent_day_overlap`].

use chrono::NaiveDate;
use uuid::Uuid;

use crate::config::OverlapConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{ClockTime, Shift, ShiftDraft};

use super::time_arithmetic::ShiftInterval;

/// A shift request whose required fields are present and whose times parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCandidate {
    /// The weekly schedule the shift belongs to.
    pub schedule_id: String,
    /// The employee to schedule.
    pub employee_id: String,
    /// The date the shift starts on.
    pub date: NaiveDate,
    /// Start time.
    pub start_time: ClockTime,
    /// End time.
    pub end_time: ClockTime,
    /// Optional notes.
    pub notes: Option<String>,
}

impl ShiftCandidate {
    /// Checks a draft for required fields and parses its date and times.
    ///
    /// Fields are checked in the order `schedule_id`, `employee_id`, `date`,
    /// `start_time`, `end_time`; blank strings count as missing. Parsing only
    /// starts once every required field is present.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingField`] naming the first absent field
    /// - [`EngineError::InvalidDateFormat`] if the date is not `YYYY-MM-DD`
    /// - [`EngineError::InvalidTimeFormat`] if a time is not `HH:MM`
    pub fn from_draft(draft: &ShiftDraft) -> EngineResult<Self> {
        let schedule_id = required(draft.schedule_id.as_deref(), "schedule_id")?;
        let employee_id = required(draft.employee_id.as_deref(), "employee_id")?;
        let date = required(draft.date.as_deref(), "date")?;
        let start_time = required(draft.start_time.as_deref(), "start_time")?;
        let end_time = required(draft.end_time.as_deref(), "end_time")?;

        Ok(Self {
            schedule_id: schedule_id.to_string(),
            employee_id: employee_id.to_string(),
            date: parse_date(date)?,
            start_time: ClockTime::parse(start_time)?,
            end_time: ClockTime::parse(end_time)?,
            notes: draft
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|notes| !notes.is_empty())
                .map(str::to_string),
        })
    }

    /// The candidate's normalized interval.
    pub fn interval(&self) -> ShiftInterval {
        ShiftInterval::from_times(self.start_time, self.end_time)
    }

    /// Builds the shift record with a freshly generated ID and no override.
    pub fn into_shift(self) -> Shift {
        Shift {
            id: Uuid::new_v4().to_string(),
            employee_id: self.employee_id,
            schedule_id: self.schedule_id,
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            actual_hours: None,
            notes: self.notes,
        }
    }

    fn is_same_slot(&self, shift: &Shift, date: NaiveDate) -> bool {
        shift.employee_id == self.employee_id && shift.date == date
    }
}

fn required<'a>(value: Option<&'a str>, field: &str) -> EngineResult<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| missing(field))
}

fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| EngineError::InvalidDateFormat {
        value: value.to_string(),
    })
}

fn missing(field: &str) -> EngineError {
    EngineError::MissingField {
        field: field.to_string(),
    }
}

/// Returns the first existing shift whose interval intersects the candidate.
///
/// The caller passes only shifts for the candidate's employee and date; this
/// function compares intervals and nothing else.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::{find_overlap, ShiftInterval};
/// use shift_engine::models::{ClockTime, Shift};
/// use chrono::NaiveDate;
///
/// let existing = vec![Shift {
///     id: "shift_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     schedule_id: "sched_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     start_time: ClockTime::parse("09:00").unwrap(),
///     end_time: ClockTime::parse("17:00").unwrap(),
///     actual_hours: None,
///     notes: None,
/// }];
///
/// let candidate = ShiftInterval::from_times(
///     ClockTime::parse("16:00").unwrap(),
///     ClockTime::parse("20:00").unwrap(),
/// );
/// assert_eq!(find_overlap(&candidate, &existing).map(|s| s.id.as_str()), Some("shift_001"));
/// ```
pub fn find_overlap<'a, I>(candidate: &ShiftInterval, existing: I) -> Option<&'a Shift>
where
    I: IntoIterator<Item = &'a Shift>,
{
    existing
        .into_iter()
        .find(|shift| candidate.overlaps(&shift.interval()))
}

/// Returns true if the candidate intersects any of the existing shifts.
pub fn has_overlap<'a, I>(candidate: &ShiftInterval, existing: I) -> bool
where
    I: IntoIterator<Item = &'a Shift>,
{
    find_overlap(candidate, existing).is_some()
}

/// Returns the first shift on the previous or next date that collides with
/// the candidate.
///
/// Previous-day shifts are moved back one day and next-day shifts forward one
/// day before comparing, so an overnight shift from yesterday that runs until
/// 06:00 conflicts with a candidate starting at 05:00 today, and an overnight
/// candidate conflicts with an early shift tomorrow.
pub fn find_adjacent_day_overlap<'a>(
    candidate: &ShiftInterval,
    previous_day: &'a [Shift],
    next_day: &'a [Shift],
) -> Option<&'a Shift> {
    previous_day
        .iter()
        .find(|shift| candidate.overlaps(&shift.interval().offset_days(-1)))
        .or_else(|| {
            next_day
                .iter()
                .find(|shift| candidate.overlaps(&shift.interval().offset_days(1)))
        })
}

/// Returns true if the candidate collides with a shift on an adjacent date.
pub fn has_adjacent_day_overlap(
    candidate: &ShiftInterval,
    previous_day: &[Shift],
    next_day: &[Shift],
) -> bool {
    find_adjacent_day_overlap(candidate, previous_day, next_day).is_some()
}

/// Builds the rejection error for a conflicting shift.
pub fn overlap_error(conflict: &Shift) -> EngineError {
    EngineError::OverlappingShift {
        shift_id: conflict.id.clone(),
        start: conflict.start_time.to_string(),
        end: conflict.end_time.to_string(),
    }
}

/// Checks a parsed candidate against the same-date shifts.
///
/// Shifts in `existing` for another employee or another date are ignored.
///
/// # Errors
///
/// - [`EngineError::InvalidShift`] for a zero-length shift when
///   `config.allow_zero_length` is false
/// - [`EngineError::OverlappingShift`] naming the first conflicting shift
pub fn check_candidate(
    candidate: &ShiftCandidate,
    existing: &[Shift],
    config: &OverlapConfig,
) -> EngineResult<()> {
    let interval = candidate.interval();

    if !config.allow_zero_length && interval.duration_minutes() == 0 {
        return Err(EngineError::InvalidShift {
            message: format!(
                "start and end time are both {}; a shift cannot be zero length",
                candidate.start_time
            ),
        });
    }

    let same_slot = existing
        .iter()
        .filter(|shift| candidate.is_same_slot(shift, candidate.date));

    match find_overlap(&interval, same_slot) {
        Some(conflict) => Err(overlap_error(conflict)),
        None => Ok(()),
    }
}

/// Validates a shift request against the employee's existing shifts on that
/// date and builds the new shift.
///
/// Performs no I/O: the caller fetches `existing` beforehand and persists
/// the returned shift.
///
/// # Errors
///
/// - [`EngineError::MissingField`] if `schedule_id`, `employee_id`, `date`,
///   `start_time` or `end_time` is absent
/// - [`EngineError::InvalidDateFormat`] if the date cannot be parsed
/// - [`EngineError::InvalidTimeFormat`] if a time cannot be parsed
/// - [`EngineError::InvalidShift`] for a disallowed zero-length shift
/// - [`EngineError::OverlappingShift`] if the shift intersects an existing one
///
/// # Example
///
/// ```
/// use shift_engine::calculation::validate_and_create_shift;
/// use shift_engine::config::OverlapConfig;
/// use shift_engine::error::EngineError;
/// use shift_engine::models::ShiftDraft;
///
/// let draft = ShiftDraft {
///     schedule_id: Some("sched_001".to_string()),
///     employee_id: Some("emp_001".to_string()),
///     date: Some("2026-01-15".to_string()),
///     start_time: Some("09:00".to_string()),
///     end_time: Some("17:00".to_string()),
///     notes: None,
/// };
///
/// let config = OverlapConfig::default();
/// let first = validate_and_create_shift(&draft, &[], &config).unwrap();
///
/// let clash = ShiftDraft {
///     start_time: Some("16:00".to_string()),
///     end_time: Some("20:00".to_string()),
///     ..draft.clone()
/// };
/// let result = validate_and_create_shift(&clash, &[first], &config);
/// assert!(matches!(result, Err(EngineError::OverlappingShift { .. })));
/// ```
pub fn validate_and_create_shift(
    draft: &ShiftDraft,
    existing: &[Shift],
    config: &OverlapConfig,
) -> EngineResult<Shift> {
    let candidate = ShiftCandidate::from_draft(draft)?;
    check_candidate(&candidate, existing, config)?;
    Ok(candidate.into_shift())
}
