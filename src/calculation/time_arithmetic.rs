//! Time-of-day arithmetic for shifts.
//!
//! This module converts `HH:MM` strings into minutes since midnight,
//! normalizes overnight shifts by wrapping the end time past midnight, and
//! computes shift durations in decimal hours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::ClockTime;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Converts an `HH:MM` string into minutes since midnight.
///
/// # Errors
///
/// Returns [`InvalidTimeFormat`](crate::error::EngineError::InvalidTimeFormat)
/// if the string is not two integer components separated by a colon, or if
/// the hour is outside `0..=23` or the minute outside `0..=59`.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::to_minutes;
///
/// assert_eq!(to_minutes("00:00").unwrap(), 0);
/// assert_eq!(to_minutes("17:30").unwrap(), 1050);
/// assert!(to_minutes("17:75").is_err());
/// ```
pub fn to_minutes(time: &str) -> EngineResult<u32> {
    Ok(u32::from(ClockTime::parse(time)?.minute_of_day()))
}

/// A half-open `[start_minutes, end_minutes)` interval measured from midnight
/// of the shift's date.
///
/// Built from a start and end time with the overnight rule applied: if the
/// end is earlier than the start, exactly one day is added to the end. The
/// end is therefore never before the start, and the two are equal only for a
/// zero-length shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftInterval {
    /// Start, in minutes from midnight of the shift date.
    pub start_minutes: i64,
    /// End, in minutes from midnight of the shift date (exclusive).
    pub end_minutes: i64,
}

impl ShiftInterval {
    /// Normalizes a start/end pair into an interval.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_engine::calculation::ShiftInterval;
    /// use shift_engine::models::ClockTime;
    ///
    /// let start = ClockTime::parse("22:00").unwrap();
    /// let end = ClockTime::parse("06:00").unwrap();
    ///
    /// let interval = ShiftInterval::from_times(start, end);
    /// assert_eq!(interval.start_minutes, 22 * 60);
    /// assert_eq!(interval.end_minutes, 30 * 60);
    /// ```
    pub fn from_times(start: ClockTime, end: ClockTime) -> Self {
        let start_minutes = i64::from(start.minute_of_day());
        let mut end_minutes = i64::from(end.minute_of_day());

        if end_minutes < start_minutes {
            end_minutes += MINUTES_PER_DAY;
        }

        Self {
            start_minutes,
            end_minutes,
        }
    }

    /// Moves the interval by whole days, for comparing shifts that start on
    /// different dates.
    pub fn offset_days(self, days: i64) -> Self {
        let offset = days * MINUTES_PER_DAY;
        Self {
            start_minutes: self.start_minutes + offset,
            end_minutes: self.end_minutes + offset,
        }
    }

    /// Length of the interval in minutes.
    pub fn duration_minutes(&self) -> i64 {
        self.end_minutes - self.start_minutes
    }

    /// Length of the interval in decimal hours.
    pub fn hours(&self) -> Decimal {
        Decimal::new(self.duration_minutes(), 0) / Decimal::new(60, 0)
    }

    /// Returns true if the two intervals intersect.
    ///
    /// Ends are exclusive: a shift ending exactly when another begins does
    /// not overlap it.
    pub fn overlaps(&self, other: &ShiftInterval) -> bool {
        self.start_minutes < other.end_minutes && self.end_minutes > other.start_minutes
    }
}

/// Computes the duration between two `HH:MM` times in decimal hours.
///
/// An end time earlier than the start time is treated as the following day.
/// Equal times give a zero duration, which is not an error here.
///
/// # Errors
///
/// Returns [`InvalidTimeFormat`](crate::error::EngineError::InvalidTimeFormat)
/// if either time cannot be parsed.
///
/// # Examples
///
/// ```
/// use shift_engine::calculation::compute_duration;
/// use rust_decimal::Decimal;
///
/// assert_eq!(compute_duration("09:00", "17:00").unwrap(), Decimal::new(8, 0));
/// assert_eq!(compute_duration("22:00", "06:00").unwrap(), Decimal::new(8, 0));
/// assert_eq!(compute_duration("09:00", "09:00").unwrap(), Decimal::ZERO);
/// ```
pub fn compute_duration(start: &str, end: &str) -> EngineResult<Decimal> {
    let start = ClockTime::parse(start)?;
    let end = ClockTime::parse(end)?;
    Ok(ShiftInterval::from_times(start, end).hours())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn interval(start: &str, end: &str) -> ShiftInterval {
        ShiftInterval::from_times(
            ClockTime::parse(start).unwrap(),
            ClockTime::parse(end).unwrap(),
        )
    }

    #[test]
    fn test_to_minutes() {
        assert_eq!(to_minutes("09:00").unwrap(), 540);
        assert_eq!(to_minutes("23:59").unwrap(), 1439);
    }

    #[test]
    fn test_to_minutes_reports_input() {
        assert_eq!(
            to_minutes("9-30"),
            Err(EngineError::InvalidTimeFormat {
                value: "9-30".to_string()
            })
        );
    }

    #[test]
    fn test_day_shift_duration() {
        assert_eq!(compute_duration("09:00", "17:00").unwrap(), dec("8.0"));
    }

    #[test]
    fn test_overnight_shift_duration() {
        assert_eq!(compute_duration("22:00", "06:00").unwrap(), dec("8.0"));
    }

    #[test]
    fn test_zero_length_shift_duration() {
        assert_eq!(compute_duration("09:00", "09:00").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_partial_hour_duration() {
        assert_eq!(compute_duration("09:00", "17:30").unwrap(), dec("8.5"));
        assert_eq!(compute_duration("09:00", "09:15").unwrap(), dec("0.25"));
    }

    #[test]
    fn test_longest_representable_shift() {
        // One minute short of a full day; a full 24h shift cannot be expressed.
        assert_eq!(
            compute_duration("00:01", "00:00").unwrap(),
            Decimal::new(1439, 0) / Decimal::new(60, 0)
        );
    }

    #[test]
    fn test_invalid_start_time() {
        assert!(matches!(
            compute_duration("25:00", "06:00"),
            Err(EngineError::InvalidTimeFormat { value }) if value == "25:00"
        ));
    }

    #[test]
    fn test_invalid_end_time() {
        assert!(matches!(
            compute_duration("09:00", "5pm"),
            Err(EngineError::InvalidTimeFormat { value }) if value == "5pm"
        ));
    }

    #[test]
    fn test_overnight_wrap_adds_exactly_one_day() {
        let wrapped = interval("23:00", "01:00");
        assert_eq!(wrapped.end_minutes, MINUTES_PER_DAY + 60);
        assert_eq!(wrapped.duration_minutes(), 120);
    }

    #[test]
    fn test_adjacent_intervals_do_not_overlap() {
        assert!(!interval("09:00", "17:00").overlaps(&interval("17:00", "20:00")));
        assert!(!interval("17:00", "20:00").overlaps(&interval("09:00", "17:00")));
    }

    #[test]
    fn test_partially_overlapping_intervals() {
        assert!(interval("09:00", "17:00").overlaps(&interval("16:00", "20:00")));
    }

    #[test]
    fn test_contained_interval_overlaps() {
        assert!(interval("09:00", "17:00").overlaps(&interval("12:00", "13:00")));
    }

    #[test]
    fn test_offset_days() {
        let next_day = interval("01:00", "05:00").offset_days(1);
        assert_eq!(next_day.start_minutes, MINUTES_PER_DAY + 60);
        assert_eq!(next_day.duration_minutes(), 240);
        assert!(interval("22:00", "06:00").overlaps(&next_day));
    }

    fn clock_time() -> impl Strategy<Value = ClockTime> {
        (0u16..24, 0u16..60).prop_map(|(h, m)| ClockTime::from_hm(h, m).unwrap())
    }

    proptest! {
        #[test]
        fn prop_duration_between_zero_and_twenty_four_hours(start in clock_time(), end in clock_time()) {
            let hours = compute_duration(&start.to_string(), &end.to_string()).unwrap();
            prop_assert!(hours >= Decimal::ZERO);
            prop_assert!(hours <= Decimal::new(24, 0));
        }

        #[test]
        fn prop_overlap_is_symmetric(a in clock_time(), b in clock_time(), c in clock_time(), d in clock_time()) {
            let first = ShiftInterval::from_times(a, b);
            let second = ShiftInterval::from_times(c, d);
            prop_assert_eq!(first.overlaps(&second), second.overlaps(&first));
        }

        #[test]
        fn prop_to_minutes_matches_components(time in clock_time()) {
            let minutes = to_minutes(&time.to_string()).unwrap();
            prop_assert_eq!(minutes, u32::from(time.hours()) * 60 + u32::from(time.minutes()));
        }
    }
}
