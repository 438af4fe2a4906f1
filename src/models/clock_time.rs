//! Wall-clock time of day.
//!
//! Shift start and end times are entered as `HH:MM` strings in the business's
//! local time. [`ClockTime`] is the validated form of such a string, so a
//! [`Shift`](super::Shift) can never hold a malformed time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A validated `HH:MM` time of day (`00:00` through `23:59`).
///
/// Serializes to and from the zero-padded `HH:MM` string.
///
/// # Example
///
/// ```
/// use shift_engine::models::ClockTime;
///
/// let time = ClockTime::parse("9:30").unwrap();
/// assert_eq!(time.minute_of_day(), 570);
/// assert_eq!(time.to_string(), "09:30");
///
/// assert!(ClockTime::parse("24:00").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minute_of_day: u16,
}

impl ClockTime {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: ClockTime = ClockTime { minute_of_day: 0 };

    /// Parses an `HH:MM` string.
    ///
    /// The input must be two runs of one or two ASCII digits separated by a
    /// single colon, with hours in `0..=23` and minutes in `0..=59`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimeFormat`] carrying the rejected input
    /// when the string cannot be split into two integer components or either
    /// component is out of range.
    pub fn parse(value: &str) -> EngineResult<Self> {
        let invalid = || EngineError::InvalidTimeFormat {
            value: value.to_string(),
        };

        let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
        let hours = parse_component(hours, 23).ok_or_else(invalid)?;
        let minutes = parse_component(minutes, 59).ok_or_else(invalid)?;

        Ok(Self {
            minute_of_day: hours * 60 + minutes,
        })
    }

    /// Builds a time from hour and minute components, or `None` if either is
    /// out of range.
    pub fn from_hm(hours: u16, minutes: u16) -> Option<Self> {
        (hours <= 23 && minutes <= 59).then_some(Self {
            minute_of_day: hours * 60 + minutes,
        })
    }

    /// Minutes elapsed since midnight (`hours * 60 + minutes`).
    pub fn minute_of_day(self) -> u16 {
        self.minute_of_day
    }

    /// The hour component.
    pub fn hours(self) -> u16 {
        self.minute_of_day / 60
    }

    /// The minute component.
    pub fn minutes(self) -> u16 {
        self.minute_of_day % 60
    }
}

fn parse_component(raw: &str, max: u16) -> Option<u16> {
    if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u16>().ok().filter(|value| *value <= max)
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}
