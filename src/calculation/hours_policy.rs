//! Effective-hours policy.
//!
//! The hours shown on the weekly schedule and the hours paid in payroll both
//! come from [`effective_hours`]: the manager's override when one is set,
//! otherwise the scheduled duration.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Shift;

/// Where a shift's effective hours came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursSource {
    /// Computed from the start and end times.
    Scheduled,
    /// Entered manually by a manager.
    Override,
}

/// A shift's effective hours together with their source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedHours {
    /// The effective hours.
    pub hours: Decimal,
    /// Whether the value is scheduled or overridden.
    pub source: HoursSource,
}

/// Resolves a shift's effective hours and reports where they came from.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::{resolve_hours, HoursSource};
/// use shift_engine::models::{ClockTime, Shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut shift = Shift {
///     id: "shift_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     schedule_id: "sched_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     start_time: ClockTime::parse("09:00").unwrap(),
///     end_time: ClockTime::parse("17:00").unwrap(),
///     actual_hours: None,
///     notes: None,
/// };
/// assert_eq!(resolve_hours(&shift).source, HoursSource::Scheduled);
///
/// shift.actual_hours = Some(Decimal::new(625, 2));
/// let resolved = resolve_hours(&shift);
/// assert_eq!(resolved.hours, Decimal::new(625, 2));
/// assert_eq!(resolved.source, HoursSource::Override);
/// ```
pub fn resolve_hours(shift: &Shift) -> ResolvedHours {
    match shift.actual_hours {
        Some(hours) => ResolvedHours {
            hours,
            source: HoursSource::Override,
        },
        None => ResolvedHours {
            hours: shift.scheduled_hours(),
            source: HoursSource::Scheduled,
        },
    }
}

/// Returns the hours a shift counts for.
///
/// This is `actual_hours` when set, ignoring the start and end times
/// entirely, and the scheduled duration otherwise. Schedule views and payroll
/// must both use this function so their totals agree.
pub fn effective_hours(shift: &Shift) -> Decimal {
    resolve_hours(shift).hours
}

/// Sums effective hours over a set of shifts.
pub fn total_effective_hours<'a, I>(shifts: I) -> Decimal
where
    I: IntoIterator<Item = &'a Shift>,
{
    shifts.into_iter().map(effective_hours).sum()
}

/// Formats hours for display, e.g. `"8.5 hrs"`.
///
/// Rounds half away from zero to two decimal places and drops trailing
/// zeros. The decimal separator is always `.`.
///
/// # Examples
///
/// ```
/// use shift_engine::calculation::format_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_hours(Decimal::new(8, 0)), "8 hrs");
/// assert_eq!(format_hours(Decimal::from_str("8.50").unwrap()), "8.5 hrs");
/// assert_eq!(format_hours(Decimal::from_str("8.567").unwrap()), "8.57 hrs");
/// ```
pub fn format_hours(hours: Decimal) -> String {
    let rounded = hours
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    format!("{} hrs", rounded)
}

/// Checks a manual hours override against the configured bound.
///
/// `None` clears the override and is always accepted. `Some(hours)` must lie
/// in `0..=max_hours`.
///
/// # Errors
///
/// Returns [`EngineError::OverrideOutOfRange`] for negative values or values
/// above `max_hours`.
pub fn validate_override(hours: Option<Decimal>, max_hours: Decimal) -> EngineResult<Option<Decimal>> {
    match hours {
        Some(value) if value < Decimal::ZERO || value > max_hours => {
            Err(EngineError::OverrideOutOfRange {
                hours: value,
                max: max_hours,
            })
        }
        other => Ok(other),
    }
}
