//! Scheduling logic for the shift engine.
//!
//! This module contains the pure functions behind scheduling: `HH:MM`
//! arithmetic with the overnight rule, effective-hours resolution and
//! display formatting, overlap detection for new shifts, payroll
//! aggregation, and role checks. Nothing here performs I/O.

mod authorization;
mod hours_policy;
mod overlap;
mod payroll;
mod time_arithmetic;

pub use authorization::{Action, authorize, is_permitted};
pub use hours_policy::{
    HoursSource, ResolvedHours, effective_hours, format_hours, resolve_hours,
    total_effective_hours, validate_override,
};
pub use overlap::{
    ShiftCandidate, check_candidate, find_adjacent_day_overlap, find_overlap,
    has_adjacent_day_overlap, has_overlap, overlap_error, validate_and_create_shift,
};
pub use payroll::{EmployeeDirectory, UNKNOWN_EMPLOYEE_NAME, summarize_payroll};
pub use time_arithmetic::{MINUTES_PER_DAY, ShiftInterval, compute_duration, to_minutes};
