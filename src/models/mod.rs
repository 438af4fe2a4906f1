//! Core data models for the shift engine.
//!
//! This module contains all the domain models used throughout the engine.

mod cache_view;
mod clock_time;
mod pay_period;
mod payroll;
mod principal;
mod schedule;
mod shift;

pub use cache_view::CacheView;
pub use clock_time::ClockTime;
pub use pay_period::PayPeriod;
pub use payroll::{PayrollEntry, PayrollSummary, PayrollWarning, UNKNOWN_EMPLOYEE_WARNING};
pub use principal::{Principal, Role};
pub use schedule::{Schedule, ScheduleStatus, next_week_start};
pub use shift::{Shift, ShiftDraft};
