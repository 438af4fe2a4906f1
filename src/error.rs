//! Error types for the shift engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the scheduling core and its store can report. None of
//! them is fatal to the process; callers decide how to surface them.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the shift engine.
///
/// All fallible operations return this error type, so form errors,
/// overlap rejections and store failures are handled in one place.
///
/// # Example
///
/// ```
/// use shift_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     value: "25:00".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time format '25:00': expected HH:MM");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A wall-clock value was not a valid `HH:MM` string.
    #[error("Invalid time format '{value}': expected HH:MM")]
    InvalidTimeFormat {
        /// The rejected input.
        value: String,
    },

    /// A calendar date was not a valid `YYYY-MM-DD` string.
    #[error("Invalid date format '{value}': expected YYYY-MM-DD")]
    InvalidDateFormat {
        /// The rejected input.
        value: String,
    },

    /// A date calculation ran past the supported calendar range.
    #[error("Date out of range: no week follows {date}")]
    DateOutOfRange {
        /// The date the calculation started from.
        date: String,
    },

    /// A required field was absent when creating a shift.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A shift was rejected for a reason other than overlap.
    #[error("Invalid shift: {message}")]
    InvalidShift {
        /// A description of what made the shift invalid.
        message: String,
    },

    /// The candidate shift intersects an existing shift for the same employee.
    #[error("Shift overlaps with an existing shift '{shift_id}' ({start}-{end})")]
    OverlappingShift {
        /// The ID of the conflicting shift.
        shift_id: String,
        /// Start time of the conflicting shift.
        start: String,
        /// End time of the conflicting shift.
        end: String,
    },

    /// A manual hours override fell outside the configured bounds.
    #[error("Hours override {hours} is outside the allowed range 0-{max}")]
    OverrideOutOfRange {
        /// The rejected override.
        hours: Decimal,
        /// The configured upper bound.
        max: Decimal,
    },

    /// No shift exists with the given ID.
    #[error("Shift not found: {shift_id}")]
    ShiftNotFound {
        /// The ID that was looked up.
        shift_id: String,
    },

    /// No schedule exists with the given ID.
    #[error("Schedule not found: {schedule_id}")]
    ScheduleNotFound {
        /// The ID that was looked up.
        schedule_id: String,
    },

    /// The principal's role does not permit the requested action.
    #[error("Principal '{principal_id}' is not allowed to {action}")]
    Unauthorized {
        /// The ID of the principal that was denied.
        principal_id: String,
        /// The action that was attempted.
        action: String,
    },

    /// The backing store failed.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the store failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
