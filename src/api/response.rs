//! Response types for the shift engine API.
//!
//! This module defines the success payloads, the error response structure
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{HoursSource, format_hours, resolve_hours, total_effective_hours};
use crate::error::EngineError;
use crate::models::{CacheView, Schedule, Shift};
use crate::store::{EnsuredSchedule, MutationOutcome};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a missing field error response.
    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::with_details(
            "MISSING_FIELD",
            format!("missing field: {}", field),
            format!("Required field '{}' was not provided in the request", field),
        )
    }

    /// Creates an error for a request without a usable caller identity.
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new("UNAUTHENTICATED", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            ),
            EngineError::ConfigParseError { path, message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            ),
            EngineError::InvalidTimeFormat { value } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_TIME_FORMAT",
                    message,
                    format!("'{}' is not a valid 24-hour HH:MM time", value),
                ),
            ),
            EngineError::InvalidDateFormat { value } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_DATE_FORMAT",
                    message,
                    format!("'{}' is not a valid YYYY-MM-DD date", value),
                ),
            ),
            EngineError::DateOutOfRange { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("DATE_OUT_OF_RANGE", message),
            ),
            EngineError::MissingField { field } => {
                ApiErrorResponse::new(StatusCode::BAD_REQUEST, ApiError::missing_field(field))
            }
            EngineError::InvalidShift { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_SHIFT", message),
            ),
            EngineError::OverlappingShift { shift_id, .. } => ApiErrorResponse::new(
                StatusCode::CONFLICT,
                ApiError::with_details(
                    "OVERLAPPING_SHIFT",
                    message,
                    format!("Conflicting shift: {}", shift_id),
                ),
            ),
            EngineError::OverrideOutOfRange { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("OVERRIDE_OUT_OF_RANGE", message),
            ),
            EngineError::ShiftNotFound { .. } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new("SHIFT_NOT_FOUND", message),
            ),
            EngineError::ScheduleNotFound { .. } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::new("SCHEDULE_NOT_FOUND", message),
            ),
            EngineError::Unauthorized { .. } => ApiErrorResponse::new(
                StatusCode::FORBIDDEN,
                ApiError::new("UNAUTHORIZED", message),
            ),
            EngineError::StorageError { message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("STORAGE_ERROR", "Storage failure", message),
            ),
        }
    }
}

/// A mutated record plus the views the client should refresh.
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse<T> {
    /// The mutated record.
    pub data: T,
    /// Views made stale by the mutation.
    pub invalidate: Vec<CacheView>,
}

impl<T> From<MutationOutcome<T>> for MutationResponse<T> {
    fn from(outcome: MutationOutcome<T>) -> Self {
        Self {
            data: outcome.value,
            invalidate: outcome.invalidate,
        }
    }
}

/// A shift together with its resolved hours.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftView {
    /// The stored shift.
    #[serde(flatten)]
    pub shift: Shift,
    /// Override if set, otherwise scheduled duration.
    pub effective_hours: Decimal,
    /// Where `effective_hours` came from.
    pub hours_source: HoursSource,
    /// `effective_hours` formatted for display, e.g. `"8.5 hrs"`.
    pub hours_display: String,
    /// Whether the shift ends on the following day.
    pub is_overnight: bool,
}

impl From<Shift> for ShiftView {
    fn from(shift: Shift) -> Self {
        let resolved = resolve_hours(&shift);
        Self {
            effective_hours: resolved.hours,
            hours_source: resolved.source,
            hours_display: format_hours(resolved.hours),
            is_overnight: shift.is_overnight(),
            shift,
        }
    }
}

/// A schedule with its shifts and weekly total.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleShiftsResponse {
    /// The schedule.
    pub schedule: Schedule,
    /// Shifts ordered by date, then start time.
    pub shifts: Vec<ShiftView>,
    /// Sum of effective hours.
    pub total_hours: Decimal,
    /// `total_hours` formatted for display.
    pub total_display: String,
}

impl ScheduleShiftsResponse {
    /// Builds the view from a schedule and its shifts.
    pub fn new(schedule: Schedule, shifts: Vec<Shift>) -> Self {
        let total_hours = total_effective_hours(&shifts);
        Self {
            schedule,
            shifts: shifts.into_iter().map(ShiftView::from).collect(),
            total_hours,
            total_display: format_hours(total_hours),
        }
    }
}

/// Body returned when a schedule is deleted.
#[derive(Debug, Clone, Serialize)]
pub struct DeletedScheduleResponse {
    /// The deleted schedule.
    pub schedule_id: String,
    /// Number of shifts removed with it.
    pub deleted_shifts: usize,
}

/// Body returned by the next-week endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EnsureScheduleResponse {
    /// Whether a new draft was created.
    pub created: bool,
    /// The schedule for next week.
    pub schedule: Schedule,
}

impl From<EnsuredSchedule> for EnsureScheduleResponse {
    fn from(ensured: EnsuredSchedule) -> Self {
        Self {
            created: ensured.created,
            schedule: ensured.schedule,
        }
    }
}
