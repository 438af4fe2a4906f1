//! HTTP request handlers for the shift engine API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! handler extracts the caller's [`Principal`], checks the action it needs,
//! then delegates to the store.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{delete, get, post, put},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{Action, authorize};
use crate::error::EngineError;
use crate::models::{PayPeriod, PayrollSummary, Principal, Schedule, Shift, ShiftDraft};

use super::request::{
    CreateScheduleRequest, NextWeekQuery, PayrollQuery, RegisterEmployeeRequest,
    UpdateHoursRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, DeletedScheduleResponse, EnsureScheduleResponse, MutationResponse,
    ScheduleShiftsResponse, ShiftView,
};
use super::state::AppState;

type ApiResult<T> = Result<(StatusCode, Json<T>), ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedules", get(list_schedules).post(create_schedule))
        .route("/schedules/next-week", post(ensure_next_week))
        .route("/schedules/:id", delete(delete_schedule))
        .route("/schedules/:id/publish", post(publish_schedule))
        .route("/schedules/:id/shifts", get(schedule_shifts))
        .route("/shifts", post(create_shift))
        .route("/shifts/:id", delete(delete_shift))
        .route("/shifts/:id/hours", put(update_hours))
        .route("/employees/:id", put(register_employee))
        .route("/payroll", get(payroll))
        .with_state(state)
}

/// Authorizes the caller, logging denials.
fn check(correlation_id: Uuid, principal: &Principal, action: Action) -> Result<(), ApiErrorResponse> {
    authorize(principal, action).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            principal_id = %principal.id,
            role = %principal.role,
            action = %action,
            "Request denied"
        );
        ApiErrorResponse::from(err)
    })
}

/// Logs a failed operation and converts the error for the client.
fn failed(correlation_id: Uuid, operation: &'static str, err: EngineError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        operation,
        error = %err,
        "Request failed"
    );
    err.into()
}

/// Converts a body rejection into the API's error shape.
fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("MISSING_FIELD", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
}

fn query_rejection(correlation_id: Uuid, rejection: QueryRejection) -> ApiErrorResponse {
    let message = rejection.body_text();
    warn!(correlation_id = %correlation_id, error = %message, "Query string rejected");
    ApiErrorResponse::new(StatusCode::BAD_REQUEST, ApiError::new("INVALID_QUERY", message))
}

/// Handler for GET /schedules.
async fn list_schedules(
    State(state): State<AppState>,
    principal: Principal,
) -> ApiResult<Vec<Schedule>> {
    let correlation_id = Uuid::new_v4();
    check(correlation_id, &principal, Action::ViewSchedule)?;

    let schedules = state
        .store()
        .schedules()
        .map_err(|err| failed(correlation_id, "list_schedules", err))?;
    Ok((StatusCode::OK, Json(schedules)))
}

/// Handler for POST /schedules.
async fn create_schedule(
    State(state): State<AppState>,
    principal: Principal,
    payload: Result<Json<CreateScheduleRequest>, JsonRejection>,
) -> ApiResult<MutationResponse<Schedule>> {
    let correlation_id = Uuid::new_v4();
    check(correlation_id, &principal, Action::ManageSchedules)?;
    let Json(request) = payload.map_err(|rejection| json_rejection(correlation_id, rejection))?;

    let outcome = state
        .store()
        .create_schedule(request.week_start_date)
        .map_err(|err| failed(correlation_id, "create_schedule", err))?;

    info!(
        correlation_id = %correlation_id,
        schedule_id = %outcome.value.id,
        principal_id = %principal.id,
        "Schedule created"
    );
    Ok((StatusCode::CREATED, Json(outcome.into())))
}

/// Handler for POST /schedules/next-week.
///
/// Creates next week's draft schedule unless one already exists.
async fn ensure_next_week(
    State(state): State<AppState>,
    principal: Principal,
    query: Result<Query<NextWeekQuery>, QueryRejection>,
) -> ApiResult<MutationResponse<EnsureScheduleResponse>> {
    let correlation_id = Uuid::new_v4();
    check(correlation_id, &principal, Action::ManageSchedules)?;
    let Query(query) = query.map_err(|rejection| query_rejection(correlation_id, rejection))?;

    let today = query.today.unwrap_or_else(|| Utc::now().date_naive());
    let outcome = state
        .store()
        .ensure_week_schedule(today)
        .map_err(|err| failed(correlation_id, "ensure_next_week", err))?;

    info!(
        correlation_id = %correlation_id,
        schedule_id = %outcome.value.schedule.id,
        created = outcome.value.created,
        "Next week's schedule ensured"
    );
    Ok((
        StatusCode::OK,
        Json(MutationResponse {
            data: outcome.value.into(),
            invalidate: outcome.invalidate,
        }),
    ))
}

/// Handler for POST /schedules/:id/publish.
async fn publish_schedule(
    State(state): State<AppState>,
    principal: Principal,
    Path(schedule_id): Path<String>,
) -> ApiResult<MutationResponse<Schedule>> {
    let correlation_id = Uuid::new_v4();
    check(correlation_id, &principal, Action::ManageSchedules)?;

    let outcome = state
        .store()
        .publish_schedule(&schedule_id)
        .map_err(|err| failed(correlation_id, "publish_schedule", err))?;
    Ok((StatusCode::OK, Json(outcome.into())))
}

/// Handler for DELETE /schedules/:id.
async fn delete_schedule(
    State(state): State<AppState>,
    principal: Principal,
    Path(schedule_id): Path<String>,
) -> ApiResult<MutationResponse<DeletedScheduleResponse>> {
    let correlation_id = Uuid::new_v4();
    check(correlation_id, &principal, Action::ManageSchedules)?;

    let outcome = state
        .store()
        .delete_schedule(&schedule_id)
        .map_err(|err| failed(correlation_id, "delete_schedule", err))?;

    info!(
        correlation_id = %correlation_id,
        schedule_id = %schedule_id,
        deleted_shifts = outcome.value,
        "Schedule deleted"
    );
    Ok((
        StatusCode::OK,
        Json(MutationResponse {
            data: DeletedScheduleResponse {
                schedule_id,
                deleted_shifts: outcome.value,
            },
            invalidate: outcome.invalidate,
        }),
    ))
}

/// Handler for GET /schedules/:id/shifts.
async fn schedule_shifts(
    State(state): State<AppState>,
    principal: Principal,
    Path(schedule_id): Path<String>,
) -> ApiResult<ScheduleShiftsResponse> {
    let correlation_id = Uuid::new_v4();
    check(correlation_id, &principal, Action::ViewSchedule)?;

    let store = state.store();
    let schedule = store
        .schedule(&schedule_id)
        .map_err(|err| failed(correlation_id, "schedule_shifts", err))?;
    let shifts = store
        .shifts_for_schedule(&schedule_id)
        .map_err(|err| failed(correlation_id, "schedule_shifts", err))?;

    Ok((StatusCode::OK, Json(ScheduleShiftsResponse::new(schedule, shifts))))
}

/// Handler for POST /shifts.
///
/// Validates the request against the employee's existing shifts and stores
/// it. Overlaps are rejected with 409.
async fn create_shift(
    State(state): State<AppState>,
    principal: Principal,
    payload: Result<Json<ShiftDraft>, JsonRejection>,
) -> ApiResult<MutationResponse<ShiftView>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift creation request");
    check(correlation_id, &principal, Action::ManageShifts)?;
    let Json(draft) = payload.map_err(|rejection| json_rejection(correlation_id, rejection))?;

    let started = Instant::now();
    let outcome = state
        .store()
        .create_shift(&draft, &state.config().overlap)
        .map_err(|err| failed(correlation_id, "create_shift", err))?;

    info!(
        correlation_id = %correlation_id,
        shift_id = %outcome.value.id,
        employee_id = %outcome.value.employee_id,
        date = %outcome.value.date,
        duration_us = started.elapsed().as_micros(),
        "Shift created"
    );
    Ok((
        StatusCode::CREATED,
        Json(MutationResponse {
            data: outcome.value.into(),
            invalidate: outcome.invalidate,
        }),
    ))
}

/// Handler for PUT /shifts/:id/hours.
///
/// Sets the manual override, or clears it when `actual_hours` is null.
async fn update_hours(
    State(state): State<AppState>,
    principal: Principal,
    Path(shift_id): Path<String>,
    payload: Result<Json<UpdateHoursRequest>, JsonRejection>,
) -> ApiResult<MutationResponse<ShiftView>> {
    let correlation_id = Uuid::new_v4();
    check(correlation_id, &principal, Action::OverrideHours)?;
    let Json(request) = payload.map_err(|rejection| json_rejection(correlation_id, rejection))?;

    let outcome = state
        .store()
        .set_actual_hours(
            &shift_id,
            request.actual_hours,
            state.config().overrides.max_hours,
        )
        .map_err(|err| failed(correlation_id, "update_hours", err))?;

    info!(
        correlation_id = %correlation_id,
        shift_id = %shift_id,
        overridden = outcome.value.is_overridden(),
        "Shift hours updated"
    );
    Ok((
        StatusCode::OK,
        Json(MutationResponse {
            data: outcome.value.into(),
            invalidate: outcome.invalidate,
        }),
    ))
}

/// Handler for DELETE /shifts/:id.
async fn delete_shift(
    State(state): State<AppState>,
    principal: Principal,
    Path(shift_id): Path<String>,
) -> ApiResult<MutationResponse<Shift>> {
    let correlation_id = Uuid::new_v4();
    check(correlation_id, &principal, Action::ManageShifts)?;

    let outcome = state
        .store()
        .delete_shift(&shift_id)
        .map_err(|err| failed(correlation_id, "delete_shift", err))?;

    info!(correlation_id = %correlation_id, shift_id = %shift_id, "Shift deleted");
    Ok((StatusCode::OK, Json(outcome.into())))
}

/// Handler for PUT /employees/:id.
async fn register_employee(
    State(state): State<AppState>,
    principal: Principal,
    Path(employee_id): Path<String>,
    payload: Result<Json<RegisterEmployeeRequest>, JsonRejection>,
) -> Result<StatusCode, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    check(correlation_id, &principal, Action::ManageSchedules)?;
    let Json(request) = payload.map_err(|rejection| json_rejection(correlation_id, rejection))?;

    state
        .store()
        .register_employee(employee_id, request.name)
        .map_err(|err| failed(correlation_id, "register_employee", err))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /payroll.
async fn payroll(
    State(state): State<AppState>,
    principal: Principal,
    query: Result<Query<PayrollQuery>, QueryRejection>,
) -> ApiResult<PayrollSummary> {
    let correlation_id = Uuid::new_v4();
    check(correlation_id, &principal, Action::ViewPayroll)?;
    let Query(query) = query.map_err(|rejection| query_rejection(correlation_id, rejection))?;

    let period: PayPeriod = query.into();
    let started = Instant::now();
    let summary = state
        .store()
        .payroll_summary(&period)
        .map_err(|err| failed(correlation_id, "payroll", err))?;

    info!(
        correlation_id = %correlation_id,
        start_date = %period.start_date,
        end_date = %period.end_date,
        employees = summary.entries.len(),
        total_hours = %summary.total_hours,
        warnings = summary.warnings.len(),
        duration_us = started.elapsed().as_micros(),
        "Payroll summary generated"
    );
    Ok((StatusCode::OK, Json(summary)))
}
