//! HTTP API module for the shift engine.
//!
//! This module provides the REST endpoints for managing weekly schedules,
//! creating shifts with overlap checks, overriding hours and reading the
//! payroll summary. Callers identify themselves with the
//! `X-Principal-Id` and `X-Principal-Role` headers.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreateScheduleRequest, PRINCIPAL_ID_HEADER, PRINCIPAL_ROLE_HEADER, PayrollQuery,
    UpdateHoursRequest,
};
pub use response::{ApiError, ApiErrorResponse, MutationResponse, ShiftView};
pub use state::AppState;
