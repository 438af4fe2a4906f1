//! Request types for the shift engine API.
//!
//! This module defines the JSON bodies and query strings the endpoints
//! accept, and the extractor that reads the caller's identity from headers.

use axum::{extract::FromRequestParts, http::StatusCode, http::request::Parts};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{PayPeriod, Principal, Role};

use super::response::{ApiError, ApiErrorResponse};

/// Header carrying the authenticated user's ID.
pub const PRINCIPAL_ID_HEADER: &str = "x-principal-id";

/// Header carrying the authenticated user's role.
pub const PRINCIPAL_ROLE_HEADER: &str = "x-principal-role";

/// Body for `POST /schedules`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScheduleRequest {
    /// First day of the week to schedule.
    pub week_start_date: NaiveDate,
}

/// Query for `POST /schedules/next-week`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NextWeekQuery {
    /// Reference date; defaults to the current UTC date.
    pub today: Option<NaiveDate>,
}

/// Body for `PUT /shifts/:id/hours`.
///
/// A `null` or absent `actual_hours` resets the shift to its scheduled hours.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHoursRequest {
    /// The override, in decimal hours.
    #[serde(default)]
    pub actual_hours: Option<Decimal>,
}

/// Body for `PUT /employees/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterEmployeeRequest {
    /// Name shown on schedules and payroll.
    pub name: String,
}

/// Query for `GET /payroll`.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollQuery {
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl From<PayrollQuery> for PayPeriod {
    fn from(query: PayrollQuery) -> Self {
        PayPeriod::new(query.start_date, query.end_date)
    }
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Result<&'a str, ApiErrorResponse> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| unauthenticated(format!("missing or unreadable {} header", name)))
}

fn unauthenticated(message: String) -> ApiErrorResponse {
    ApiErrorResponse::new(StatusCode::UNAUTHORIZED, ApiError::unauthenticated(message))
}

/// Builds the [`Principal`] from the identity headers set by the
/// authenticating gateway.
#[axum::async_trait]
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = header_value(parts, PRINCIPAL_ID_HEADER)?;
        let role: Role = header_value(parts, PRINCIPAL_ROLE_HEADER)?
            .parse()
            .map_err(unauthenticated)?;

        Ok(Principal::new(id, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use std::str::FromStr;

    async fn extract(headers: &[(&str, &str)]) -> Result<Principal, ApiErrorResponse> {
        let mut builder = Request::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        Principal::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_extracts_principal() {
        let principal = extract(&[("X-Principal-Id", "user_1"), ("X-Principal-Role", "Manager")])
            .await
            .unwrap();
        assert_eq!(principal, Principal::new("user_1", Role::Manager));
    }

    #[tokio::test]
    async fn test_missing_id_is_unauthenticated() {
        let error = extract(&[("X-Principal-Role", "admin")]).await.unwrap_err();
        assert_eq!(error.status, StatusCode::UNAUTHORIZED);
        assert_eq!(error.error.code, "UNAUTHENTICATED");
    }

    #[tokio::test]
    async fn test_unknown_role_is_unauthenticated() {
        let error = extract(&[("X-Principal-Id", "user_1"), ("X-Principal-Role", "owner")])
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::UNAUTHORIZED);
        assert!(error.error.message.contains("owner"));
    }

    #[test]
    fn test_update_hours_null_and_absent_reset() {
        let null: UpdateHoursRequest = serde_json::from_str(r#"{"actual_hours": null}"#).unwrap();
        let absent: UpdateHoursRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(null.actual_hours, None);
        assert_eq!(absent.actual_hours, None);
    }

    #[test]
    fn test_update_hours_accepts_number_or_string() {
        let number: UpdateHoursRequest = serde_json::from_str(r#"{"actual_hours": 7.5}"#).unwrap();
        let string: UpdateHoursRequest =
            serde_json::from_str(r#"{"actual_hours": "7.5"}"#).unwrap();
        assert_eq!(number.actual_hours, Some(Decimal::from_str("7.5").unwrap()));
        assert_eq!(string.actual_hours, number.actual_hours);
    }

    #[test]
    fn test_payroll_query_into_period() {
        let query = PayrollQuery {
            start_date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 25).unwrap(),
        };
        let period: PayPeriod = query.into();
        assert_eq!(period.days(), 14);
    }
}
