//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for the payroll lifecycle
//! endpoints and the six report endpoints. Each handler authorizes the
//! caller exactly once at entry, before touching the store.

use std::future::Future;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::access::{Identity, Operation, authorize};
use crate::error::{EngineError, EngineResult};

use super::request::{FinalizeRequest, ProcessRequest, ReportQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/process", post(process_handler))
        .route("/payroll/finalize", post(finalize_handler))
        .route("/reports/rmp", get(rmp_report_handler))
        .route("/reports/production", get(production_report_handler))
        .route("/reports/attendance", get(attendance_report_handler))
        .route("/reports/payroll", get(payroll_report_handler))
        .route("/reports/summary", get(summary_report_handler))
        .route("/reports/variance", get(variance_report_handler))
        .with_state(state)
}

/// Reads the caller's identity from the `x-role` and `x-user-id` headers.
///
/// Token verification happens upstream; by the time a request reaches this
/// engine the headers carry the already-authenticated claims.
fn identity_from_headers(headers: &HeaderMap) -> EngineResult<Identity> {
    let role = headers
        .get("x-role")
        .and_then(|v| v.to_str().ok())
        .ok_or(EngineError::Unauthorized {
            message: "missing x-role header".to_string(),
        })?
        .parse()?;
    let user_id = headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    Ok(Identity { user_id, role })
}

fn json_ok<T: Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn json_error(error: EngineError) -> Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for the POST /payroll/process endpoint.
async fn process_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let identity = match identity_from_headers(&headers) {
        Ok(identity) => identity,
        Err(err) => return json_error(err),
    };
    if let Err(err) = authorize(&identity, Operation::ProcessPayroll) {
        warn!(correlation_id = %correlation_id, role = %identity.role, "Process rejected");
        return json_error(err);
    }

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    info!(
        correlation_id = %correlation_id,
        pay_period_id = request.pay_period_id,
        user_id = identity.user_id,
        "Processing payroll"
    );
    let start_time = Instant::now();
    match state.processor().process(request.pay_period_id).await {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                pay_period_id = request.pay_period_id,
                employees = outcome.employees.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Payroll processed"
            );
            json_ok(&outcome)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Payroll processing failed");
            json_error(err)
        }
    }
}

/// Handler for the POST /payroll/finalize endpoint.
async fn finalize_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<FinalizeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let identity = match identity_from_headers(&headers) {
        Ok(identity) => identity,
        Err(err) => return json_error(err),
    };
    if let Err(err) = authorize(&identity, Operation::FinalizePayroll) {
        warn!(correlation_id = %correlation_id, role = %identity.role, "Finalize rejected");
        return json_error(err);
    }

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    info!(
        correlation_id = %correlation_id,
        pay_period_id = request.pay_period_id,
        user_id = identity.user_id,
        "Finalizing payroll"
    );
    match state.processor().finalize(request.pay_period_id).await {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                pay_period_id = request.pay_period_id,
                records_finalized = outcome.records_finalized,
                "Payroll finalized"
            );
            json_ok(&outcome)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Finalization failed");
            json_error(err)
        }
    }
}

/// Runs one report computation under the shared entry discipline:
/// authorize, validate the range, then bound the read with the configured
/// timeout. A timeout surfaces as a retryable `Unexpected` error.
async fn run_report<T, F, Fut>(
    state: &AppState,
    headers: &HeaderMap,
    query: Result<Query<ReportQuery>, QueryRejection>,
    report_name: &str,
    compute: F,
) -> Response
where
    T: Serialize,
    F: FnOnce(crate::store::DateRange) -> Fut,
    Fut: Future<Output = EngineResult<T>>,
{
    let correlation_id = Uuid::new_v4();

    let identity = match identity_from_headers(headers) {
        Ok(identity) => identity,
        Err(err) => return json_error(err),
    };
    if let Err(err) = authorize(&identity, Operation::ViewReports) {
        warn!(
            correlation_id = %correlation_id,
            role = %identity.role,
            report = report_name,
            "Report rejected"
        );
        return json_error(err);
    }

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            return json_error(EngineError::validation(rejection.to_string()));
        }
    };
    let range = match query.range() {
        Ok(range) => range,
        Err(err) => return json_error(err),
    };

    info!(
        correlation_id = %correlation_id,
        report = report_name,
        start_date = %range.start(),
        end_date = %range.end(),
        "Computing report"
    );
    let start_time = Instant::now();
    let result = tokio::time::timeout(state.config().query_timeout(), compute(range)).await;
    match result {
        Ok(Ok(report)) => {
            info!(
                correlation_id = %correlation_id,
                report = report_name,
                duration_us = start_time.elapsed().as_micros(),
                "Report computed"
            );
            json_ok(&report)
        }
        Ok(Err(err)) => {
            warn!(correlation_id = %correlation_id, report = report_name, error = %err, "Report failed");
            json_error(err)
        }
        Err(_) => {
            warn!(correlation_id = %correlation_id, report = report_name, "Report timed out");
            json_error(EngineError::unexpected(format!(
                "report '{}' timed out after {}s",
                report_name,
                state.config().query_timeout_secs
            )))
        }
    }
}

/// Handler for the GET /reports/rmp endpoint.
async fn rmp_report_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Response {
    run_report(&state.clone(), &headers, query, "rmp", |range| async move {
        state.reports().rmp_report(range).await
    })
    .await
}

/// Handler for the GET /reports/production endpoint.
async fn production_report_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Response {
    run_report(&state.clone(), &headers, query, "production", |range| async move {
        state.reports().production_report(range).await
    })
    .await
}

/// Handler for the GET /reports/attendance endpoint.
async fn attendance_report_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Response {
    run_report(&state.clone(), &headers, query, "attendance", |range| async move {
        state.reports().attendance_report(range).await
    })
    .await
}

/// Handler for the GET /reports/payroll endpoint.
async fn payroll_report_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Response {
    run_report(&state.clone(), &headers, query, "payroll", |range| async move {
        state.reports().payroll_report(range).await
    })
    .await
}

/// Handler for the GET /reports/summary endpoint.
async fn summary_report_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Response {
    run_report(&state.clone(), &headers, query, "summary", |range| async move {
        state.reports().overall_summary(range).await
    })
    .await
}

/// Handler for the GET /reports/variance endpoint.
async fn variance_report_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> Response {
    run_report(&state.clone(), &headers, query, "variance", |range| async move {
        state.reports().variance_report(range).await
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::models::{Employee, EmploymentType, PayPeriod, PeriodStatus};
    use crate::store::MemoryStore;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn seeded_state() -> AppState {
        let store = Arc::new(MemoryStore::new());
        store
            .add_pay_period(PayPeriod {
                id: 1,
                name: "Week 1 Jan 2026".to_string(),
                start_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 1, 11).unwrap(),
                status: PeriodStatus::Draft,
            })
            .await;
        store
            .add_employee(Employee {
                id: 1,
                code: "EMP-001".to_string(),
                name: "Siti Rahma".to_string(),
                employment_type: EmploymentType::Daily,
                daily_rate: Some(Decimal::from(80_000)),
                is_active: true,
            })
            .await;
        AppState::new(store, EngineConfig::default())
    }

    fn process_request(role: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/payroll/process")
            .header("Content-Type", "application/json");
        if let Some(role) = role {
            builder = builder.header("x-role", role).header("x-user-id", "1");
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_process_without_identity_returns_401() {
        let router = create_router(seeded_state().await);
        let response = router
            .oneshot(process_request(None, r#"{"pay_period_id": 1}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_process_with_wrong_role_returns_403() {
        let router = create_router(seeded_state().await);
        let response = router
            .oneshot(process_request(Some("manager"), r#"{"pay_period_id": 1}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_process_with_hr_role_returns_200() {
        let router = create_router(seeded_state().await);
        let response = router
            .oneshot(process_request(Some("hr_staff"), r#"{"pay_period_id": 1}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_process_malformed_json_returns_400() {
        let router = create_router(seeded_state().await);
        let response = router
            .oneshot(process_request(Some("hr_staff"), "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_report_with_inverted_range_returns_400() {
        let router = create_router(seeded_state().await);
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/reports/summary?start_date=2026-02-01&end_date=2026-01-01")
                    .header("x-role", "manager")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_report_with_unknown_role_returns_401() {
        let router = create_router(seeded_state().await);
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/reports/variance?start_date=2026-01-01&end_date=2026-01-31")
                    .header("x-role", "superuser")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
