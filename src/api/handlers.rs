//! HTTP request handlers for the billing API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::store::AttendanceOverlay;

use super::request::{CalculationRequest, ForecastRequest, MonthCalculationRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/calculate/month", post(calculate_month_handler))
        .route("/calendar/:year/:month", get(calendar_handler))
        .route("/holidays/:year", get(holidays_handler))
        .route("/forecast", post(forecast_handler))
        .with_state(state)
}

fn json_ok<T: Serialize>(value: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(value),
    )
        .into_response()
}

fn engine_failure(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Unwraps a JSON body, mapping rejections to API errors.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    let rejection = match payload {
        Ok(Json(req)) => return Ok(req),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    Err(ApiErrorResponse::bad_request(error))
}

fn parse_path<T>(path: Result<Path<T>, PathRejection>, correlation_id: Uuid) -> Result<T, ApiErrorResponse> {
    path.map(|Path(value)| value).map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Invalid path parameters"
        );
        ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
    })
}

/// Handler for POST /calculate endpoint.
///
/// Bills one child over an inclusive period. Attendance supplied in the body
/// is merged over the stored records for this call only.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };

    let config = state.config();
    let overlay = AttendanceOverlay::new(config.store(), request.attendance_records());
    let service = config.service().with_attendance(&overlay);

    let start_time = Instant::now();
    match service.calculate_for_child(&request.child_id, request.period_from, request.period_to) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                child_id = %result.child_id,
                period_from = %result.period_from,
                period_to = %result.period_to,
                total = %result.total,
                working_days = result.working_days_in_period,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_ok(result)
        }
        Err(err) => engine_failure(correlation_id, err),
    }
}

/// Handler for POST /calculate/month endpoint.
async fn calculate_month_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthCalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly calculation request");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };

    let config = state.config();
    let overlay = AttendanceOverlay::new(config.store(), request.attendance_records());
    let service = config.service().with_attendance(&overlay);

    let start_time = Instant::now();
    match service.calculate_month(&request.child_id, request.year, request.month) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                child_id = %result.child_id,
                year = request.year,
                month = request.month,
                total = %result.total,
                duration_us = start_time.elapsed().as_micros(),
                "Monthly calculation completed successfully"
            );
            json_ok(result)
        }
        Err(err) => engine_failure(correlation_id, err),
    }
}

/// Handler for GET /calendar/:year/:month endpoint.
async fn calendar_handler(
    State(state): State<AppState>,
    path: Result<Path<(i32, u32)>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let (year, month) = match parse_path(path, correlation_id) {
        Ok(params) => params,
        Err(rejection) => return rejection.into_response(),
    };
    info!(correlation_id = %correlation_id, year, month, "Building month calendar");

    match state.config().service().month_calendar(year, month) {
        Ok(days) => json_ok(days),
        Err(err) => engine_failure(correlation_id, err),
    }
}

/// Handler for GET /holidays/:year endpoint.
async fn holidays_handler(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let year = match parse_path(path, correlation_id) {
        Ok(year) => year,
        Err(rejection) => return rejection.into_response(),
    };
    info!(correlation_id = %correlation_id, year, "Building holiday report");

    match state.config().service().holiday_report(year) {
        Ok(report) => json_ok(report),
        Err(err) => engine_failure(correlation_id, err),
    }
}

/// Handler for POST /forecast endpoint.
async fn forecast_handler(
    State(state): State<AppState>,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing forecast request");

    let request = match parse_json(payload, correlation_id) {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };

    let config = state.config();
    let overlay = AttendanceOverlay::new(config.store(), request.attendance);
    let service = config.service().with_attendance(&overlay);

    match service.forecast_group_revenue(&request.group_id, request.year, request.month) {
        Ok(forecast) => {
            info!(
                correlation_id = %correlation_id,
                group_id = %forecast.group_id,
                children = forecast.children,
                forecast_total = %forecast.forecast_total,
                "Forecast completed successfully"
            );
            json_ok(forecast)
        }
        Err(err) => engine_failure(correlation_id, err),
    }
}
