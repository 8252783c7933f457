//! HTTP request handlers for the mileage ledger API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::summarize;
use crate::error::TrackerError;

use super::request::SummaryRequest;
use super::response::{
    ApiError, ApiErrorResponse, RateResponse, ScheduleResponse, SummaryResponse, YearlySummary,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/rates/:year", get(schedule_handler))
        .route("/rates/:year/:month", get(rate_handler))
        .route("/summary", post(summary_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: TrackerError) -> Response {
    ApiErrorResponse::from(error).into_response()
}

fn parse_year(raw: &str) -> Result<i32, TrackerError> {
    raw.parse().map_err(|_| TrackerError::InvalidYear {
        year: raw.to_string(),
    })
}

fn parse_month(raw: &str) -> Result<u32, TrackerError> {
    raw.parse()
        .ok()
        .filter(|month| (1..=12).contains(month))
        .ok_or_else(|| TrackerError::InvalidMonth {
            month: raw.to_string(),
        })
}

/// Handler for `GET /rates/{year}`.
async fn schedule_handler(
    State(state): State<AppState>,
    Path(raw_year): Path<String>,
) -> Response {
    let year = match parse_year(&raw_year) {
        Ok(year) => year,
        Err(error) => {
            warn!(year = %raw_year, "Rejected schedule lookup for invalid year");
            return error_response(error);
        }
    };

    match state.rates().schedule_for_year(year) {
        Some(schedule) => json_response(StatusCode::OK, ScheduleResponse::from(schedule)),
        None => {
            warn!(year, "Rate schedule not found");
            error_response(TrackerError::ScheduleNotFound { year })
        }
    }
}

/// Handler for `GET /rates/{year}/{month}`.
///
/// An unknown year or month is not an error: the rate is zero and `known`
/// is false.
async fn rate_handler(
    State(state): State<AppState>,
    Path((raw_year, raw_month)): Path<(String, String)>,
) -> Response {
    // Validate path segments before touching the table
    let parsed = parse_year(&raw_year).and_then(|year| Ok((year, parse_month(&raw_month)?)));
    let (year, month) = match parsed {
        Ok(pair) => pair,
        Err(error) => {
            warn!(year = %raw_year, month = %raw_month, error = %error, "Rejected rate lookup");
            return error_response(error);
        }
    };

    let rate = state.rates().rate_for_month(year, month);
    json_response(
        StatusCode::OK,
        RateResponse {
            year,
            month,
            rate: rate.normalize(),
            known: rate != Decimal::ZERO,
        },
    )
}

/// Handler for `POST /summary`.
///
/// Aggregates the submitted entries into one report per year.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries serde's description of the bad field
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
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    // Fold entries into one report per year
    let start_time = Instant::now();
    let years = summarize(&request.entries, &request.adjustments);
    let response = SummaryResponse {
        years: years
            .values()
            .map(|yearly| YearlySummary::new(yearly, state.rates()))
            .collect(),
    };

    info!(
        correlation_id = %correlation_id,
        entries_count = request.entries.len(),
        adjustments_count = request.adjustments.len(),
        years_count = response.years.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Summary completed successfully"
    );

    json_response(StatusCode::OK, response)
}
