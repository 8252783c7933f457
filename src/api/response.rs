//! Response types for the mileage ledger API.
//!
//! This module defines the report payloads, the error body, and the mapping
//! from [`TrackerError`] to HTTP status codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Month;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::aggregation::{Monthly, Yearly};
use crate::error::TrackerError;
use crate::rates::{RateCutoff, RateTable, YearSchedule};

/// Converts a non-finite figure into `None` so it renders as JSON `null`.
fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Response body for `GET /rates/{year}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// The calendar year.
    pub year: i32,
    /// Whether the schedule defines a rate through December.
    pub complete: bool,
    /// Cutoffs in ascending month order.
    pub cutoffs: Vec<RateCutoff>,
}

impl From<&YearSchedule> for ScheduleResponse {
    fn from(schedule: &YearSchedule) -> Self {
        Self {
            year: schedule.year(),
            complete: schedule.is_complete(),
            cutoffs: schedule
                .cutoffs()
                .iter()
                .map(|c| RateCutoff {
                    through_month: c.through_month,
                    rate: c.rate.normalize(),
                })
                .collect(),
        }
    }
}

/// Response body for `GET /rates/{year}/{month}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateResponse {
    /// The calendar year.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
    /// The per-mile rate, zero when unknown.
    pub rate: Decimal,
    /// False when no rate is on record for the month.
    pub known: bool,
}

/// One month's row in a summary.
///
/// Every figure is `null` when it is not finite: ratios without hours, and
/// any total that overflowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The month number (1-12).
    pub month: u32,
    /// The English month name.
    pub name: String,
    /// Business miles.
    pub mileage: Option<f64>,
    /// Base pay.
    pub pay: Option<f64>,
    /// Other reported pay.
    pub other_pay: Option<f64>,
    /// Cash tips.
    pub cash_tips: Option<f64>,
    /// Hours worked.
    pub hours: Option<f64>,
    /// Base plus other pay.
    pub reported_pay: Option<f64>,
    /// Reported pay plus cash tips.
    pub total_pay: Option<f64>,
    /// Total pay per hour.
    pub hourly: Option<f64>,
    /// The mileage rate used for this month.
    pub mileage_rate: Decimal,
    /// Net pay per hour after the mileage deduction.
    pub net_hourly: Option<f64>,
}

impl MonthlySummary {
    fn new(month: Month, totals: &Monthly, rate: Decimal) -> Self {
        let cost_per_mile = rate.to_f64().unwrap_or(0.0);
        Self {
            month: month.number_from_month(),
            name: month.name().to_string(),
            mileage: finite(totals.mileage),
            pay: finite(totals.pay),
            other_pay: finite(totals.other_pay),
            cash_tips: finite(totals.cash_tips),
            hours: finite(totals.hours),
            reported_pay: finite(totals.reported_pay()),
            total_pay: finite(totals.total_pay()),
            hourly: finite(totals.hourly()),
            mileage_rate: rate.normalize(),
            net_hourly: finite(totals.net_hourly(cost_per_mile)),
        }
    }
}

/// One year's report in a summary.
///
/// Every figure is `null` when it is not finite: ratios without hours or
/// odometer distance, and any total that overflowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlySummary {
    /// The calendar year.
    pub year: i32,
    /// Adjustments included in reported pay.
    pub base_pay_adjustment: Option<f64>,
    /// Monthly reported pay plus adjustments.
    pub reported_pay: Option<f64>,
    /// Cash tips.
    pub cash_tips: Option<f64>,
    /// Reported pay plus cash tips.
    pub total_pay: Option<f64>,
    /// Hours worked.
    pub hours: Option<f64>,
    /// Business miles.
    pub mileage: Option<f64>,
    /// Total pay per hour.
    pub hourly: Option<f64>,
    /// Mileage deduction at each month's rate.
    pub mileage_deduction: Option<f64>,
    /// Total pay less the mileage deduction.
    pub net_pay: Option<f64>,
    /// Net pay per hour.
    pub net_hourly: Option<f64>,
    /// Lowest starting odometer reading.
    pub start_odometer: Option<f64>,
    /// Highest ending odometer reading.
    pub end_odometer: Option<f64>,
    /// Odometer distance, zero without both readings.
    pub total_miles: Option<f64>,
    /// Odometer miles not logged as business.
    pub non_business_miles: Option<f64>,
    /// Business share of odometer miles.
    pub business_mileage_percent: Option<f64>,
    /// Calendar-ordered monthly rows.
    pub months: Vec<MonthlySummary>,
}

impl YearlySummary {
    /// Renders a yearly report, pricing mileage with `rates`.
    pub fn new(yearly: &Yearly, rates: &RateTable) -> Self {
        let months = yearly
            .months()
            .map(|(month, totals)| {
                let rate = rates.rate_for_month(yearly.year, month.number_from_month());
                MonthlySummary::new(month, totals, rate)
            })
            .collect();

        Self {
            year: yearly.year,
            base_pay_adjustment: finite(yearly.base_pay_adjustment),
            reported_pay: finite(yearly.reported_pay()),
            cash_tips: finite(yearly.cash_tips()),
            total_pay: finite(yearly.total_pay()),
            hours: finite(yearly.hours()),
            mileage: finite(yearly.mileage()),
            hourly: finite(yearly.hourly()),
            mileage_deduction: finite(yearly.mileage_deduction(rates)),
            net_pay: finite(yearly.net_pay(rates)),
            net_hourly: finite(yearly.net_hourly(rates)),
            start_odometer: yearly.start_odometer.and_then(finite),
            end_odometer: yearly.end_odometer.and_then(finite),
            total_miles: finite(yearly.total_miles()),
            non_business_miles: finite(yearly.non_business_miles()),
            business_mileage_percent: finite(yearly.business_mileage_percent()),
            months,
        }
    }
}

/// Response body for `POST /summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Reports in ascending year order.
    pub years: Vec<YearlySummary>,
}

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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<TrackerError> for ApiErrorResponse {
    fn from(error: TrackerError) -> Self {
        match error {
            TrackerError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            TrackerError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            TrackerError::InvalidSchedule { year, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    format!("Invalid rate schedule for {}", year),
                    message,
                ),
            },
            TrackerError::ScheduleNotFound { year } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "SCHEDULE_NOT_FOUND",
                    format!("No mileage rate schedule for {}", year),
                    "The rate table has no entry for the requested year",
                ),
            },
            TrackerError::InvalidMonth { month } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_MONTH",
                    format!("Invalid month: {}", month),
                    "Month must be a number between 1 and 12",
                ),
            },
            TrackerError::InvalidYear { year } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_YEAR",
                    format!("Invalid year: {}", year),
                    "Year must be a whole calendar year such as 2022",
                ),
            },
        }
    }
}
