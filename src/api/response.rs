//! Response types for the Congestion Tax Engine API.
//!
//! This module defines the success payload, the error response structures,
//! and the error mapping for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::VehicleType;

/// The currency symbol used for the formatted total.
const CURRENCY_SYMBOL: &str = "kr";

/// Successful response body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeResponse {
    /// The vehicle type the charge was calculated for.
    pub vehicle_type: VehicleType,
    /// The total congestion charge.
    pub total_charge: Decimal,
    /// The total formatted for display (e.g. "kr 60.00").
    pub formatted: String,
}

impl ChargeResponse {
    /// Creates a response for a calculated total.
    pub fn new(vehicle_type: VehicleType, total_charge: Decimal) -> Self {
        Self {
            vehicle_type,
            total_charge,
            formatted: format!("{} {:.2}", CURRENCY_SYMBOL, total_charge),
        }
    }
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

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::TimestampParse { value, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_TIMESTAMP",
                    format!("Invalid passage timestamp '{}'", value),
                    message,
                ),
            },
            EngineError::SegmentNotFound { time } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CHARGE_TABLE_ERROR",
                    format!("No charge segment matches time of day {}", time),
                    "The configured charge table does not cover the full day",
                ),
            },
        }
    }
}
