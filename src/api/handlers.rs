//! HTTP request handlers for the Congestion Tax Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_charge;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, ChargeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a vehicle type and a list of passage timestamps and returns
/// the calculated congestion charge.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Perform the calculation
    let start_time = Instant::now();
    let config = state.config().config();
    match calculate_charge(config, request.vehicle_type, &request.dates) {
        Ok(total) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                vehicle_type = %request.vehicle_type,
                passages_count = request.dates.len(),
                total_charge = %total,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ChargeResponse::new(request.vehicle_type, total)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
