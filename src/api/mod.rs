//! HTTP API module for the Congestion Tax Engine.
//!
//! This module provides the REST API endpoint for calculating the
//! congestion tax for a vehicle's toll passages.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, ChargeResponse};
pub use state::AppState;
