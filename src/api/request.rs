//! Request types for the Congestion Tax Engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::VehicleType;

/// Request body for the `/calculate` endpoint.
///
/// Contains the vehicle type and the toll passage timestamps to charge.
/// Timestamps use the `YYYY-MM-DD HH:mm:ss` format and may arrive in any
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The type of the vehicle.
    pub vehicle_type: VehicleType,
    /// The toll passage timestamps.
    pub dates: Vec<String>,
}
