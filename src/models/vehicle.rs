//! Vehicle type model.
//!
//! This module defines the closed set of vehicle types recognised by the
//! congestion tax scheme.

use serde::{Deserialize, Serialize};

/// The type of vehicle passing a toll station.
///
/// This is a closed enumeration: any value outside it is rejected when a
/// request is deserialized, so the calculation never sees an unknown type.
///
/// # Example
///
/// ```
/// use congestion_engine::models::VehicleType;
///
/// let vehicle: VehicleType = serde_json::from_str("\"car\"").unwrap();
/// assert_eq!(vehicle, VehicleType::Car);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    /// Emergency service vehicles.
    Emergency,
    /// Buses in public transport service.
    Bus,
    /// Diplomat-registered vehicles.
    Diplomat,
    /// Motorcycles.
    Motorcycle,
    /// Military vehicles.
    Military,
    /// Foreign-registered vehicles.
    Foreign,
    /// Ordinary passenger cars.
    Car,
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            VehicleType::Emergency => "emergency",
            VehicleType::Bus => "bus",
            VehicleType::Diplomat => "diplomat",
            VehicleType::Motorcycle => "motorcycle",
            VehicleType::Military => "military",
            VehicleType::Foreign => "foreign",
            VehicleType::Car => "car",
        };
        write!(f, "{}", name)
    }
}
