//! Charge calculation orchestration.
//!
//! This module wires the pipeline stages together: exemption checks,
//! passage classification, interval clustering, single charge reduction,
//! and daily aggregation.

use rust_decimal::Decimal;

use crate::config::TollConfig;
use crate::error::EngineResult;
use crate::models::{ChargeCluster, VehicleType};

use super::classification::classify_passages;
use super::clustering::cluster_by_interval;
use super::daily_total::total_with_daily_cap;
use super::exemptions::is_toll_free_vehicle;
use super::single_charge::reduce_cluster;

/// Calculates the total congestion tax for a vehicle's passages.
///
/// An exempt vehicle type returns zero immediately with no further
/// processing. Otherwise the passages are parsed and priced, clustered
/// into single-charge windows, reduced to one charge each, and summed per
/// calendar day with the daily maximum applied. An empty passage list
/// yields zero.
///
/// # Arguments
///
/// * `config` - The congestion tax configuration
/// * `vehicle_type` - The type of the vehicle
/// * `dates` - The passage timestamps (`YYYY-MM-DD HH:mm:ss`), in any order
///
/// # Errors
///
/// Returns [`EngineError::TimestampParse`](crate::error::EngineError) for a
/// malformed timestamp and
/// [`EngineError::SegmentNotFound`](crate::error::EngineError) when the
/// charge table fails to cover a passage's time of day.
pub fn calculate_charge(
    config: &TollConfig,
    vehicle_type: VehicleType,
    dates: &[String],
) -> EngineResult<Decimal> {
    if is_toll_free_vehicle(config, vehicle_type) {
        return Ok(Decimal::ZERO);
    }

    let events = classify_passages(config, dates)?;
    let clusters = cluster_by_interval(events, config.time_threshold_minutes());
    let charged: Vec<ChargeCluster> = clusters
        .iter()
        .filter_map(|cluster| reduce_cluster(cluster))
        .collect();

    Ok(total_with_daily_cap(&charged, config.max_daily_charge()))
}
