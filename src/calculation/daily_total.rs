//! Daily aggregation functionality.
//!
//! This module groups single-charge clusters by calendar day, applies the
//! maximum daily charge to each day, and sums the grand total.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::ChargeCluster;

/// Sums cluster charges with the per-day maximum applied.
///
/// Clusters are grouped by the calendar date of their start timestamp into
/// an ordered mapping preserving first-seen day order, each day's sum is
/// clamped to `max_daily_charge`, and the clamped daily totals are summed.
/// Days are independent: the cap is per-day, never global.
///
/// # Arguments
///
/// * `clusters` - The single-charge clusters
/// * `max_daily_charge` - The maximum charge per calendar day
pub fn total_with_daily_cap(clusters: &[ChargeCluster], max_daily_charge: Decimal) -> Decimal {
    let mut daily_totals: Vec<(NaiveDate, Decimal)> = Vec::new();

    for cluster in clusters {
        let day = cluster.start.date();
        match daily_totals.iter_mut().find(|(d, _)| *d == day) {
            Some((_, total)) => *total += cluster.charge,
            None => daily_totals.push((day, cluster.charge)),
        }
    }

    daily_totals
        .into_iter()
        .map(|(_, total)| total.min(max_daily_charge))
        .sum()
}
