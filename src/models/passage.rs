//! Passage event and charge cluster models.
//!
//! This module defines the transient types that flow through the charge
//! calculation pipeline: a priced toll passage, and a group of passages
//! reduced to a single charge.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single toll station passage annotated with its raw toll fee.
///
/// Created during classification and consumed within one calculation call.
/// The fee is zero when the passage falls on a toll-free date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageEvent {
    /// When the vehicle passed the toll station.
    pub timestamp: NaiveDateTime,
    /// The raw fee for this passage before single-charge aggregation.
    pub toll_fee: Decimal,
}

/// A cluster of passages charged once, at the highest fee in the cluster.
///
/// # Example
///
/// ```
/// use congestion_engine::models::ChargeCluster;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let cluster = ChargeCluster {
///     start: NaiveDateTime::parse_from_str("2010-08-25 15:00:28", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end: NaiveDateTime::parse_from_str("2010-08-25 15:35:08", "%Y-%m-%d %H:%M:%S").unwrap(),
///     charge: Decimal::from(18),
/// };
/// assert_eq!(cluster.charge, Decimal::from(18));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeCluster {
    /// Timestamp of the first passage in the cluster.
    pub start: NaiveDateTime,
    /// Timestamp of the last passage in the cluster.
    pub end: NaiveDateTime,
    /// The single charge for the cluster.
    pub charge: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_passage_event_serialization_round_trip() {
        let event = PassageEvent {
            timestamp: make_datetime("2013-02-08 06:20:27"),
            toll_fee: Decimal::from(8),
        };

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: PassageEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
    }

    #[test]
    fn test_charge_cluster_serialization_round_trip() {
        let cluster = ChargeCluster {
            start: make_datetime("2013-02-08 15:29:00"),
            end: make_datetime("2013-02-08 16:01:00"),
            charge: Decimal::from(18),
        };

        let json = serde_json::to_string(&cluster).unwrap();
        let deserialized: ChargeCluster = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, cluster);
    }
}
