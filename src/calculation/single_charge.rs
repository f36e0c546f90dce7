//! Single charge reduction functionality.
//!
//! This module reduces each passage cluster to the one charge the single
//! charge rule allows: the highest fee within the cluster.

use crate::models::{ChargeCluster, PassageEvent};

/// Reduces a cluster of passages to a single charge.
///
/// The charge is the maximum toll fee within the cluster; ties are
/// irrelevant since tied fees are equal values. Start and end are the
/// timestamps of the cluster's first and last events, which are in
/// chronological order because the clusterer consumes sorted input.
///
/// Returns `None` for an empty cluster; the clusterer never produces one.
pub fn reduce_cluster(cluster: &[PassageEvent]) -> Option<ChargeCluster> {
    let first = cluster.first()?;
    let last = cluster.last()?;
    let charge = cluster.iter().map(|event| event.toll_fee).max()?;

    Some(ChargeCluster {
        start: first.timestamp,
        end: last.timestamp,
        charge,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;

    fn event(s: &str, fee: i64) -> PassageEvent {
        PassageEvent {
            timestamp: NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap(),
            toll_fee: Decimal::from(fee),
        }
    }

    #[test]
    fn test_cluster_is_charged_once_at_the_highest_fee() {
        let cluster = vec![
            event("2010-08-25 15:00:28", 13),
            event("2010-08-25 15:35:08", 18),
        ];

        let charged = reduce_cluster(&cluster).unwrap();
        assert_eq!(charged.charge, Decimal::from(18));
        assert_eq!(charged.start, cluster[0].timestamp);
        assert_eq!(charged.end, cluster[1].timestamp);
    }

    #[test]
    fn test_single_event_cluster() {
        let cluster = vec![event("2013-02-08 06:20:27", 8)];

        let charged = reduce_cluster(&cluster).unwrap();
        assert_eq!(charged.charge, Decimal::from(8));
        assert_eq!(charged.start, charged.end);
    }

    #[test]
    fn test_zero_fee_events_yield_zero_charge() {
        let cluster = vec![
            event("2013-01-14 21:00:00", 0),
            event("2013-01-14 21:30:00", 0),
        ];

        let charged = reduce_cluster(&cluster).unwrap();
        assert_eq!(charged.charge, Decimal::ZERO);
    }

    #[test]
    fn test_empty_cluster_reduces_to_none() {
        assert!(reduce_cluster(&[]).is_none());
    }
}
