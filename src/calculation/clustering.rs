//! Interval clustering functionality.
//!
//! This module groups chronologically sorted passage events into clusters
//! for the single charge rule: consecutive passages on the same calendar
//! day within the configured window of the cluster's first passage.

use crate::models::PassageEvent;

/// Partitions sorted passage events into single-charge clusters.
///
/// Greedy single pass: the first unassigned event anchors a new cluster,
/// and each subsequent event joins the current cluster iff it falls on the
/// same calendar day as the anchor AND no more than `threshold_minutes`
/// after the anchor's timestamp. Otherwise it starts a new cluster and
/// becomes the new anchor.
///
/// Elapsed time is measured from the anchor, not the previous event, so
/// clusters never slide: a cluster spans at most `threshold_minutes` from
/// its anchor and never crosses a calendar-day boundary.
///
/// The elapsed comparison is done in seconds, so a gap of 60 minutes and
/// 59 seconds does not join a 60-minute window.
///
/// # Arguments
///
/// * `events` - Passage events sorted ascending by timestamp
/// * `threshold_minutes` - The single charge window in minutes
pub fn cluster_by_interval(
    events: Vec<PassageEvent>,
    threshold_minutes: i64,
) -> Vec<Vec<PassageEvent>> {
    let mut clusters: Vec<Vec<PassageEvent>> = Vec::new();

    for event in events {
        match clusters.last_mut() {
            Some(cluster) if joins_cluster(cluster, &event, threshold_minutes) => {
                cluster.push(event);
            }
            _ => clusters.push(vec![event]),
        }
    }

    clusters
}

/// Checks whether an event belongs to the cluster anchored at its first event.
fn joins_cluster(cluster: &[PassageEvent], event: &PassageEvent, threshold_minutes: i64) -> bool {
    let Some(anchor) = cluster.first() else {
        return false;
    };

    anchor.timestamp.date() == event.timestamp.date()
        && (event.timestamp - anchor.timestamp).num_seconds() <= threshold_minutes * 60
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
    fn test_events_within_window_share_a_cluster() {
        let clusters = cluster_by_interval(
            vec![
                event("2010-08-25 15:00:28", 13),
                event("2010-08-25 15:35:08", 18),
            ],
            60,
        );

        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].len(), 2);
    }

    #[test]
    fn test_event_past_window_starts_a_new_cluster() {
        let clusters = cluster_by_interval(
            vec![
                event("2010-08-25 06:30:28", 13),
                event("2010-08-25 08:00:28", 13),
            ],
            60,
        );

        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn test_membership_is_measured_against_the_anchor() {
        // 40 minutes apart each: the third event is within 60 minutes of
        // the second but 80 minutes past the anchor, so it opens a new
        // cluster and anchors it.
        let clusters = cluster_by_interval(
            vec![
                event("2013-02-08 10:00:00", 8),
                event("2013-02-08 10:40:00", 8),
                event("2013-02-08 11:20:00", 8),
            ],
            60,
        );

        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].len(), 2);
        assert_eq!(clusters[1].len(), 1);
        assert_eq!(clusters[1][0], event("2013-02-08 11:20:00", 8));
    }

    #[test]
    fn test_gap_of_exactly_the_threshold_joins() {
        let clusters = cluster_by_interval(
            vec![
                event("2013-02-08 10:00:00", 8),
                event("2013-02-08 11:00:00", 8),
            ],
            60,
        );

        assert_eq!(clusters.len(), 1);
    }

    #[test]
    fn test_gap_seconds_past_the_threshold_splits() {
        let clusters = cluster_by_interval(
            vec![
                event("2013-02-08 10:00:00", 8),
                event("2013-02-08 11:00:59", 8),
            ],
            60,
        );

        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn test_cluster_never_crosses_midnight() {
        // Ten minutes apart, but on different calendar days.
        let clusters = cluster_by_interval(
            vec![
                event("2013-02-08 23:55:00", 0),
                event("2013-02-09 00:05:00", 0),
            ],
            60,
        );

        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn test_no_cluster_exceeds_threshold_from_its_anchor() {
        let events: Vec<PassageEvent> = (0..12)
            .map(|i| {
                let minute = i * 25;
                event(
                    &format!("2013-02-08 {:02}:{:02}:00", 8 + minute / 60, minute % 60),
                    8,
                )
            })
            .collect();

        let clusters = cluster_by_interval(events, 60);
        for cluster in &clusters {
            let anchor = cluster.first().unwrap();
            let last = cluster.last().unwrap();
            assert!((last.timestamp - anchor.timestamp).num_seconds() <= 60 * 60);
            assert_eq!(anchor.timestamp.date(), last.timestamp.date());
        }
    }

    #[test]
    fn test_empty_input_yields_no_clusters() {
        let clusters = cluster_by_interval(vec![], 60);
        assert!(clusters.is_empty());
    }
}
