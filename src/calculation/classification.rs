//! Passage classification functionality.
//!
//! This module parses raw passage timestamps and annotates each with its
//! raw toll fee, producing the chronologically sorted event list the
//! clustering stage requires.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::config::TollConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::PassageEvent;

use super::exemptions::is_toll_free_date;
use super::pricing::charge_at;

/// The timestamp format accepted for passage events.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses and prices a list of passage timestamps.
///
/// Each timestamp is parsed from the `YYYY-MM-DD HH:mm:ss` format; a
/// malformed string propagates as [`EngineError::TimestampParse`]. The fee
/// is zero when the passage falls on a toll-free date, otherwise the
/// time-of-day price from the charge table.
///
/// The returned events are sorted ascending by timestamp regardless of
/// input order. Downstream clustering relies on this.
///
/// # Arguments
///
/// * `config` - The congestion tax configuration
/// * `dates` - The passage timestamps, in any order
pub fn classify_passages(
    config: &TollConfig,
    dates: &[String],
) -> EngineResult<Vec<PassageEvent>> {
    let mut events = Vec::with_capacity(dates.len());

    for value in dates {
        let timestamp = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|e| {
            EngineError::TimestampParse {
                value: value.clone(),
                message: e.to_string(),
            }
        })?;

        let toll_fee = if is_toll_free_date(config, timestamp) {
            Decimal::ZERO
        } else {
            charge_at(config, timestamp.time())?
        };

        events.push(PassageEvent { timestamp, toll_fee });
    }

    events.sort_by_key(|event| event.timestamp);
    Ok(events)
}
