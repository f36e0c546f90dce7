//! Time-of-day pricing functionality.
//!
//! This module provides the lookup of a congestion charge by time of day
//! against the configured segment table.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

use crate::config::TollConfig;
use crate::error::{EngineError, EngineResult};

const SECONDS_PER_DAY: i64 = 86_400;

/// Looks up the congestion charge for a time of day.
///
/// Segments are matched in table order and treated as closed on both ends.
/// A segment whose end is earlier than its start wraps past midnight
/// (e.g. 18:30:00 to 05:59:59): its end is shifted forward by 24 hours, and
/// so is the query time when the query falls before the segment start.
///
/// # Arguments
///
/// * `config` - The congestion tax configuration holding the segment table
/// * `time` - The time of day of the passage
///
/// # Returns
///
/// The price of the first matching segment. The charge table is expected to
/// cover the whole day; a time that matches no segment returns
/// [`EngineError::SegmentNotFound`] since it indicates broken configuration.
///
/// # Example
///
/// ```
/// use congestion_engine::calculation::charge_at;
/// use congestion_engine::config::{ChargesConfig, TollConfig};
/// # use congestion_engine::config::{RulesConfig, SingleCharge, TollFreeDays};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// # let rules = RulesConfig {
/// #     max_daily_charge: Decimal::from(60),
/// #     toll_free_days: TollFreeDays {
/// #         description: None,
/// #         dow: vec![],
/// #         months: vec![],
/// #         public_holidays: vec![],
/// #         public_holiday_eve: 0,
/// #     },
/// #     toll_free_vehicles: vec![],
/// #     single_charge: SingleCharge { time_threshold: 60, kind: "interval".to_string() },
/// # };
/// let charges: ChargesConfig = serde_yaml::from_str(
///     "segments:\n  - {id: rush, start: \"07:00:00\", end: \"07:59:59\", price: 18}\n",
/// ).unwrap();
/// let config = TollConfig::new(charges, rules);
///
/// let price = charge_at(&config, NaiveTime::from_hms_opt(7, 30, 0).unwrap()).unwrap();
/// assert_eq!(price, Decimal::from(18));
/// ```
pub fn charge_at(config: &TollConfig, time: NaiveTime) -> EngineResult<Decimal> {
    let query = i64::from(time.num_seconds_from_midnight());

    for segment in config.segments() {
        let start = i64::from(segment.start.num_seconds_from_midnight());
        let mut end = i64::from(segment.end.num_seconds_from_midnight());
        let mut candidate = query;

        // A wrapping segment spans midnight: shift its end into the next
        // day, and the query too when the query sits after midnight.
        if end < start {
            end += SECONDS_PER_DAY;
            if candidate < start {
                candidate += SECONDS_PER_DAY;
            }
        }

        if candidate >= start && candidate <= end {
            return Ok(segment.price);
        }
    }

    Err(EngineError::SegmentNotFound { time })
}
