//! Toll-free date and vehicle exemption checks.
//!
//! This module determines whether a passage date is toll-free (weekday,
//! month, explicit holiday, or holiday eve) and whether a vehicle type is
//! exempt from the tax.

use chrono::{Datelike, Duration, NaiveDateTime};

use crate::config::TollConfig;
use crate::models::VehicleType;

/// Canonical lowercase weekday names, indexed from Monday.
const WEEKDAY_NAMES: [(&str, &str); 7] = [
    ("mon", "monday"),
    ("tue", "tuesday"),
    ("wed", "wednesday"),
    ("thu", "thursday"),
    ("fri", "friday"),
    ("sat", "saturday"),
    ("sun", "sunday"),
];

/// Canonical lowercase month names, indexed from January.
const MONTH_NAMES: [(&str, &str); 12] = [
    ("jan", "january"),
    ("feb", "february"),
    ("mar", "march"),
    ("apr", "april"),
    ("may", "may"),
    ("jun", "june"),
    ("jul", "july"),
    ("aug", "august"),
    ("sep", "september"),
    ("oct", "october"),
    ("nov", "november"),
    ("dec", "december"),
];

/// Determines whether no tax is charged on a given date.
///
/// A date is toll-free when any of the following holds, checked in order
/// with a short-circuit on the first match:
///
/// 1. its weekday is in the toll-free weekday set,
/// 2. its month is in the toll-free month set,
/// 3. it exactly matches a configured public holiday,
/// 4. it falls in the inclusive window of `public_holiday_eve` days up to
///    and including a public holiday.
///
/// All checks are at day granularity: the time-of-day component is ignored.
/// Configured names match case-insensitively against both abbreviated and
/// full weekday/month spellings.
///
/// # Example
///
/// ```
/// use congestion_engine::calculation::is_toll_free_date;
/// use congestion_engine::config::{ChargesConfig, RulesConfig, TollConfig};
/// use chrono::NaiveDateTime;
///
/// let rules: RulesConfig = serde_yaml::from_str(r#"
/// max_daily_charge: 60
/// toll_free_days:
///   dow: [sat, sun]
///   months: [jul]
///   public_holidays: []
///   public_holiday_eve: 1
/// toll_free_vehicles: []
/// single_charge: {time_threshold: 60, type: interval}
/// "#).unwrap();
/// let config = TollConfig::new(ChargesConfig { segments: vec![] }, rules);
///
/// // 2019-04-06 is a Saturday
/// let saturday = NaiveDateTime::parse_from_str("2019-04-06 12:18:53", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert!(is_toll_free_date(&config, saturday));
/// ```
pub fn is_toll_free_date(config: &TollConfig, at: NaiveDateTime) -> bool {
    let date = at.date();

    let (dow_short, dow_full) = WEEKDAY_NAMES[date.weekday().num_days_from_monday() as usize];
    if config.toll_free_dow().contains(dow_short) || config.toll_free_dow().contains(dow_full) {
        return true;
    }

    let (month_short, month_full) = MONTH_NAMES[date.month0() as usize];
    if config.toll_free_months().contains(month_short)
        || config.toll_free_months().contains(month_full)
    {
        return true;
    }

    if config.public_holidays().iter().any(|h| h.date == date) {
        return true;
    }

    // The eve window is inclusive on both ends, so the holiday itself
    // also counts when the window length is non-negative.
    let eve_days = config.holiday_eve_days();
    config.public_holidays().iter().any(|h| {
        let window_start = h.date - Duration::days(eve_days);
        date >= window_start && date <= h.date
    })
}

/// Determines whether a vehicle type is exempt from the tax.
pub fn is_toll_free_vehicle(config: &TollConfig, vehicle: VehicleType) -> bool {
    config.toll_free_vehicles().contains(&vehicle)
}
