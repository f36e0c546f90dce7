//! Configuration types for congestion tax calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;

use crate::models::VehicleType;

/// A time-of-day segment of the congestion charge table.
///
/// Segments are matched in table order, treated as closed on both ends.
/// A segment whose end is earlier than its start wraps past midnight
/// (e.g. 18:30:00 to 05:59:59).
#[derive(Debug, Clone, Deserialize)]
pub struct TimeSegment {
    /// Identifier for the segment, used in configuration diagnostics.
    pub id: String,
    /// Start of the segment (inclusive).
    pub start: NaiveTime,
    /// End of the segment (inclusive).
    pub end: NaiveTime,
    /// The charge for passages within this segment.
    pub price: Decimal,
}

/// Charge table configuration file structure (`charges.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ChargesConfig {
    /// Ordered list of time-of-day charge segments.
    pub segments: Vec<TimeSegment>,
}

/// A public holiday on which no tax is charged.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday.
    #[serde(default)]
    pub name: Option<String>,
}

/// The days on which no tax is charged.
#[derive(Debug, Clone, Deserialize)]
pub struct TollFreeDays {
    /// Free-text description of the exemption rules.
    #[serde(default)]
    pub description: Option<String>,
    /// Weekday names that are always toll-free (e.g. "sat", "sun").
    pub dow: Vec<String>,
    /// Month names that are entirely toll-free (e.g. "jul").
    pub months: Vec<String>,
    /// Explicit toll-free dates, ordered.
    pub public_holidays: Vec<PublicHoliday>,
    /// Number of days before each public holiday that are also toll-free.
    pub public_holiday_eve: i64,
}

/// Single charge rule configuration.
///
/// A vehicle passing several toll stations within the threshold is only
/// charged once, at the highest fee.
#[derive(Debug, Clone, Deserialize)]
pub struct SingleCharge {
    /// The clustering window in minutes.
    pub time_threshold: i64,
    /// Tag describing the rule variant, carried through from the rules file.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Tax rules configuration file structure (`rules.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    /// The maximum total charge per vehicle and calendar day.
    pub max_daily_charge: Decimal,
    /// Days on which no tax is charged.
    pub toll_free_days: TollFreeDays,
    /// Vehicle types that are exempt from the tax.
    pub toll_free_vehicles: Vec<VehicleType>,
    /// The single charge rule.
    pub single_charge: SingleCharge,
}

/// The complete congestion tax configuration.
///
/// Aggregates the charge table and tax rules, with the name and vehicle
/// lookups normalized once at construction so that per-passage checks are
/// simple set membership tests.
#[derive(Debug, Clone)]
pub struct TollConfig {
    /// The ordered charge segment table.
    segments: Vec<TimeSegment>,
    /// The tax rules as loaded.
    rules: RulesConfig,
    /// Lowercased toll-free weekday names.
    toll_free_dow: HashSet<String>,
    /// Lowercased toll-free month names.
    toll_free_months: HashSet<String>,
    /// Exempt vehicle types.
    toll_free_vehicles: HashSet<VehicleType>,
}

impl TollConfig {
    /// Creates a new TollConfig from its component parts.
    pub fn new(charges: ChargesConfig, rules: RulesConfig) -> Self {
        let toll_free_dow = rules
            .toll_free_days
            .dow
            .iter()
            .map(|name| name.to_lowercase())
            .collect();
        let toll_free_months = rules
            .toll_free_days
            .months
            .iter()
            .map(|name| name.to_lowercase())
            .collect();
        let toll_free_vehicles = rules.toll_free_vehicles.iter().copied().collect();

        Self {
            segments: charges.segments,
            rules,
            toll_free_dow,
            toll_free_months,
            toll_free_vehicles,
        }
    }

    /// Returns the ordered charge segment table.
    pub fn segments(&self) -> &[TimeSegment] {
        &self.segments
    }

    /// Returns the maximum charge per vehicle and calendar day.
    pub fn max_daily_charge(&self) -> Decimal {
        self.rules.max_daily_charge
    }

    /// Returns the single charge clustering window in minutes.
    pub fn time_threshold_minutes(&self) -> i64 {
        self.rules.single_charge.time_threshold
    }

    /// Returns the toll-free public holidays.
    pub fn public_holidays(&self) -> &[PublicHoliday] {
        &self.rules.toll_free_days.public_holidays
    }

    /// Returns how many days before each public holiday are toll-free.
    pub fn holiday_eve_days(&self) -> i64 {
        self.rules.toll_free_days.public_holiday_eve
    }

    /// Returns the lowercased toll-free weekday name set.
    pub fn toll_free_dow(&self) -> &HashSet<String> {
        &self.toll_free_dow
    }

    /// Returns the lowercased toll-free month name set.
    pub fn toll_free_months(&self) -> &HashSet<String> {
        &self.toll_free_months
    }

    /// Returns the exempt vehicle type set.
    pub fn toll_free_vehicles(&self) -> &HashSet<VehicleType> {
        &self.toll_free_vehicles
    }
}
