//! Configuration loading and types for the Congestion Tax Engine.
//!
//! This module provides the configuration types and loader for the
//! congestion charge table and tax rules.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ChargesConfig, PublicHoliday, RulesConfig, SingleCharge, TimeSegment, TollConfig, TollFreeDays,
};
