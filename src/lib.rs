//! Congestion Tax Engine for the Gothenburg congestion tax
//!
//! This crate provides functionality for calculating the congestion tax owed
//! for a vehicle's toll station passages, applying time-of-day pricing,
//! toll-free day and vehicle exemptions, the single charge rule, and the
//! maximum daily charge.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
