//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the congestion
//! charge table and tax rules from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{ChargesConfig, RulesConfig, TollConfig};

/// Loads and provides access to the congestion tax configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the aggregated [`TollConfig`] for the calculation pipeline.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/gothenburg/
/// ├── charges.yaml   # Time-of-day charge segments
/// └── rules.yaml     # Toll-free days, vehicles, single charge, daily cap
/// ```
///
/// # Example
///
/// ```no_run
/// use congestion_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/gothenburg").unwrap();
/// println!("segments: {}", loader.config().segments().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/gothenburg")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML
    /// - The charge table contains no segments
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let charges_path = path.join("charges.yaml");
        let charges = Self::load_yaml::<ChargesConfig>(&charges_path)?;

        if charges.segments.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: charges_path.display().to_string(),
                message: "charge table contains no segments".to_string(),
            });
        }

        let rules_path = path.join("rules.yaml");
        let rules = Self::load_yaml::<RulesConfig>(&rules_path)?;

        Ok(Self {
            config: TollConfig::new(charges, rules),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the aggregated congestion tax configuration.
    pub fn config(&self) -> &TollConfig {
        &self.config
    }
}
