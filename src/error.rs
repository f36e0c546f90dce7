//! Error types for the Congestion Tax Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during charge calculation.

use chrono::NaiveTime;
use thiserror::Error;

/// The main error type for the Congestion Tax Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use congestion_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A passage timestamp string could not be parsed.
    #[error("Invalid passage timestamp '{value}': {message}")]
    TimestampParse {
        /// The timestamp string that failed to parse.
        value: String,
        /// A description of the parse error.
        message: String,
    },

    /// No charge segment in the configured table covers the given time of day.
    ///
    /// The charge table is expected to cover the full 24-hour day, so this
    /// indicates broken configuration rather than bad input.
    #[error("No charge segment matches time of day {time}")]
    SegmentNotFound {
        /// The time of day that matched no segment.
        time: NaiveTime,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_timestamp_parse_displays_value_and_message() {
        let error = EngineError::TimestampParse {
            value: "2013-02-30 27:00:00".to_string(),
            message: "input is out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid passage timestamp '2013-02-30 27:00:00': input is out of range"
        );
    }

    #[test]
    fn test_segment_not_found_displays_time() {
        let error = EngineError::SegmentNotFound {
            time: NaiveTime::from_hms_opt(5, 45, 0).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "No charge segment matches time of day 05:45:00"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
