//! Error types for the shift-hours classification engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Configuration errors abort a run; per-record input problems are handled
//! locally by the shift builder and never surface as errors here.

use thiserror::Error;

/// The main error type for the shift-hours classification engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use jornada_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
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

    /// A night window hour was outside the 0..=23 range.
    ///
    /// Raised before any classification happens; an out-of-range window
    /// would silently misclassify every shift in the run.
    #[error("Invalid night window: start_hour={start_hour}, end_hour={end_hour} (hours must be 0-23)")]
    InvalidNightWindow {
        /// The configured start hour.
        start_hour: u32,
        /// The configured end hour.
        end_hour: u32,
    },

    /// A shift was invalid or contained inconsistent data.
    #[error("Invalid shift for employee '{employee_id}': {message}")]
    InvalidShift {
        /// The employee the shift belongs to.
        employee_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
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
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
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
    fn test_invalid_night_window_displays_hours() {
        let error = EngineError::InvalidNightWindow {
            start_hour: 25,
            end_hour: 6,
        };
        assert_eq!(
            error.to_string(),
            "Invalid night window: start_hour=25, end_hour=6 (hours must be 0-23)"
        );
    }

    #[test]
    fn test_invalid_shift_displays_employee_and_message() {
        let error = EngineError::InvalidShift {
            employee_id: "emp_001".to_string(),
            message: "exit time before entry time".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid shift for employee 'emp_001': exit time before entry time"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "negative duration".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: negative duration");
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
