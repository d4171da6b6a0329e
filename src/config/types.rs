//! Configuration types for the shift-hours classification engine.
//!
//! This module contains the strongly-typed structures deserialized from
//! the engine's YAML configuration file.

use serde::Deserialize;

use crate::calculation::NightWindow;
use crate::error::EngineResult;

/// Night-window hours as written in the configuration file.
///
/// The deployment owns these values; the two known production defaults
/// (19→6 and 21→6) differ between sites, so no fallback exists in code.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct NightWindowSettings {
    /// The hour the night window opens (0-23).
    pub start_hour: u32,
    /// The hour the night window closes (0-23).
    pub end_hour: u32,
}

impl NightWindowSettings {
    /// Validates the raw hours into a usable [`NightWindow`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::InvalidNightWindow`] if either
    /// hour is outside 0..=23.
    pub fn to_night_window(self) -> EngineResult<NightWindow> {
        NightWindow::new(self.start_hour, self.end_hour)
    }
}

/// The complete engine configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// The configured night window.
    pub night_window: NightWindowSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_deserialize_from_yaml() {
        let yaml = "night_window:\n  start_hour: 21\n  end_hour: 6\n";
        let settings: EngineSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.night_window.start_hour, 21);
        assert_eq!(settings.night_window.end_hour, 6);
    }

    #[test]
    fn test_out_of_range_settings_rejected_on_conversion() {
        let settings = NightWindowSettings {
            start_hour: 24,
            end_hour: 6,
        };
        assert!(settings.to_night_window().is_err());
    }

    #[test]
    fn test_valid_settings_convert() {
        let settings = NightWindowSettings {
            start_hour: 19,
            end_hour: 6,
        };
        let window = settings.to_night_window().unwrap();
        assert_eq!(window.start_hour(), 19);
        assert_eq!(window.end_hour(), 6);
    }
}
