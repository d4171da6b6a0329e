//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::calculation::NightWindow;
use crate::error::{EngineError, EngineResult};

use super::types::EngineSettings;

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads the engine's YAML configuration file and
/// validates the night window eagerly, so a misconfigured deployment fails
/// at startup instead of mid-batch.
///
/// # File Structure
///
/// ```text
/// config/engine.yaml
/// ```
///
/// ```yaml
/// night_window:
///   start_hour: 21
///   end_hour: 6
/// ```
///
/// # Example
///
/// ```no_run
/// use jornada_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
/// println!("Night opens at {}", loader.night_window().start_hour());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: EngineSettings,
    night_window: NightWindow,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file is missing ([`EngineError::ConfigNotFound`])
    /// - The file contains invalid YAML ([`EngineError::ConfigParseError`])
    /// - The night-window hours are out of range
    ///   ([`EngineError::InvalidNightWindow`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let settings: EngineSettings =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        let night_window = settings.night_window.to_night_window()?;

        Ok(Self {
            settings,
            night_window,
        })
    }

    /// Returns the raw settings as loaded from the file.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the validated night window.
    pub fn night_window(&self) -> NightWindow {
        self.night_window
    }
}
