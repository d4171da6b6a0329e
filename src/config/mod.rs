//! Configuration loading and management for the shift-hours engine.
//!
//! This module provides functionality to load the engine configuration
//! from a YAML file, currently the night-window hours.
//!
//! # Example
//!
//! ```no_run
//! use jornada_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Night window starts at {}", config.night_window().start_hour());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineSettings, NightWindowSettings};
