//! Night-window configuration.
//!
//! This module defines the validated clock-hour range during which worked
//! time is classified as nocturnal. The window is plain data threaded
//! through every classification call; it is never ambient state.

use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// The configured range of clock hours treated as night.
///
/// The window may wrap midnight (`start_hour > end_hour`, e.g. 21→6) or
/// not (e.g. 0→6). A window with `start_hour == end_hour` is empty: no
/// hour is ever night. Values come from host configuration; there is no
/// default in code, and construction always goes through [`NightWindow::new`]
/// so an unvalidated window cannot exist.
///
/// # Example
///
/// ```
/// use jornada_engine::calculation::NightWindow;
///
/// let window = NightWindow::new(21, 6).unwrap();
/// assert!(window.contains_hour(22));
/// assert!(window.contains_hour(3));
/// assert!(!window.contains_hour(12));
///
/// assert!(NightWindow::new(24, 6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NightWindow {
    start_hour: u32,
    end_hour: u32,
}

impl NightWindow {
    /// Creates a validated night window.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidNightWindow`] if either hour is
    /// outside 0..=23. Validation happens here, before any shift is
    /// classified, so a bad configuration aborts the run instead of
    /// producing silently wrong buckets.
    pub fn new(start_hour: u32, end_hour: u32) -> EngineResult<Self> {
        if start_hour > 23 || end_hour > 23 {
            return Err(EngineError::InvalidNightWindow {
                start_hour,
                end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// The hour the night window opens.
    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    /// The hour the night window closes.
    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    /// Returns true if this window never matches any hour.
    pub fn is_empty(&self) -> bool {
        self.start_hour == self.end_hour
    }

    /// Returns true if the given clock hour falls inside the window.
    ///
    /// For a midnight-wrapping window the hour qualifies when it is at or
    /// after the start or before the end; otherwise the ordinary
    /// half-open `start <= hour < end` check applies.
    pub fn contains_hour(&self, hour: u32) -> bool {
        if self.start_hour > self.end_hour {
            hour >= self.start_hour || hour < self.end_hour
        } else {
            hour >= self.start_hour && hour < self.end_hour
        }
    }
}
