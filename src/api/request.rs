//! Request types for the shift-hours classification API.
//!
//! This module defines the JSON request structures for the `/classify`
//! endpoint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::RawAttendanceRecord;

/// Request body for the `/classify` endpoint.
///
/// Contains the raw attendance records to classify, an optional night
/// window overriding the configured one, and an optional employee-name
/// directory for the summary rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationRequest {
    /// Night window to use for this run. Falls back to the configured
    /// window when absent.
    #[serde(default)]
    pub night_window: Option<NightWindowRequest>,
    /// Employee id to display-name map used for summary assembly.
    #[serde(default)]
    pub employee_names: HashMap<String, String>,
    /// The raw attendance records to classify.
    pub records: Vec<RawRecordRequest>,
}

/// Night-window hours in a classification request.
///
/// Validated into a `NightWindow` by the handler; out-of-range hours
/// reject the whole request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NightWindowRequest {
    /// The hour the night window opens (0-23).
    pub start_hour: u32,
    /// The hour the night window closes (0-23).
    pub end_hour: u32,
}

/// One raw attendance record in a classification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecordRequest {
    /// The employee identity string.
    pub employee_id: String,
    /// The work-center label.
    pub work_center: String,
    /// The entry date as stored.
    #[serde(default)]
    pub entry_date: Option<String>,
    /// The entry time as stored.
    #[serde(default)]
    pub entry_time: Option<String>,
    /// The exit date as stored.
    #[serde(default)]
    pub exit_date: Option<String>,
    /// The exit time as stored.
    #[serde(default)]
    pub exit_time: Option<String>,
}

impl From<RawRecordRequest> for RawAttendanceRecord {
    fn from(req: RawRecordRequest) -> Self {
        RawAttendanceRecord {
            employee_id: req.employee_id,
            work_center: req.work_center,
            entry_date: req.entry_date,
            entry_time: req.entry_time,
            exit_date: req.exit_date,
            exit_time: req.exit_time,
        }
    }
}
