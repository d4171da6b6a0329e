//! Raw attendance record model.
//!
//! This module defines the loosely-typed record shape received from the
//! external attendance store. Entry and exit fields arrive as free-form
//! strings and are only given meaning by the shift builder.

use serde::{Deserialize, Serialize};

/// One raw check-in/check-out record as received from the external store.
///
/// All timestamp fields are optional strings: a record may have no exit yet
/// (an open shift), or carry values the store produced in any of several
/// textual formats. The shift builder is responsible for parsing and
/// validation; this type performs none.
///
/// # Example
///
/// ```
/// use jornada_engine::models::RawAttendanceRecord;
///
/// let record = RawAttendanceRecord {
///     employee_id: "emp_001".to_string(),
///     work_center: "bodega_norte".to_string(),
///     entry_date: Some("02/01/2026".to_string()),
///     entry_time: Some("07:00".to_string()),
///     exit_date: Some("02/01/2026".to_string()),
///     exit_time: Some("17:00".to_string()),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttendanceRecord {
    /// The employee identity string.
    pub employee_id: String,
    /// The work-center label the event was recorded against.
    pub work_center: String,
    /// The entry date as stored (e.g. `02/01/2026` or `2026-01-02`).
    #[serde(default)]
    pub entry_date: Option<String>,
    /// The entry time as stored (e.g. `07:00` or `07:00:00`).
    #[serde(default)]
    pub entry_time: Option<String>,
    /// The exit date as stored. Absent while the shift is still open.
    #[serde(default)]
    pub exit_date: Option<String>,
    /// The exit time as stored. Absent while the shift is still open.
    #[serde(default)]
    pub exit_time: Option<String>,
}
