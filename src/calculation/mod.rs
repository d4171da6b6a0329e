//! Calculation logic for the shift-hours classification engine.
//!
//! This module contains the classification pipeline: the Colombian holiday
//! calendar with Emiliani shifting and Easter-relative movable dates, day
//! type detection, the night-window definition, the interval-sweep hours
//! classifier, raw-record validation into shifts, and the batch runner
//! that assembles per-shift summaries.

mod batch;
mod day_detection;
mod easter;
mod holidays;
mod night_window;
mod shift_builder;
mod shift_hours;

pub use batch::{
    run_batch, build_summary, BatchReport, MapNameResolver, NameResolver, ShiftSummary,
};
pub use day_detection::{get_day_type, DayType};
pub use easter::easter_sunday;
pub use holidays::{emiliani_shift, holidays_for_year, HolidayCalendar};
pub use night_window::NightWindow;
pub use shift_builder::{
    build_shifts, parse_record, parse_timestamp, OpenEntry, ParsedRecord, ShiftBuildReport,
    TimestampParse,
};
pub use shift_hours::{classify_shift, segment_shift, ShiftSegment};
