//! Shift-Hours Classification Engine
//!
//! This crate computes payroll-relevant attendance metrics for a workforce
//! tracked via check-in/check-out events. Raw entry/exit records are paired
//! into shifts, every minute of a shift is classified across day/night and
//! normal/holiday boundaries, and calendar dates are resolved against the
//! Colombian public-holiday calendar including the Ley Emiliani Monday
//! shifts and the Easter-relative movable holidays.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
