//! HTTP API for the shift-hours classification engine.
//!
//! This module exposes a single `POST /classify` endpoint that accepts a
//! batch of raw attendance records and returns the classified per-shift
//! summaries. The HTTP surface is thin host glue; all semantics live in
//! [`crate::calculation`].

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ClassificationRequest, NightWindowRequest, RawRecordRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
