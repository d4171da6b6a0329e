//! HTTP request handlers for the shift-hours classification API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{run_batch, MapNameResolver, NightWindow};
use crate::models::RawAttendanceRecord;

use super::request::ClassificationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/classify", post(classify_handler))
        .with_state(state)
}

/// Handler for POST /classify endpoint.
///
/// Accepts a batch of raw attendance records and returns the classified
/// per-shift summaries.
async fn classify_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClassificationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing classification request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Resolve the night window: request override or configured value.
    // An out-of-range override rejects the request before any record is
    // touched; a bad window would misclassify the entire batch.
    let night_window = match request.night_window {
        Some(req) => match NightWindow::new(req.start_hour, req.end_hour) {
            Ok(window) => window,
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Rejected night window override"
                );
                let api_error: ApiErrorResponse = err.into();
                return (
                    api_error.status,
                    [(header::CONTENT_TYPE, "application/json")],
                    Json(api_error.error),
                )
                    .into_response();
            }
        },
        None => state.config().night_window(),
    };

    // Convert request types to domain types
    let records: Vec<RawAttendanceRecord> =
        request.records.into_iter().map(Into::into).collect();
    let resolver = MapNameResolver::new(request.employee_names);

    let report = run_batch(&records, night_window, &resolver);

    info!(
        correlation_id = %correlation_id,
        batch_id = %report.batch_id,
        shifts = report.summaries.len(),
        open = report.open_entries.len(),
        dropped = report.dropped_records,
        invalid = report.invalid_records,
        "Classification completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}
