//! HTTP request handlers for the shift roster API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Employee, ScheduleReport};
use crate::scheduling::Scheduler;

use super::request::ScheduleRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule", post(schedule_handler))
        .with_state(state)
}

/// Handler for POST /schedule endpoint.
///
/// Accepts employees with their preferences and returns the schedule report.
async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
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

    let seed = request
        .seed
        .or(state.config().seed())
        .unwrap_or_else(rand::random::<u64>);

    match perform_scheduling(request, seed, &state) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                run_id = %report.run_id,
                seed,
                assignments = report.assignments.len(),
                shortfalls = report.shortfalls.len(),
                duration_us = report.duration_us,
                "Schedule generated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Scheduling failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Converts the request into employees and runs one scheduling pass.
fn perform_scheduling(
    request: ScheduleRequest,
    seed: u64,
    state: &AppState,
) -> EngineResult<ScheduleReport> {
    let employees = request
        .employees
        .into_iter()
        .map(Employee::try_from)
        .collect::<EngineResult<Vec<_>>>()?;

    let mut scheduler = Scheduler::with_policy(employees, state.config().policy());
    scheduler.generate_seeded(seed)
}
