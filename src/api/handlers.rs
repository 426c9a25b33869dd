//! HTTP request handlers for the Benefit Simulation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::simulate_submission;
use crate::models::ProfileSubmission;
use crate::persistence::PersistenceOutcome;

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/simulations", get(list_handler).post(simulate_handler))
        .route("/simulations/:id", get(get_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

fn error_response(api_error: ApiErrorResponse) -> axum::response::Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Maps a body rejection to an API error.
///
/// Every field of the submission is optional at the JSON level, so a data
/// error always means a value of the wrong type.
fn rejection_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
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
    }
}

/// Handler for POST /simulations.
///
/// Validates the submission, runs the simulation, records it in the history
/// and returns the result.
async fn simulate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProfileSubmission>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing simulation request");

    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => {
            let error = rejection_error(rejection, correlation_id);
            return error_response(ApiErrorResponse::bad_request(error));
        }
    };

    let start_time = Instant::now();
    let result = match simulate_submission(submission, state.rules(), Utc::now()) {
        Ok(result) => result,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Simulation rejected"
            );
            return error_response(err.into());
        }
    };
    let duration = start_time.elapsed();

    // A file-backed store writes synchronously, so the append runs off the
    // async workers.
    let history = Arc::clone(state.history());
    let record = result.clone();
    let outcome =
        match tokio::task::spawn_blocking(move || history.blocking_lock().record(record)).await {
            Ok(outcome) => outcome,
            Err(err) => PersistenceOutcome::Failed(format!("history task failed: {}", err)),
        };
    if let PersistenceOutcome::Failed(reason) = &outcome {
        warn!(
            correlation_id = %correlation_id,
            simulation_id = %result.simulation_id,
            error = %reason,
            "Simulation kept in memory only"
        );
    }

    info!(
        correlation_id = %correlation_id,
        simulation_id = %result.simulation_id,
        is_eligible = result.eligibility.is_eligible,
        total_amount = %result.calculation.total_amount,
        persisted = outcome == PersistenceOutcome::Persisted,
        duration_us = duration.as_micros(),
        "Simulation completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for GET /simulations.
///
/// Returns every recorded simulation, oldest first.
async fn list_handler(State(state): State<AppState>) -> impl IntoResponse {
    let history = state.history().lock().await;
    info!(count = history.len(), "Listing simulations");
    Json(history.list().to_vec())
}

/// Handler for GET /simulations/:id.
async fn get_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> impl IntoResponse {
    let id = match id {
        Ok(Path(id)) => id,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(ApiError::validation_error(
                rejection.body_text(),
            )));
        }
    };

    let history = state.history().lock().await;
    match history.get(id) {
        Ok(result) => (StatusCode::OK, Json(result.clone())).into_response(),
        Err(err) => {
            warn!(simulation_id = %id, "Simulation not found");
            error_response(err.into())
        }
    }
}

/// Handler for GET /health.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let scheme = state.rules().scheme();
    Json(serde_json::json!({
        "status": "ok",
        "engine_version": env!("CARGO_PKG_VERSION"),
        "scheme": scheme.code,
        "rules_version": scheme.version
    }))
}
