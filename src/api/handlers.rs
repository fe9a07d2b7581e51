//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! endpoint is a thin adapter over a pure core operation; the storage and
//! session layers live with the caller.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_daily_summary, compute_monthly_summary};
use crate::workflow::{attempt_transition, may_edit};

use super::request::{
    DailySummaryRequest, EditCheckRequest, MonthlySummaryRequest, TransitionRequest,
};
use super::response::{ApiError, ApiErrorResponse, EditCheckResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summary/daily", post(daily_summary_handler))
        .route("/summary/monthly", post(monthly_summary_handler))
        .route("/report/transition", post(transition_handler))
        .route("/report/may-edit", post(may_edit_handler))
        .with_state(state)
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Handler for POST /summary/daily.
///
/// Classifies one day's record into the seven duration buckets.
async fn daily_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailySummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let summary = compute_daily_summary(&request.record, state.work_policy());
    info!(
        correlation_id = %correlation_id,
        working_hours = %summary.working_hours,
        "Computed daily summary"
    );
    Json(summary).into_response()
}

/// Handler for POST /summary/monthly.
///
/// Aggregates a month of summarized days into totals and day counts.
async fn monthly_summary_handler(
    State(_state): State<AppState>,
    payload: Result<Json<MonthlySummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let summary = compute_monthly_summary(&request.days);
    info!(
        correlation_id = %correlation_id,
        days = request.days.len(),
        working_days = summary.working_days,
        "Computed monthly summary"
    );
    Json(summary).into_response()
}

/// Handler for POST /report/transition.
///
/// Decides a lifecycle transition against the status the caller read. The
/// caller persists the outcome transactionally; if the stored status moved
/// in the meantime, its compare-and-set fails and it re-reads and retries.
async fn transition_handler(
    payload: Result<Json<TransitionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match attempt_transition(request.current_status, &request.action, &request.actor) {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                from = %request.current_status,
                to = %outcome.new_status,
                "Transition accepted"
            );
            Json(outcome).into_response()
        }
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                status = %request.current_status,
                reason = %rejection,
                "Transition rejected"
            );
            ApiErrorResponse::from(rejection).into_response()
        }
    }
}

/// Handler for POST /report/may-edit.
///
/// Pure guard consulted before accepting any day-record or notes mutation.
async fn may_edit_handler(
    payload: Result<Json<EditCheckRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let allowed = may_edit(request.current_status, request.is_owner);
    info!(
        correlation_id = %correlation_id,
        status = %request.current_status,
        is_owner = request.is_owner,
        may_edit = allowed,
        "Edit check"
    );
    Json(EditCheckResponse { may_edit: allowed }).into_response()
}
