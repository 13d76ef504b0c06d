//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! routes/services layer for the actual work.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};

use super::dto::{CalculateRequest, HealthResponse, ScheduleView, SleepChart};
use super::error::AppError;
use super::state::AppState;
use crate::routes::{brackets, calculate};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(_state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

// =============================================================================
// Sleep Chart
// =============================================================================

/// GET /v1/age-brackets
///
/// Recommended sleep duration and cycle length for every age bracket.
pub async fn list_age_brackets(State(_state): State<AppState>) -> HandlerResult<SleepChart> {
    Ok(Json(brackets::sleep_chart()))
}

// =============================================================================
// Schedule Calculation
// =============================================================================

fn run_calculation(request: &CalculateRequest) -> HandlerResult<ScheduleView> {
    let view = calculate::calculate(request)?;
    tracing::info!(
        mode = %view.result.mode,
        base_time = %view.result.base_time,
        bracket = view.result.bracket.label,
        ideal = %view.result.ideal().time,
        "schedule calculated"
    );
    Ok(Json(view))
}

/// POST /v1/schedule
///
/// Compute suggested times from a JSON `CalculateRequest`.
pub async fn post_schedule(
    State(_state): State<AppState>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> HandlerResult<ScheduleView> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    run_calculation(&request)
}

/// GET /v1/schedule?hour=7&minute=0&meridiem=AM&mode=wake_at&age_bracket=years_18_to_25
///
/// Same as the POST variant, with the request in the query string.
pub async fn get_schedule(
    State(_state): State<AppState>,
    query: Result<Query<CalculateRequest>, QueryRejection>,
) -> HandlerResult<ScheduleView> {
    let Query(request) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    run_calculation(&request)
}
