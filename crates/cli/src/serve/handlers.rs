//! HTTP route handlers: health, calculate, history listing and clearing.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use calc_core::{CalcRequest, HistoryItem};
use serde::Deserialize;

use super::error::ApiError;
use super::json_error;
use super::state::AppState;

/// Query string for GET /api/history.
#[derive(Debug, Deserialize)]
pub(crate) struct HistoryQuery {
    pub(crate) limit: Option<i64>,
}

/// Fallback handler for unmatched routes.
pub(crate) async fn handle_not_found() -> impl IntoResponse {
    json_error(StatusCode::NOT_FOUND, "Not Found")
}

/// GET /health
pub(crate) async fn handle_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = serde_json::json!({ "status": state.calculator.health() });
    (StatusCode::OK, Json(response))
}

/// POST /api/calc
pub(crate) async fn handle_calculate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CalcRequest>, JsonRejection>,
) -> Result<Json<HistoryItem>, ApiError> {
    let Json(request) = payload?;
    let item = state.calculator.calculate_request(&request)?;
    Ok(Json(item))
}

/// GET /api/history?limit=N
pub(crate) async fn handle_list_history(
    State(state): State<Arc<AppState>>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<HistoryItem>>, ApiError> {
    let Query(query) = query?;
    let items = state.calculator.list_history(query.limit)?;
    Ok(Json(items))
}

/// DELETE /api/history
pub(crate) async fn handle_clear_history(
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let response = serde_json::json!({ "status": state.calculator.clear_history() });
    (StatusCode::OK, Json(response))
}
