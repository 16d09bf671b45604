use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::Utc;
use founderos_core::ChatterSession;
use founderos_service::{ChatterSummary, NewChatterSession};
use serde::Serialize;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::ChatterQuery;

#[derive(Debug, Serialize)]
pub struct ChatterResponse {
    pub summary: ChatterSummary,
    pub sessions: Vec<ChatterSession>,
}

pub async fn record_chatter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewChatterSession>,
) -> Result<(StatusCode, Json<ChatterSession>), ApiError> {
    let session = state.chatter_service.record(req).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn get_chatter(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(query): Query<ChatterQuery>,
) -> Result<Json<ChatterResponse>, ApiError> {
    let today = query.today.unwrap_or_else(|| Utc::now().date_naive());
    let summary = state.chatter_service.summary(&user_id, today).await?;
    let sessions = state.chatter_service.list(&user_id, query.since).await?;
    Ok(Json(ChatterResponse { summary, sessions }))
}
