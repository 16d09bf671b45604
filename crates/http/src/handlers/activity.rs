use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use founderos_core::ActivityLog;
use founderos_service::{AnalysisReport, NewActivityLog};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::LogsQuery;

/// Store a log; analysis for its user runs in the background.
pub async fn create_log(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewActivityLog>,
) -> Result<(StatusCode, Json<ActivityLog>), ApiError> {
    let log = state.activity_service.log_activity(req).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

pub async fn list_logs(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<Vec<ActivityLog>>, ApiError> {
    let logs = state.activity_service.list_logs(&user_id, query.project_id.as_deref()).await?;
    Ok(Json(logs))
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<AnalysisReport>, ApiError> {
    Ok(Json(state.pipeline.run(&user_id).await?))
}
