use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use founderos_core::{BuilderProfile, DriftRecord, Pattern, ProfileSnapshot};
use founderos_service::Insight;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::SnapshotsQuery;

pub async fn get_patterns(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Pattern>>, ApiError> {
    Ok(Json(state.insight_service.patterns(&user_id).await?))
}

pub async fn get_insight(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Insight>, ApiError> {
    Ok(Json(state.insight_service.insight(&user_id).await?))
}

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<BuilderProfile>, ApiError> {
    state
        .insight_service
        .profile(&user_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no profile for user '{user_id}'")))
}

pub async fn get_drift(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<DriftRecord>, ApiError> {
    state
        .insight_service
        .drift(&user_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("no drift record for user '{user_id}'")))
}

pub async fn list_snapshots(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Query(query): Query<SnapshotsQuery>,
) -> Result<Json<Vec<ProfileSnapshot>>, ApiError> {
    Ok(Json(state.insight_service.snapshots(&user_id, query.limit).await?))
}
