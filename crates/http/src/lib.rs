//! HTTP API server for FounderOS.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
mod query_types;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::routing::{get, post};
use founderos_service::{ActivityService, AnalysisPipeline, ChatterService, InsightService};
use founderos_storage::StorageBackend;
use serde::Serialize;
use tower_http::cors::CorsLayer;

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Runs patterns → profile → drift for a user, one run per user at a time
    pub pipeline: Arc<AnalysisPipeline>,
    /// Log ingestion, triggers background analysis
    pub activity_service: Arc<ActivityService>,
    /// Read side: patterns, insight, profile, drift, snapshots
    pub insight_service: Arc<InsightService>,
    /// AI-chat vs execution time sessions
    pub chatter_service: Arc<ChatterService>,
}

impl AppState {
    /// Wire every service over one storage backend.
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        let pipeline = Arc::new(AnalysisPipeline::new(Arc::clone(&storage)));
        Self {
            activity_service: Arc::new(ActivityService::new(
                Arc::clone(&storage),
                Arc::clone(&pipeline),
            )),
            insight_service: Arc::new(InsightService::new(Arc::clone(&storage))),
            chatter_service: Arc::new(ChatterService::new(storage)),
            pipeline,
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/logs", post(handlers::activity::create_log))
        .route("/api/chatter", post(handlers::chatter::record_chatter))
        .route("/api/users/{user_id}/logs", get(handlers::activity::list_logs))
        .route("/api/users/{user_id}/analyze", post(handlers::activity::analyze))
        .route("/api/users/{user_id}/patterns", get(handlers::insights::get_patterns))
        .route("/api/users/{user_id}/insight", get(handlers::insights::get_insight))
        .route("/api/users/{user_id}/profile", get(handlers::insights::get_profile))
        .route("/api/users/{user_id}/drift", get(handlers::insights::get_drift))
        .route("/api/users/{user_id}/snapshots", get(handlers::insights::list_snapshots))
        .route("/api/users/{user_id}/chatter", get(handlers::chatter::get_chatter))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
