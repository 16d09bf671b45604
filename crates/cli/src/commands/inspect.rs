//! One-shot commands over the local store: log, analyze, profile, drift.

use std::sync::Arc;

use anyhow::Result;
use founderos_service::{ActivityService, AnalysisPipeline, InsightService, NewActivityLog};
use founderos_storage::StorageBackend;
use serde_json::json;

use crate::print_json;

pub(crate) struct LogArgs {
    pub user_id: String,
    pub project_id: String,
    pub content: String,
    pub log_type: String,
}

/// Store a log and analyze its user before exiting.
pub(crate) async fn log(storage: Arc<StorageBackend>, args: LogArgs) -> Result<()> {
    let pipeline = Arc::new(AnalysisPipeline::new(Arc::clone(&storage)));
    let service = ActivityService::new(storage, pipeline);
    let (log, report) = service
        .log_and_analyze(NewActivityLog {
            user_id: args.user_id,
            project_id: args.project_id,
            content: args.content,
            log_type: args.log_type,
        })
        .await?;
    print_json(&json!({ "log": log, "analysis": report }))
}

pub(crate) async fn analyze(storage: Arc<StorageBackend>, user_id: &str) -> Result<()> {
    let report = AnalysisPipeline::new(storage).run(user_id).await?;
    if !report.is_complete() {
        tracing::warn!(user_id, "analysis did not complete every stage");
    }
    print_json(&report)
}

pub(crate) async fn profile(storage: Arc<StorageBackend>, user_id: &str) -> Result<()> {
    let service = InsightService::new(storage);
    match service.profile(user_id).await? {
        Some(profile) => {
            let insight = service.insight(user_id).await?;
            print_json(&json!({ "profile": profile, "insight": insight.insight }))
        },
        None => {
            println!("No profile for user: {user_id}");
            Ok(())
        },
    }
}

pub(crate) async fn drift(
    storage: Arc<StorageBackend>,
    user_id: &str,
    history: Option<usize>,
) -> Result<()> {
    let service = InsightService::new(storage);
    let Some(drift) = service.drift(user_id).await? else {
        println!("No drift record for user: {user_id}");
        return Ok(());
    };
    match history {
        Some(limit) => {
            let snapshots = service.snapshots(user_id, Some(limit)).await?;
            print_json(&json!({ "drift": drift, "snapshots": snapshots }))
        },
        None => print_json(&drift),
    }
}
