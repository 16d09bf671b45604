use std::sync::Arc;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use founderos_service::{ChatterService, NewChatterSession};
use founderos_storage::StorageBackend;
use serde_json::json;

use crate::print_json;

pub(crate) struct ChatterArgs {
    pub user_id: String,
    pub project_id: Option<String>,
    pub ai_minutes: Option<f64>,
    pub execution_minutes: Option<f64>,
    pub model: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Record a session when both durations are given, then print the summary.
pub(crate) async fn run(storage: Arc<StorageBackend>, args: ChatterArgs) -> Result<()> {
    let service = ChatterService::new(storage);

    let recorded = match (args.ai_minutes, args.execution_minutes) {
        (Some(ai), Some(exec)) => Some(
            service
                .record(NewChatterSession {
                    user_id: args.user_id.clone(),
                    project_id: args.project_id,
                    ai_interaction_minutes: ai,
                    execution_minutes: exec,
                    model_used: args.model,
                    session_date: args.date,
                })
                .await?,
        ),
        (None, None) => None,
        _ => anyhow::bail!("--ai and --exec must be given together"),
    };

    let today = args.date.unwrap_or_else(|| Utc::now().date_naive());
    let summary = service.summary(&args.user_id, today).await?;
    print_json(&json!({ "recorded": recorded, "summary": summary }))
}
