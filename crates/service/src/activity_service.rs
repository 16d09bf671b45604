use std::sync::Arc;

use founderos_core::{ActivityLog, LogType, MAX_LOG_CONTENT_LEN};
use founderos_storage::StorageBackend;
use founderos_storage::traits::ActivityStore;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::pipeline::{AnalysisPipeline, AnalysisReport};
use crate::{now, require_non_empty};

/// A log as submitted by a client, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewActivityLog {
    pub user_id: String,
    pub project_id: String,
    pub content: String,
    pub log_type: String,
}

pub struct ActivityService {
    storage: Arc<StorageBackend>,
    pipeline: Arc<AnalysisPipeline>,
}

impl ActivityService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>, pipeline: Arc<AnalysisPipeline>) -> Self {
        Self { storage, pipeline }
    }

    /// Persist a log and analyze the user in the background.
    ///
    /// Returns as soon as the log is stored; pipeline failures are only logged.
    pub async fn log_activity(&self, input: NewActivityLog) -> Result<ActivityLog, ServiceError> {
        let log = self.save(input).await?;

        let pipeline = Arc::clone(&self.pipeline);
        let user_id = log.user_id.clone();
        tokio::spawn(async move {
            match pipeline.run(&user_id).await {
                Ok(report) if !report.is_complete() => {
                    tracing::warn!(user_id = %user_id, "background analysis incomplete");
                },
                Ok(_) => {},
                Err(e) => {
                    tracing::warn!(user_id = %user_id, error = %e, "background analysis failed");
                },
            }
        });

        Ok(log)
    }

    /// Persist a log and run the pipeline before returning.
    pub async fn log_and_analyze(
        &self,
        input: NewActivityLog,
    ) -> Result<(ActivityLog, AnalysisReport), ServiceError> {
        let log = self.save(input).await?;
        let report = self.pipeline.run(&log.user_id).await?;
        Ok((log, report))
    }

    pub async fn list_logs(
        &self,
        user_id: &str,
        project_id: Option<&str>,
    ) -> Result<Vec<ActivityLog>, ServiceError> {
        let user_id = require_non_empty("user_id", user_id)?;
        let project_id = project_id.map(str::trim).filter(|p| !p.is_empty());
        Ok(self.storage.list_logs(user_id, project_id).await?)
    }

    async fn save(&self, input: NewActivityLog) -> Result<ActivityLog, ServiceError> {
        let log = validate(input)?;
        self.storage.save_log(&log).await?;
        tracing::debug!(user_id = %log.user_id, log_id = %log.id, "activity logged");
        Ok(log)
    }
}

fn validate(input: NewActivityLog) -> Result<ActivityLog, ServiceError> {
    let user_id = require_non_empty("user_id", &input.user_id)?;
    let project_id = require_non_empty("project_id", &input.project_id)?;
    let content = require_non_empty("content", &input.content)?;
    if content.chars().count() > MAX_LOG_CONTENT_LEN {
        return Err(ServiceError::InvalidInput(format!(
            "content exceeds {MAX_LOG_CONTENT_LEN} characters"
        )));
    }
    let log_type: LogType = input.log_type.parse()?;

    Ok(ActivityLog::new(
        Uuid::new_v4().to_string(),
        project_id.to_owned(),
        user_id.to_owned(),
        content.to_owned(),
        log_type,
        now(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(user: &str, content: &str, log_type: &str) -> NewActivityLog {
        NewActivityLog {
            user_id: user.to_owned(),
            project_id: "P1".to_owned(),
            content: content.to_owned(),
            log_type: log_type.to_owned(),
        }
    }

    #[test]
    fn validate_trims_and_assigns_id() {
        let log = validate(input("  user-1 ", "shipped it", " Blocker")).unwrap();
        assert_eq!(log.user_id, "user-1");
        assert_eq!(log.log_type, Some(LogType::Blocker));
        assert!(log.created_at.is_some());
        assert!(Uuid::parse_str(&log.id).is_ok());
    }

    #[test]
    fn validate_rejects_bad_input() {
        for bad in [
            input("", "x", "update"),
            input("user-1", "   ", "update"),
            input("user-1", "x", "rant"),
            input("user-1", &"a".repeat(MAX_LOG_CONTENT_LEN + 1), "update"),
        ] {
            let err = validate(bad).unwrap_err();
            assert!(matches!(err, ServiceError::InvalidInput(_)), "unexpected: {err}");
        }
    }
}
