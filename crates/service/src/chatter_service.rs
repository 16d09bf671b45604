use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use founderos_analysis::{ChatterSummary, chatter_ratio, summarize_chatter};
use founderos_core::{ChatterSession, MAX_SESSION_MINUTES, chatter_window_days};
use founderos_storage::StorageBackend;
use founderos_storage::traits::ChatterStore;
use serde::Deserialize;

use crate::error::ServiceError;
use crate::require_non_empty;

#[derive(Debug, Clone, Deserialize)]
pub struct NewChatterSession {
    pub user_id: String,
    #[serde(default)]
    pub project_id: Option<String>,
    pub ai_interaction_minutes: f64,
    pub execution_minutes: f64,
    #[serde(default)]
    pub model_used: Option<String>,
    /// Defaults to today (UTC).
    #[serde(default)]
    pub session_date: Option<NaiveDate>,
}

pub struct ChatterService {
    storage: Arc<StorageBackend>,
    window_days: i64,
}

impl ChatterService {
    /// Window length comes from `FOUNDEROS_CHATTER_WINDOW_DAYS`.
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self::with_window(storage, chatter_window_days())
    }

    #[must_use]
    pub fn with_window(storage: Arc<StorageBackend>, window_days: i64) -> Self {
        Self { storage, window_days: window_days.max(1) }
    }

    #[must_use]
    pub const fn window_days(&self) -> i64 {
        self.window_days
    }

    pub async fn record(&self, input: NewChatterSession) -> Result<ChatterSession, ServiceError> {
        let user_id = require_non_empty("user_id", &input.user_id)?;
        let ai = validate_minutes("ai_interaction_minutes", input.ai_interaction_minutes)?;
        let exec = validate_minutes("execution_minutes", input.execution_minutes)?;

        let session = ChatterSession {
            user_id: user_id.to_owned(),
            project_id: non_blank(input.project_id),
            ai_interaction_minutes: ai,
            execution_minutes: exec,
            chatter_ratio: chatter_ratio(ai, exec),
            model_used: non_blank(input.model_used),
            session_date: input.session_date.unwrap_or_else(|| Utc::now().date_naive()),
        };
        self.storage.save_chatter_session(&session).await?;
        tracing::debug!(user_id = %session.user_id, ratio = session.chatter_ratio, "chatter session recorded");
        Ok(session)
    }

    pub async fn list(
        &self,
        user_id: &str,
        since: Option<NaiveDate>,
    ) -> Result<Vec<ChatterSession>, ServiceError> {
        let user_id = require_non_empty("user_id", user_id)?;
        Ok(self.storage.list_chatter_sessions(user_id, since).await?)
    }

    /// Classify the sessions dated within the window ending on `today`.
    pub async fn summary(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<ChatterSummary, ServiceError> {
        let span = u64::try_from(self.window_days - 1).unwrap_or(0);
        let since = today.checked_sub_days(Days::new(span));
        let sessions = self.list(user_id, since).await?;
        Ok(summarize_chatter(&sessions, today, self.window_days))
    }
}

fn validate_minutes(field: &str, minutes: f64) -> Result<f64, ServiceError> {
    if !(minutes.is_finite() && minutes >= 0.0) {
        return Err(ServiceError::InvalidInput(format!("{field} must be a non-negative number")));
    }
    if minutes > MAX_SESSION_MINUTES {
        return Err(ServiceError::InvalidInput(format!(
            "{field} exceeds {MAX_SESSION_MINUTES} minutes"
        )));
    }
    Ok(minutes)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
