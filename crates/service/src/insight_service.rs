use std::sync::Arc;

use founderos_analysis::synthesize_insight;
use founderos_core::{
    BuilderProfile, DEFAULT_QUERY_LIMIT, DriftRecord, MAX_QUERY_LIMIT, Pattern, ProfileSnapshot,
};
use founderos_storage::StorageBackend;
use founderos_storage::traits::{DriftStore, PatternStore, ProfileStore, SnapshotStore};
use serde::Serialize;

use crate::error::ServiceError;
use crate::require_non_empty;

#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub user_id: String,
    pub insight: String,
    pub patterns: Vec<Pattern>,
}

/// Read side over the analysis results.
pub struct InsightService {
    storage: Arc<StorageBackend>,
}

impl InsightService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn patterns(&self, user_id: &str) -> Result<Vec<Pattern>, ServiceError> {
        let user_id = require_non_empty("user_id", user_id)?;
        Ok(self.storage.list_patterns(user_id).await?)
    }

    pub async fn insight(&self, user_id: &str) -> Result<Insight, ServiceError> {
        let patterns = self.patterns(user_id).await?;
        Ok(Insight {
            user_id: user_id.trim().to_owned(),
            insight: synthesize_insight(&patterns),
            patterns,
        })
    }

    pub async fn profile(&self, user_id: &str) -> Result<Option<BuilderProfile>, ServiceError> {
        let user_id = require_non_empty("user_id", user_id)?;
        Ok(self.storage.get_profile(user_id).await?)
    }

    pub async fn drift(&self, user_id: &str) -> Result<Option<DriftRecord>, ServiceError> {
        let user_id = require_non_empty("user_id", user_id)?;
        Ok(self.storage.get_drift(user_id).await?)
    }

    /// Newest first. `None` means the default page size; larger limits are capped.
    pub async fn snapshots(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ProfileSnapshot>, ServiceError> {
        let user_id = require_non_empty("user_id", user_id)?;
        let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT);
        Ok(self.storage.list_snapshots(user_id, limit).await?)
    }
}
