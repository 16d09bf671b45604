use async_trait::async_trait;
use chrono::NaiveDate;
use founderos_core::ChatterSession;

use crate::error::StorageError;

/// Append-only AI-interaction session log.
#[async_trait]
pub trait ChatterStore: Send + Sync {
    async fn save_chatter_session(&self, session: &ChatterSession) -> Result<(), StorageError>;

    /// Sessions oldest first, optionally only those dated on or after `since`.
    async fn list_chatter_sessions(
        &self,
        user_id: &str,
        since: Option<NaiveDate>,
    ) -> Result<Vec<ChatterSession>, StorageError>;
}
