use async_trait::async_trait;
use founderos_core::ActivityLog;

use crate::error::StorageError;

/// Append-only activity log storage.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Append a log. Fails with `Duplicate` when the id already exists.
    async fn save_log(&self, log: &ActivityLog) -> Result<(), StorageError>;

    /// All logs of a user, newest first, optionally narrowed to one project.
    ///
    /// Rows with an unreadable `log_type` or `created_at` are returned with
    /// that field set to `None`; rows without a timestamp sort last.
    async fn list_logs(
        &self,
        user_id: &str,
        project_id: Option<&str>,
    ) -> Result<Vec<ActivityLog>, StorageError>;

    /// Every user with logs, profile snapshots or chatter sessions.
    async fn list_user_ids(&self) -> Result<Vec<String>, StorageError>;
}
