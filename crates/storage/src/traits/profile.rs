use async_trait::async_trait;
use founderos_core::{BuilderProfile, ProfileSnapshot};

use crate::error::StorageError;

/// One live builder profile per user.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn upsert_profile(&self, profile: &BuilderProfile) -> Result<(), StorageError>;

    async fn get_profile(&self, user_id: &str) -> Result<Option<BuilderProfile>, StorageError>;
}

/// Append-only profile history.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Latest readable snapshot by `recorded_at`; insertion order breaks ties.
    /// Corrupt rows are skipped.
    async fn most_recent_snapshot(
        &self,
        user_id: &str,
    ) -> Result<Option<ProfileSnapshot>, StorageError>;

    async fn append_snapshot(&self, snapshot: &ProfileSnapshot) -> Result<(), StorageError>;

    /// Up to `limit` snapshots, newest first.
    async fn list_snapshots(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ProfileSnapshot>, StorageError>;
}
