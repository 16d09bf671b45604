use async_trait::async_trait;
use founderos_core::DriftRecord;

use crate::error::StorageError;

/// Latest drift assessment per user.
#[async_trait]
pub trait DriftStore: Send + Sync {
    async fn upsert_drift(&self, record: &DriftRecord) -> Result<(), StorageError>;

    async fn get_drift(&self, user_id: &str) -> Result<Option<DriftRecord>, StorageError>;
}
