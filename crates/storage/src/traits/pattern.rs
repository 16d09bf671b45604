use async_trait::async_trait;
use founderos_core::Pattern;

use crate::error::StorageError;

/// Current pattern per `(user_id, pattern_type)`.
#[async_trait]
pub trait PatternStore: Send + Sync {
    /// Insert or replace the user's pattern of this type.
    async fn upsert_pattern(&self, pattern: &Pattern) -> Result<(), StorageError>;

    /// The user's current patterns in canonical type order.
    async fn list_patterns(&self, user_id: &str) -> Result<Vec<Pattern>, StorageError>;
}
