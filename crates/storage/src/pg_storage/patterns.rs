//! PatternStore implementation for PgStorage.

use async_trait::async_trait;
use founderos_core::{Pattern, sort_by_pattern_type};

use super::{PgStorage, collect_rows, row_to_pattern};
use crate::error::StorageError;
use crate::traits::PatternStore;

#[async_trait]
impl PatternStore for PgStorage {
    async fn upsert_pattern(&self, pattern: &Pattern) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO patterns
               (user_id, pattern_type, pattern_label, explanation, confidence_score, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (user_id, pattern_type) DO UPDATE SET
               pattern_label = EXCLUDED.pattern_label,
               explanation = EXCLUDED.explanation,
               confidence_score = EXCLUDED.confidence_score,
               updated_at = EXCLUDED.updated_at",
        )
        .bind(&pattern.user_id)
        .bind(pattern.pattern_type.as_str())
        .bind(&pattern.pattern_label)
        .bind(&pattern.explanation)
        .bind(pattern.confidence_score)
        .bind(pattern.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_patterns(&self, user_id: &str) -> Result<Vec<Pattern>, StorageError> {
        let rows = sqlx::query(
            "SELECT user_id, pattern_type, pattern_label, explanation, confidence_score, updated_at
             FROM patterns WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        let mut patterns = collect_rows(&rows, row_to_pattern);
        sort_by_pattern_type(&mut patterns);
        Ok(patterns)
    }
}
