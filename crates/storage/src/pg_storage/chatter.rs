//! ChatterStore implementation for PgStorage.

use async_trait::async_trait;
use chrono::NaiveDate;
use founderos_core::ChatterSession;

use super::{PgStorage, collect_rows, row_to_chatter};
use crate::error::StorageError;
use crate::traits::ChatterStore;

const CHATTER_COLUMNS: &str = "user_id, project_id, ai_interaction_minutes, execution_minutes, \
                               chatter_ratio, model_used, session_date";

#[async_trait]
impl ChatterStore for PgStorage {
    async fn save_chatter_session(&self, session: &ChatterSession) -> Result<(), StorageError> {
        sqlx::query(&format!(
            "INSERT INTO chatter_sessions ({CHATTER_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7)"
        ))
        .bind(&session.user_id)
        .bind(&session.project_id)
        .bind(session.ai_interaction_minutes)
        .bind(session.execution_minutes)
        .bind(session.chatter_ratio)
        .bind(&session.model_used)
        .bind(session.session_date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_chatter_sessions(
        &self,
        user_id: &str,
        since: Option<NaiveDate>,
    ) -> Result<Vec<ChatterSession>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {CHATTER_COLUMNS} FROM chatter_sessions
             WHERE user_id = $1 AND ($2::DATE IS NULL OR session_date >= $2)
             ORDER BY session_date ASC, id ASC"
        ))
        .bind(user_id)
        .bind(since)
        .fetch_all(&self.pool)
        .await?;
        Ok(collect_rows(&rows, row_to_chatter))
    }
}
