//! ActivityStore implementation for PgStorage.

use async_trait::async_trait;
use founderos_core::ActivityLog;

use super::{PgStorage, collect_rows, row_to_log};
use crate::error::StorageError;
use crate::traits::ActivityStore;

const LOG_COLUMNS: &str = "id, project_id, user_id, content, log_type, created_at";

#[async_trait]
impl ActivityStore for PgStorage {
    async fn save_log(&self, log: &ActivityLog) -> Result<(), StorageError> {
        sqlx::query(&format!(
            "INSERT INTO activity_logs ({LOG_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6)"
        ))
        .bind(&log.id)
        .bind(&log.project_id)
        .bind(&log.user_id)
        .bind(&log.content)
        .bind(log.log_type.map(|t| t.as_str()))
        .bind(log.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_logs(
        &self,
        user_id: &str,
        project_id: Option<&str>,
    ) -> Result<Vec<ActivityLog>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {LOG_COLUMNS} FROM activity_logs
             WHERE user_id = $1 AND ($2::TEXT IS NULL OR project_id = $2)
             ORDER BY created_at DESC NULLS LAST, seq DESC"
        ))
        .bind(user_id)
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(collect_rows(&rows, row_to_log))
    }

    async fn list_user_ids(&self) -> Result<Vec<String>, StorageError> {
        let ids: Vec<String> = sqlx::query_scalar(
            "SELECT user_id FROM activity_logs
             UNION
             SELECT user_id FROM profile_snapshots
             UNION
             SELECT user_id FROM chatter_sessions
             ORDER BY user_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(ids)
    }
}
