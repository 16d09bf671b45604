//! DriftStore implementation for PgStorage.

use async_trait::async_trait;
use founderos_core::DriftRecord;
use sqlx::Row;

use super::{PgStorage, parse_pg_enum};
use crate::error::StorageError;
use crate::traits::DriftStore;

#[async_trait]
impl DriftStore for PgStorage {
    async fn upsert_drift(&self, record: &DriftRecord) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO drift_records (user_id, summary, severity, created_at)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id) DO UPDATE SET
               summary = EXCLUDED.summary,
               severity = EXCLUDED.severity,
               created_at = EXCLUDED.created_at",
        )
        .bind(&record.user_id)
        .bind(&record.summary)
        .bind(record.severity.as_str())
        .bind(record.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_drift(&self, user_id: &str) -> Result<Option<DriftRecord>, StorageError> {
        let row = sqlx::query(
            "SELECT user_id, summary, severity, created_at FROM drift_records WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| {
            Ok(DriftRecord {
                user_id: r.try_get("user_id")?,
                summary: r.try_get("summary")?,
                severity: parse_pg_enum("severity", &r.try_get::<String, _>("severity")?)?,
                created_at: r.try_get("created_at")?,
            })
        })
        .transpose()
    }
}
