//! ProfileStore and SnapshotStore implementations for PgStorage.

use async_trait::async_trait;
use founderos_core::{BuilderProfile, ProfileSnapshot};
use sqlx::Row;

use super::{PgStorage, collect_rows, row_to_snapshot, usize_to_i64};
use crate::error::StorageError;
use crate::traits::{ProfileStore, SnapshotStore};

const SNAPSHOT_COLUMNS: &str =
    "user_id, builder_mode, execution_style, dominant_pattern, friction_type, recorded_at";

/// Rows examined when looking for the newest readable snapshot.
const SNAPSHOT_SCAN_LIMIT: usize = 16;

#[async_trait]
impl ProfileStore for PgStorage {
    async fn upsert_profile(&self, profile: &BuilderProfile) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO builder_profiles
               (user_id, builder_mode, dominant_pattern, execution_style, friction_type,
                summary_label, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (user_id) DO UPDATE SET
               builder_mode = EXCLUDED.builder_mode,
               dominant_pattern = EXCLUDED.dominant_pattern,
               execution_style = EXCLUDED.execution_style,
               friction_type = EXCLUDED.friction_type,
               summary_label = EXCLUDED.summary_label,
               updated_at = EXCLUDED.updated_at",
        )
        .bind(&profile.user_id)
        .bind(&profile.builder_mode)
        .bind(&profile.dominant_pattern)
        .bind(&profile.execution_style)
        .bind(&profile.friction_type)
        .bind(&profile.summary_label)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<BuilderProfile>, StorageError> {
        let row = sqlx::query(
            "SELECT user_id, builder_mode, dominant_pattern, execution_style, friction_type,
                    summary_label, updated_at
             FROM builder_profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| {
            Ok(BuilderProfile {
                user_id: r.try_get("user_id")?,
                builder_mode: r.try_get("builder_mode")?,
                dominant_pattern: r.try_get("dominant_pattern")?,
                execution_style: r.try_get("execution_style")?,
                friction_type: r.try_get("friction_type")?,
                summary_label: r.try_get("summary_label")?,
                updated_at: r.try_get("updated_at")?,
            })
        })
        .transpose()
    }
}

#[async_trait]
impl SnapshotStore for PgStorage {
    async fn most_recent_snapshot(
        &self,
        user_id: &str,
    ) -> Result<Option<ProfileSnapshot>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {SNAPSHOT_COLUMNS} FROM profile_snapshots WHERE user_id = $1
             ORDER BY recorded_at DESC, id DESC LIMIT $2"
        ))
        .bind(user_id)
        .bind(usize_to_i64(SNAPSHOT_SCAN_LIMIT))
        .fetch_all(&self.pool)
        .await?;
        Ok(collect_rows(&rows, row_to_snapshot).into_iter().next())
    }

    async fn append_snapshot(&self, snapshot: &ProfileSnapshot) -> Result<(), StorageError> {
        sqlx::query(&format!(
            "INSERT INTO profile_snapshots ({SNAPSHOT_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6)"
        ))
        .bind(&snapshot.user_id)
        .bind(&snapshot.builder_mode)
        .bind(&snapshot.execution_style)
        .bind(&snapshot.dominant_pattern)
        .bind(&snapshot.friction_type)
        .bind(snapshot.recorded_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn list_snapshots(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ProfileSnapshot>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {SNAPSHOT_COLUMNS} FROM profile_snapshots WHERE user_id = $1
             ORDER BY recorded_at DESC, id DESC LIMIT $2"
        ))
        .bind(user_id)
        .bind(usize_to_i64(limit))
        .fetch_all(&self.pool)
        .await?;
        Ok(collect_rows(&rows, row_to_snapshot))
    }
}
