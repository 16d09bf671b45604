use founderos_core::{BuilderProfile, ProfileSnapshot};
use rusqlite::{OptionalExtension as _, Row, params};

use super::{Storage, format_timestamp, get_conn, log_row_error, required_timestamp};
use crate::error::StorageError;

const SNAPSHOT_COLUMNS: &str =
    "user_id, builder_mode, execution_style, dominant_pattern, friction_type, recorded_at";

impl Storage {
    /// # Errors
    /// Returns error if the upsert fails.
    pub fn upsert_profile(&self, profile: &BuilderProfile) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO builder_profiles
               (user_id, builder_mode, dominant_pattern, execution_style, friction_type,
                summary_label, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(user_id) DO UPDATE SET
               builder_mode = excluded.builder_mode,
               dominant_pattern = excluded.dominant_pattern,
               execution_style = excluded.execution_style,
               friction_type = excluded.friction_type,
               summary_label = excluded.summary_label,
               updated_at = excluded.updated_at",
            params![
                profile.user_id,
                profile.builder_mode,
                profile.dominant_pattern,
                profile.execution_style,
                profile.friction_type,
                profile.summary_label,
                format_timestamp(profile.updated_at),
            ],
        )?;
        Ok(())
    }

    /// # Errors
    /// Returns error if the query fails or the stored row is corrupt.
    pub fn get_profile(&self, user_id: &str) -> Result<Option<BuilderProfile>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let profile = conn
            .query_row(
                "SELECT user_id, builder_mode, dominant_pattern, execution_style, friction_type,
                        summary_label, updated_at
                 FROM builder_profiles WHERE user_id = ?1",
                params![user_id],
                |row| {
                    Ok(BuilderProfile {
                        user_id: row.get(0)?,
                        builder_mode: row.get(1)?,
                        dominant_pattern: row.get(2)?,
                        execution_style: row.get(3)?,
                        friction_type: row.get(4)?,
                        summary_label: row.get(5)?,
                        updated_at: required_timestamp(6, &row.get::<_, String>(6)?)?,
                    })
                },
            )
            .optional()?;
        Ok(profile)
    }

    /// Newest readable snapshot. Corrupt rows are skipped with a warning.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub fn most_recent_snapshot(
        &self,
        user_id: &str,
    ) -> Result<Option<ProfileSnapshot>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SNAPSHOT_COLUMNS} FROM profile_snapshots WHERE user_id = ?1
             ORDER BY recorded_at DESC, id DESC"
        ))?;
        let snapshot = stmt.query_map(params![user_id], row_to_snapshot)?.find_map(log_row_error);
        Ok(snapshot)
    }

    /// # Errors
    /// Returns error if the insert fails.
    pub fn append_snapshot(&self, snapshot: &ProfileSnapshot) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            &format!(
                "INSERT INTO profile_snapshots ({SNAPSHOT_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"
            ),
            params![
                snapshot.user_id,
                snapshot.builder_mode,
                snapshot.execution_style,
                snapshot.dominant_pattern,
                snapshot.friction_type,
                format_timestamp(snapshot.recorded_at),
            ],
        )?;
        Ok(())
    }

    /// # Errors
    /// Returns error if the query fails.
    pub fn list_snapshots(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ProfileSnapshot>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SNAPSHOT_COLUMNS} FROM profile_snapshots WHERE user_id = ?1
             ORDER BY recorded_at DESC, id DESC LIMIT ?2"
        ))?;
        let snapshots = stmt
            .query_map(params![user_id, i64::try_from(limit).unwrap_or(i64::MAX)], row_to_snapshot)?
            .filter_map(log_row_error)
            .collect();
        Ok(snapshots)
    }
}

fn row_to_snapshot(row: &Row<'_>) -> rusqlite::Result<ProfileSnapshot> {
    Ok(ProfileSnapshot {
        user_id: row.get(0)?,
        builder_mode: row.get(1)?,
        execution_style: row.get(2)?,
        dominant_pattern: row.get(3)?,
        friction_type: row.get(4)?,
        recorded_at: required_timestamp(5, &row.get::<_, String>(5)?)?,
    })
}
