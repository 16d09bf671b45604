use founderos_core::{ActivityLog, LogType};
use rusqlite::{Row, params};

use super::{Storage, format_timestamp, get_conn, log_row_error, parse_timestamp};
use crate::error::StorageError;

const LOG_COLUMNS: &str = "id, project_id, user_id, content, log_type, created_at";

impl Storage {
    /// Append an activity log.
    ///
    /// # Errors
    /// Returns `Duplicate` if a log with the same id exists.
    pub fn save_log(&self, log: &ActivityLog) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            &format!("INSERT INTO activity_logs ({LOG_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6)"),
            params![
                log.id,
                log.project_id,
                log.user_id,
                log.content,
                log.log_type.map(|t| t.as_str()),
                log.created_at.map(format_timestamp),
            ],
        )?;
        Ok(())
    }

    /// Logs of a user, newest first, undated rows last.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub fn list_logs(
        &self,
        user_id: &str,
        project_id: Option<&str>,
    ) -> Result<Vec<ActivityLog>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {LOG_COLUMNS} FROM activity_logs
             WHERE user_id = ?1 AND (?2 IS NULL OR project_id = ?2)
             ORDER BY created_at IS NULL, created_at DESC, rowid DESC"
        ))?;
        let logs = stmt
            .query_map(params![user_id, project_id], row_to_log)?
            .filter_map(log_row_error)
            .collect();
        Ok(logs)
    }

    /// Distinct users across activity logs and chatter sessions.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub fn list_user_ids(&self) -> Result<Vec<String>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT user_id FROM activity_logs
             UNION
             SELECT user_id FROM profile_snapshots
             UNION
             SELECT user_id FROM chatter_sessions
             ORDER BY user_id",
        )?;
        let ids = stmt.query_map([], |row| row.get(0))?.filter_map(log_row_error).collect();
        Ok(ids)
    }
}

/// Unreadable `log_type` / `created_at` values become `None` instead of failing the row.
fn row_to_log(row: &Row<'_>) -> rusqlite::Result<ActivityLog> {
    let id: String = row.get(0)?;
    let log_type: Option<String> = row.get(4)?;
    let created_at: Option<String> = row.get(5)?;

    let log_type = log_type.and_then(|raw| match raw.parse::<LogType>() {
        Ok(t) => Some(t),
        Err(e) => {
            tracing::warn!(log_id = %id, error = %e, "corrupt log_type in DB, treating as missing");
            None
        },
    });
    let created_at = created_at.and_then(|raw| match parse_timestamp(&raw) {
        Ok(ts) => Some(ts),
        Err(e) => {
            tracing::warn!(log_id = %id, error = %e, "corrupt created_at in DB, treating as missing");
            None
        },
    });

    Ok(ActivityLog {
        project_id: row.get(1)?,
        user_id: row.get(2)?,
        content: row.get(3)?,
        id,
        log_type,
        created_at,
    })
}
