use chrono::NaiveDate;
use founderos_core::ChatterSession;
use rusqlite::{Row, params};

use super::{Storage, get_conn, log_row_error, required_date};
use crate::error::StorageError;

const CHATTER_COLUMNS: &str = "user_id, project_id, ai_interaction_minutes, execution_minutes, \
                               chatter_ratio, model_used, session_date";

impl Storage {
    /// # Errors
    /// Returns error if the insert fails.
    pub fn save_chatter_session(&self, session: &ChatterSession) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            &format!(
                "INSERT INTO chatter_sessions ({CHATTER_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"
            ),
            params![
                session.user_id,
                session.project_id,
                session.ai_interaction_minutes,
                session.execution_minutes,
                session.chatter_ratio,
                session.model_used,
                session.session_date.to_string(),
            ],
        )?;
        Ok(())
    }

    /// Sessions oldest first, optionally from `since` (inclusive).
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub fn list_chatter_sessions(
        &self,
        user_id: &str,
        since: Option<NaiveDate>,
    ) -> Result<Vec<ChatterSession>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {CHATTER_COLUMNS} FROM chatter_sessions
             WHERE user_id = ?1 AND (?2 IS NULL OR session_date >= ?2)
             ORDER BY session_date ASC, id ASC"
        ))?;
        let sessions = stmt
            .query_map(params![user_id, since.map(|d| d.to_string())], row_to_session)?
            .filter_map(log_row_error)
            .collect();
        Ok(sessions)
    }
}

fn row_to_session(row: &Row<'_>) -> rusqlite::Result<ChatterSession> {
    Ok(ChatterSession {
        user_id: row.get(0)?,
        project_id: row.get(1)?,
        ai_interaction_minutes: row.get(2)?,
        execution_minutes: row.get(3)?,
        chatter_ratio: row.get(4)?,
        model_used: row.get(5)?,
        session_date: required_date(6, &row.get::<_, String>(6)?)?,
    })
}
