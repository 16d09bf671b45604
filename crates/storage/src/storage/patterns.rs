use founderos_core::{Pattern, sort_by_pattern_type};
use rusqlite::{Row, params};

use super::{
    Storage, format_timestamp, get_conn, log_row_error, required_enum, required_timestamp,
};
use crate::error::StorageError;

impl Storage {
    /// Insert or replace the pattern for `(user_id, pattern_type)`.
    ///
    /// # Errors
    /// Returns error if the upsert fails.
    pub fn upsert_pattern(&self, pattern: &Pattern) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO patterns
               (user_id, pattern_type, pattern_label, explanation, confidence_score, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(user_id, pattern_type) DO UPDATE SET
               pattern_label = excluded.pattern_label,
               explanation = excluded.explanation,
               confidence_score = excluded.confidence_score,
               updated_at = excluded.updated_at",
            params![
                pattern.user_id,
                pattern.pattern_type.as_str(),
                pattern.pattern_label,
                pattern.explanation,
                pattern.confidence_score,
                format_timestamp(pattern.updated_at),
            ],
        )?;
        Ok(())
    }

    /// Current patterns of a user in canonical type order.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub fn list_patterns(&self, user_id: &str) -> Result<Vec<Pattern>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT user_id, pattern_type, pattern_label, explanation, confidence_score, updated_at
             FROM patterns WHERE user_id = ?1",
        )?;
        let mut patterns: Vec<Pattern> =
            stmt.query_map(params![user_id], row_to_pattern)?.filter_map(log_row_error).collect();
        sort_by_pattern_type(&mut patterns);
        Ok(patterns)
    }
}

fn row_to_pattern(row: &Row<'_>) -> rusqlite::Result<Pattern> {
    Ok(Pattern {
        user_id: row.get(0)?,
        pattern_type: required_enum(1, &row.get::<_, String>(1)?)?,
        pattern_label: row.get(2)?,
        explanation: row.get(3)?,
        confidence_score: row.get(4)?,
        updated_at: required_timestamp(5, &row.get::<_, String>(5)?)?,
    })
}
