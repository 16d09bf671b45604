use founderos_core::DriftRecord;
use rusqlite::{OptionalExtension as _, params};

use super::{Storage, format_timestamp, get_conn, required_enum, required_timestamp};
use crate::error::StorageError;

impl Storage {
    /// # Errors
    /// Returns error if the upsert fails.
    pub fn upsert_drift(&self, record: &DriftRecord) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO drift_records (user_id, summary, severity, created_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(user_id) DO UPDATE SET
               summary = excluded.summary,
               severity = excluded.severity,
               created_at = excluded.created_at",
            params![
                record.user_id,
                record.summary,
                record.severity.as_str(),
                format_timestamp(record.created_at),
            ],
        )?;
        Ok(())
    }

    /// # Errors
    /// Returns error if the query fails or the stored row is corrupt.
    pub fn get_drift(&self, user_id: &str) -> Result<Option<DriftRecord>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let record = conn
            .query_row(
                "SELECT user_id, summary, severity, created_at FROM drift_records WHERE user_id = ?1",
                params![user_id],
                |row| {
                    Ok(DriftRecord {
                        user_id: row.get(0)?,
                        summary: row.get(1)?,
                        severity: required_enum(2, &row.get::<_, String>(2)?)?,
                        created_at: required_timestamp(3, &row.get::<_, String>(3)?)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }
}
