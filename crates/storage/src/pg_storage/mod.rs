//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

#![allow(clippy::absolute_paths, reason = "std paths in error handling are clear")]

mod activity;
mod chatter;
mod drift;
mod patterns;
mod profiles;

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use founderos_core::{
    ActivityLog, ChatterSession, LogType, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS, Pattern, ProfileSnapshot,
};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use super::pg_migrations::run_pg_migrations;
use crate::error::StorageError;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect and run migrations.
    ///
    /// # Errors
    /// Returns error if the connection or a migration fails.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

/// Convert `usize` to `i64` for SQL LIMIT binds.
/// Saturates to `i64::MAX` on overflow (only possible on 128-bit targets).
pub(crate) fn usize_to_i64(val: usize) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

/// Parse a text column into an enum, reporting unknown values as corruption.
pub(crate) fn parse_pg_enum<T>(column: &str, raw: &str) -> Result<T, StorageError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse().map_err(|e| StorageError::corrupt(format!("invalid {column} '{raw}'"), e))
}

/// Keep readable rows, logging and dropping the rest.
pub(crate) fn collect_rows<T>(
    rows: &[PgRow],
    map: impl Fn(&PgRow) -> Result<T, StorageError>,
) -> Vec<T> {
    rows.iter()
        .filter_map(|row| match map(row) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("Row read error: {}", e);
                None
            },
        })
        .collect()
}

pub(crate) fn row_to_log(row: &PgRow) -> Result<ActivityLog, StorageError> {
    let id: String = row.try_get("id")?;
    let log_type = row.try_get::<Option<String>, _>("log_type")?.and_then(|raw| {
        LogType::from_str(&raw)
            .map_err(|e| {
                tracing::warn!(log_id = %id, error = %e, "corrupt log_type in DB, treating as missing");
            })
            .ok()
    });
    let created_at: Option<DateTime<Utc>> = row.try_get("created_at")?;
    Ok(ActivityLog {
        project_id: row.try_get("project_id")?,
        user_id: row.try_get("user_id")?,
        content: row.try_get("content")?,
        id,
        log_type,
        created_at,
    })
}

pub(crate) fn row_to_pattern(row: &PgRow) -> Result<Pattern, StorageError> {
    Ok(Pattern {
        user_id: row.try_get("user_id")?,
        pattern_type: parse_pg_enum("pattern_type", &row.try_get::<String, _>("pattern_type")?)?,
        pattern_label: row.try_get("pattern_label")?,
        explanation: row.try_get("explanation")?,
        confidence_score: row.try_get("confidence_score")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub(crate) fn row_to_snapshot(row: &PgRow) -> Result<ProfileSnapshot, StorageError> {
    Ok(ProfileSnapshot {
        user_id: row.try_get("user_id")?,
        builder_mode: row.try_get("builder_mode")?,
        execution_style: row.try_get("execution_style")?,
        dominant_pattern: row.try_get("dominant_pattern")?,
        friction_type: row.try_get("friction_type")?,
        recorded_at: row.try_get("recorded_at")?,
    })
}

pub(crate) fn row_to_chatter(row: &PgRow) -> Result<ChatterSession, StorageError> {
    let session_date: NaiveDate = row.try_get("session_date")?;
    Ok(ChatterSession {
        user_id: row.try_get("user_id")?,
        project_id: row.try_get("project_id")?,
        ai_interaction_minutes: row.try_get("ai_interaction_minutes")?,
        execution_minutes: row.try_get("execution_minutes")?,
        chatter_ratio: row.try_get("chatter_ratio")?,
        model_used: row.try_get("model_used")?,
        session_date,
    })
}
