//! PostgreSQL schema migrations for FounderOS storage.
//!
//! Every statement is idempotent, so this runs on each startup.

use sqlx::PgPool;

const STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS activity_logs (
        seq BIGSERIAL UNIQUE,
        id TEXT PRIMARY KEY,
        project_id TEXT NOT NULL,
        user_id TEXT NOT NULL,
        content TEXT NOT NULL,
        log_type TEXT,
        created_at TIMESTAMPTZ
    )",
    "CREATE INDEX IF NOT EXISTS idx_activity_user_created
        ON activity_logs (user_id, created_at DESC)",
    "CREATE TABLE IF NOT EXISTS patterns (
        user_id TEXT NOT NULL,
        pattern_type TEXT NOT NULL,
        pattern_label TEXT NOT NULL,
        explanation TEXT NOT NULL,
        confidence_score DOUBLE PRECISION NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL,
        PRIMARY KEY (user_id, pattern_type)
    )",
    "CREATE TABLE IF NOT EXISTS builder_profiles (
        user_id TEXT PRIMARY KEY,
        builder_mode TEXT NOT NULL,
        dominant_pattern TEXT NOT NULL,
        execution_style TEXT NOT NULL,
        friction_type TEXT NOT NULL,
        summary_label TEXT NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS profile_snapshots (
        id BIGSERIAL PRIMARY KEY,
        user_id TEXT NOT NULL,
        builder_mode TEXT NOT NULL,
        execution_style TEXT NOT NULL,
        dominant_pattern TEXT NOT NULL,
        friction_type TEXT NOT NULL,
        recorded_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_snapshots_user_recorded
        ON profile_snapshots (user_id, recorded_at DESC, id DESC)",
    "CREATE TABLE IF NOT EXISTS drift_records (
        user_id TEXT PRIMARY KEY,
        summary TEXT NOT NULL,
        severity TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS chatter_sessions (
        id BIGSERIAL PRIMARY KEY,
        user_id TEXT NOT NULL,
        project_id TEXT,
        ai_interaction_minutes DOUBLE PRECISION NOT NULL,
        execution_minutes DOUBLE PRECISION NOT NULL,
        chatter_ratio DOUBLE PRECISION NOT NULL,
        model_used TEXT,
        session_date DATE NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS idx_chatter_user_date ON chatter_sessions (user_id, session_date)",
];

/// Run all PostgreSQL migrations.
///
/// # Errors
/// Returns the first failing statement's error.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    for &statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::info!("PostgreSQL schema up to date");
    Ok(())
}
