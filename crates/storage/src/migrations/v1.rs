//! Migration v1: Initial schema
//!
//! `log_type` and `created_at` on `activity_logs` are nullable: rows written
//! by other tools may lack them, and readers treat such rows as malformed.

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS activity_logs (
    id TEXT PRIMARY KEY,
    project_id TEXT NOT NULL,
    user_id TEXT NOT NULL,
    content TEXT NOT NULL,
    log_type TEXT,
    created_at TEXT
);

CREATE TABLE IF NOT EXISTS patterns (
    user_id TEXT NOT NULL,
    pattern_type TEXT NOT NULL,
    pattern_label TEXT NOT NULL,
    explanation TEXT NOT NULL,
    confidence_score REAL NOT NULL,
    updated_at TEXT NOT NULL,
    PRIMARY KEY (user_id, pattern_type)
);

CREATE TABLE IF NOT EXISTS builder_profiles (
    user_id TEXT PRIMARY KEY,
    builder_mode TEXT NOT NULL,
    dominant_pattern TEXT NOT NULL,
    execution_style TEXT NOT NULL,
    friction_type TEXT NOT NULL,
    summary_label TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS profile_snapshots (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    builder_mode TEXT NOT NULL,
    execution_style TEXT NOT NULL,
    dominant_pattern TEXT NOT NULL,
    friction_type TEXT NOT NULL,
    recorded_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS drift_records (
    user_id TEXT PRIMARY KEY,
    summary TEXT NOT NULL,
    severity TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS chatter_sessions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id TEXT NOT NULL,
    project_id TEXT,
    ai_interaction_minutes REAL NOT NULL,
    execution_minutes REAL NOT NULL,
    chatter_ratio REAL NOT NULL,
    model_used TEXT,
    session_date TEXT NOT NULL
);
";
