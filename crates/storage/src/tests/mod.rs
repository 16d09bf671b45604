//! Test utilities and module declarations for storage tests.

use chrono::{DateTime, NaiveDate, TimeZone as _, Utc};
use founderos_core::{ActivityLog, BuilderProfile, ChatterSession, LogType};
use tempfile::TempDir;

use crate::Storage;

#[allow(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

/// Fixed instant `minutes` after 2026-03-01T09:00:00Z.
#[allow(clippy::unwrap_used, reason = "test code")]
pub fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap() + chrono::Duration::minutes(minutes)
}

pub fn create_test_log(id: &str, user: &str, project: &str, minutes: i64) -> ActivityLog {
    ActivityLog::new(
        id.to_owned(),
        project.to_owned(),
        user.to_owned(),
        format!("worked on {project}"),
        LogType::Update,
        at(minutes),
    )
}

pub fn create_test_profile(user: &str, mode: &str, friction: &str) -> BuilderProfile {
    BuilderProfile {
        user_id: user.to_owned(),
        builder_mode: mode.to_owned(),
        dominant_pattern: "Deep Focus (focus)".to_owned(),
        execution_style: "Shipper".to_owned(),
        friction_type: friction.to_owned(),
        summary_label: format!("{mode} • Shipper"),
        updated_at: at(0),
    }
}

#[allow(clippy::unwrap_used, reason = "test code")]
pub fn create_test_chatter(user: &str, day: u32, ai: f64, exec: f64) -> ChatterSession {
    ChatterSession {
        user_id: user.to_owned(),
        project_id: Some("P1".to_owned()),
        ai_interaction_minutes: ai,
        execution_minutes: exec,
        chatter_ratio: ai / (ai + exec),
        model_used: Some("gpt-4o".to_owned()),
        session_date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
    }
}

mod chatter_tests;

#[test]
#[allow(clippy::unwrap_used, reason = "test code")]
fn migrations_are_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("reopen.db");
    let storage = Storage::new(&db_path).unwrap();
    storage.save_log(&create_test_log("log-1", "user-1", "P1", 0)).unwrap();
    drop(storage);

    let reopened = Storage::new(&db_path).unwrap();
    assert_eq!(reopened.list_logs("user-1", None).unwrap().len(), 1);
}
