//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p founderos-storage --features postgres -- --ignored pg_

#![cfg(feature = "postgres")]
#![allow(clippy::unwrap_used, reason = "integration test code")]

use chrono::{NaiveDate, SubsecRound as _, Utc};
use founderos_core::{
    ActivityLog, BuilderProfile, ChatterSession, DriftRecord, DriftSeverity, LogType, Pattern,
    PatternType, ProfileSnapshot,
};
use founderos_storage::PgStorage;
use founderos_storage::traits::{
    ActivityStore, ChatterStore, DriftStore, PatternStore, ProfileStore, SnapshotStore,
};
use uuid::Uuid;

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url).await.expect("Failed to connect to PostgreSQL")
}

fn unique_id() -> String {
    format!("test-{}", Uuid::new_v4())
}

fn make_profile(user: &str, mode: &str) -> BuilderProfile {
    BuilderProfile {
        user_id: user.to_owned(),
        builder_mode: mode.to_owned(),
        dominant_pattern: "Deep Focus (focus)".to_owned(),
        execution_style: "Shipper".to_owned(),
        friction_type: "Minimal".to_owned(),
        summary_label: format!("{mode} • Shipper"),
        updated_at: Utc::now().trunc_subsecs(6),
    }
}

#[tokio::test]
#[ignore]
async fn pg_save_and_list_logs() {
    let storage = create_pg_storage().await;
    let user = unique_id();
    let now = Utc::now().trunc_subsecs(6);
    let log = ActivityLog::new(
        unique_id(),
        "P1".to_owned(),
        user.clone(),
        "shipped the button".to_owned(),
        LogType::Update,
        now,
    );
    storage.save_log(&log).await.unwrap();

    let err = storage.save_log(&log).await.unwrap_err();
    assert!(err.is_duplicate(), "second insert with same id should be a duplicate");

    let logs = storage.list_logs(&user, Some("P1")).await.unwrap();
    assert_eq!(logs, vec![log]);
    assert!(storage.list_user_ids().await.unwrap().contains(&user));
}

#[tokio::test]
#[ignore]
async fn pg_pattern_upsert_keeps_one_row() {
    let storage = create_pg_storage().await;
    let user = unique_id();
    for label in ["Calibrating", "Deep Focus"] {
        let pattern = Pattern::new(
            user.clone(),
            PatternType::Focus,
            label.to_owned(),
            String::new(),
            0.95,
            Utc::now(),
        );
        storage.upsert_pattern(&pattern).await.unwrap();
    }
    let patterns = storage.list_patterns(&user).await.unwrap();
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].pattern_label, "Deep Focus");
}

#[tokio::test]
#[ignore]
async fn pg_profile_snapshot_and_drift() {
    let storage = create_pg_storage().await;
    let user = unique_id();

    let profile = make_profile(&user, "Steady Builder");
    storage.upsert_profile(&profile).await.unwrap();
    storage.upsert_profile(&make_profile(&user, "Burst Builder")).await.unwrap();
    let stored = storage.get_profile(&user).await.unwrap().unwrap();
    assert_eq!(stored.builder_mode, "Burst Builder");

    storage.append_snapshot(&ProfileSnapshot::from_profile(&profile, Utc::now())).await.unwrap();
    storage.append_snapshot(&ProfileSnapshot::from_profile(&stored, Utc::now())).await.unwrap();
    let latest = storage.most_recent_snapshot(&user).await.unwrap().unwrap();
    assert_eq!(latest.builder_mode, "Burst Builder");
    assert_eq!(storage.list_snapshots(&user, 10).await.unwrap().len(), 2);

    let record = DriftRecord {
        user_id: user.clone(),
        summary: "System drift detected: Mode shifted from Steady Builder to Burst Builder."
            .to_owned(),
        severity: DriftSeverity::MinorShift,
        created_at: Utc::now().trunc_subsecs(6),
    };
    storage.upsert_drift(&record).await.unwrap();
    assert_eq!(storage.get_drift(&user).await.unwrap(), Some(record));
}

#[tokio::test]
#[ignore]
async fn pg_chatter_sessions_since() {
    let storage = create_pg_storage().await;
    let user = unique_id();
    for day in [1, 5, 9] {
        let session = ChatterSession {
            user_id: user.clone(),
            project_id: None,
            ai_interaction_minutes: 20.0,
            execution_minutes: 40.0,
            chatter_ratio: 20.0 / 60.0,
            model_used: Some("claude".to_owned()),
            session_date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
        };
        storage.save_chatter_session(&session).await.unwrap();
    }
    let since = NaiveDate::from_ymd_opt(2026, 3, 5);
    let sessions = storage.list_chatter_sessions(&user, since).await.unwrap();
    assert_eq!(sessions.len(), 2);
    assert!(sessions[0].session_date < sessions[1].session_date);
}
