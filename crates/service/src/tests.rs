#![allow(clippy::unwrap_used, reason = "test code")]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{Duration, NaiveDate, Utc};
use founderos_core::{ActivityLog, ChatterMode, DriftSeverity, LogType, ProfileSnapshot};
use founderos_storage::StorageBackend;
use founderos_storage::traits::{ActivityStore, ProfileStore, SnapshotStore};
use tempfile::TempDir;

use crate::{
    ActivityService, AnalysisPipeline, ChatterService, InsightService, NewActivityLog,
    NewChatterSession, ServiceError, Stage, StageOutcome,
};

struct Harness {
    storage: Arc<StorageBackend>,
    pipeline: Arc<AnalysisPipeline>,
    db_path: PathBuf,
    _dir: TempDir,
}

fn harness() -> Harness {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("svc.db");
    let storage = Arc::new(StorageBackend::new_sqlite(&db_path).unwrap());
    let pipeline = Arc::new(AnalysisPipeline::new(Arc::clone(&storage)));
    Harness { storage, pipeline, db_path, _dir: dir }
}

impl Harness {
    /// Write to the database behind the service's back.
    fn raw_sql(&self, sql: &str) {
        let conn = rusqlite::Connection::open(&self.db_path).unwrap();
        conn.execute_batch(sql).unwrap();
    }

    async fn seed_shipping_logs(&self, user: &str, count: usize) {
        for i in 0..count {
            self.storage
                .save_log(&ActivityLog::new(
                    format!("{user}-log-{i}"),
                    "P1".to_owned(),
                    user.to_owned(),
                    "deployed the api".to_owned(),
                    LogType::Update,
                    Utc::now() - Duration::minutes(5),
                ))
                .await
                .unwrap();
        }
    }

    fn activity(&self) -> ActivityService {
        ActivityService::new(Arc::clone(&self.storage), Arc::clone(&self.pipeline))
    }

    fn insights(&self) -> InsightService {
        InsightService::new(Arc::clone(&self.storage))
    }
}

fn shipped(user: &str) -> NewActivityLog {
    NewActivityLog {
        user_id: user.to_owned(),
        project_id: "P1".to_owned(),
        content: "shipped the new button".to_owned(),
        log_type: "update".to_owned(),
    }
}

#[tokio::test]
async fn empty_history_still_establishes_a_baseline() {
    let h = harness();
    let report = h.pipeline.run("nobody").await.unwrap();

    assert_eq!(report.log_count, 0);
    assert_eq!(report.outcome(Stage::Patterns), Some(&StageOutcome::Completed));
    // Detectors still emit their insufficient-data labels.
    assert_eq!(report.patterns.len(), 4);
    assert_eq!(report.outcome(Stage::Profile), Some(&StageOutcome::Completed));
    assert!(report.drift.is_some());
}

#[tokio::test]
async fn five_shipping_logs_build_a_deep_focus_shipper() {
    let h = harness();
    let activity = h.activity();
    for _ in 0..4 {
        activity.log_activity(shipped("user-1")).await.unwrap();
    }
    let (_, report) = activity.log_and_analyze(shipped("user-1")).await.unwrap();

    assert!(report.is_complete(), "{:?}", report.stages);
    let profile = report.profile.unwrap();
    assert_eq!(profile.builder_mode, "Deep Focus Builder");
    assert_eq!(profile.execution_style, "Shipper");
    assert_eq!(profile.friction_type, "Minimal");
    assert_eq!(profile.summary_label, "Deep Focus Builder • Shipper");

    let stored = h.insights().profile("user-1").await.unwrap().unwrap();
    assert_eq!(stored.summary_label, profile.summary_label);

    let insight = h.insights().insight("user-1").await.unwrap();
    assert_eq!(insight.patterns.len(), 4);
    assert!(insight.insight.contains("a consistent streak of activity"));
}

#[tokio::test]
async fn rerun_without_changes_is_stable() {
    let h = harness();
    h.seed_shipping_logs("user-1", 5).await;

    let first = h.pipeline.run("user-1").await.unwrap();
    assert_eq!(
        first.drift.as_ref().unwrap().summary,
        founderos_analysis::BASELINE_SUMMARY
    );

    let second = h.pipeline.run("user-1").await.unwrap();
    let drift = second.drift.unwrap();
    assert_eq!(drift.severity, DriftSeverity::Stable);
    assert_eq!(drift.summary, founderos_analysis::STABLE_SUMMARY);

    let snapshots = h.insights().snapshots("user-1", None).await.unwrap();
    assert_eq!(snapshots.len(), 2);
}

#[tokio::test]
async fn stalled_planner_after_steady_baseline_is_a_major_shift() {
    let h = harness();
    let earlier = Utc::now() - Duration::hours(1);
    h.storage
        .append_snapshot(&ProfileSnapshot {
            user_id: "user-1".to_owned(),
            builder_mode: "Steady Builder".to_owned(),
            execution_style: "Planner".to_owned(),
            dominant_pattern: "Smooth Flow (friction)".to_owned(),
            friction_type: "Minimal".to_owned(),
            recorded_at: earlier,
        })
        .await
        .unwrap();

    for (i, content) in ["plan the pricing page", "research the plan again"].iter().enumerate() {
        let minutes = i64::try_from(i).unwrap();
        h.storage
            .save_log(&ActivityLog::new(
                format!("blocker-{i}"),
                "P1".to_owned(),
                "user-1".to_owned(),
                (*content).to_owned(),
                LogType::Blocker,
                Utc::now() - Duration::minutes(minutes),
            ))
            .await
            .unwrap();
    }
    h.storage
        .save_log(&ActivityLog {
            id: "undated".to_owned(),
            project_id: "P1".to_owned(),
            user_id: "user-1".to_owned(),
            content: "considering options".to_owned(),
            log_type: None,
            created_at: None,
        })
        .await
        .unwrap();

    let report = h.pipeline.run("user-1").await.unwrap();
    assert!(report.is_complete(), "{:?}", report.stages);
    assert_eq!(report.log_count, 3);

    let profile = report.profile.unwrap();
    assert_eq!(profile.builder_mode, "Stalled Builder");
    assert_eq!(profile.execution_style, "Planner");
    assert_eq!(profile.friction_type, "Overplanning");

    let drift = report.drift.unwrap();
    assert_eq!(drift.severity, DriftSeverity::MajorShift);
    assert!(drift.summary.contains("Mode shifted from Steady Builder to Stalled Builder"));
    assert!(drift.summary.contains("New friction detected: Overplanning"));

    let latest = h.storage.most_recent_snapshot("user-1").await.unwrap().unwrap();
    assert_eq!(latest.builder_mode, "Stalled Builder");
}

#[tokio::test]
async fn invalid_input_is_rejected_before_storage() {
    let h = harness();
    let activity = h.activity();

    let mut bad_type = shipped("user-1");
    bad_type.log_type = "rant".to_owned();
    assert!(matches!(
        activity.log_activity(bad_type).await,
        Err(ServiceError::InvalidInput(_))
    ));
    assert!(matches!(h.pipeline.run("  ").await, Err(ServiceError::InvalidInput(_))));
    assert!(h.storage.list_logs("user-1", None).await.unwrap().is_empty());
}

#[tokio::test]
async fn background_analysis_eventually_writes_profile() {
    let h = harness();
    let activity = h.activity();
    for _ in 0..5 {
        activity.log_activity(shipped("user-bg")).await.unwrap();
    }

    let mut profile = None;
    for _ in 0..100 {
        profile = h.storage.get_profile("user-bg").await.unwrap();
        if profile.as_ref().is_some_and(|p| p.builder_mode == "Deep Focus Builder") {
            break;
        }
        tokio::time::sleep(StdDuration::from_millis(20)).await;
    }
    assert_eq!(profile.unwrap().builder_mode, "Deep Focus Builder");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_runs_for_one_user_serialize() {
    let h = harness();
    let activity = h.activity();
    for _ in 0..3 {
        activity.log_and_analyze(shipped("user-1")).await.unwrap();
    }

    let runs: Vec<_> = (0..8)
        .map(|_| {
            let pipeline = Arc::clone(&h.pipeline);
            tokio::spawn(async move { pipeline.run("user-1").await })
        })
        .collect();
    for run in runs {
        assert!(run.await.unwrap().unwrap().is_complete());
    }

    let snapshots = h.insights().snapshots("user-1", Some(1000)).await.unwrap();
    assert_eq!(snapshots.len(), 11);
    assert!(h.pipeline.locks().is_empty());
}

#[tokio::test]
async fn chatter_summary_covers_the_window() {
    let h = harness();
    let chatter = ChatterService::with_window(Arc::clone(&h.storage), 7);
    let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

    for (day, ai, exec) in [(1, 50.0, 10.0), (8, 10.0, 50.0), (10, 10.0, 90.0)] {
        chatter
            .record(NewChatterSession {
                user_id: "user-1".to_owned(),
                project_id: Some("P1".to_owned()),
                ai_interaction_minutes: ai,
                execution_minutes: exec,
                model_used: Some(" ".to_owned()),
                session_date: NaiveDate::from_ymd_opt(2026, 3, day),
            })
            .await
            .unwrap();
    }

    let summary = chatter.summary("user-1", today).await.unwrap();
    assert_eq!(summary.session_count, 2);
    assert!((summary.total_ai_minutes - 20.0).abs() < f64::EPSILON);
    assert_eq!(summary.mode, Some(ChatterMode::DeepFlow));

    let all = chatter.list("user-1", None).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.iter().all(|s| s.model_used.is_none()));

    let negative = chatter
        .record(NewChatterSession {
            user_id: "user-1".to_owned(),
            project_id: None,
            ai_interaction_minutes: -1.0,
            execution_minutes: 5.0,
            model_used: None,
            session_date: None,
        })
        .await;
    assert!(matches!(negative, Err(ServiceError::InvalidInput(_))));
}

#[tokio::test]
async fn corrupt_snapshot_does_not_break_the_chain() {
    let h = harness();
    h.seed_shipping_logs("user-1", 5).await;
    assert!(h.pipeline.run("user-1").await.unwrap().is_complete());

    h.raw_sql(
        "INSERT INTO profile_snapshots
           (user_id, builder_mode, execution_style, dominant_pattern, friction_type, recorded_at)
         VALUES ('user-1', 'Burst Builder', 'Planner', 'x', 'Minimal', 'not-a-date');",
    );

    for _ in 0..3 {
        let report = h.pipeline.run("user-1").await.unwrap();
        assert_eq!(report.outcome(Stage::Drift), Some(&StageOutcome::Completed));
        assert_eq!(report.drift.unwrap().severity, DriftSeverity::Stable);
    }

    let snapshots = h.insights().snapshots("user-1", Some(100)).await.unwrap();
    assert_eq!(snapshots.len(), 4);
}

#[tokio::test]
async fn failed_drift_write_keeps_committed_profile() {
    let h = harness();
    h.seed_shipping_logs("user-1", 5).await;
    h.raw_sql("DROP TABLE drift_records;");

    let report = h.pipeline.run("user-1").await.unwrap();
    assert_eq!(report.outcome(Stage::Patterns), Some(&StageOutcome::Completed));
    assert_eq!(report.outcome(Stage::Profile), Some(&StageOutcome::Completed));
    assert!(matches!(report.outcome(Stage::Drift), Some(StageOutcome::Failed { .. })));
    assert!(!report.is_complete());
    assert!(report.drift.is_none());

    let profile = h.storage.get_profile("user-1").await.unwrap().unwrap();
    assert_eq!(profile.builder_mode, "Deep Focus Builder");
    // the snapshot is appended before the drift record is written
    assert_eq!(h.storage.list_snapshots("user-1", 10).await.unwrap().len(), 1);
}

#[tokio::test]
async fn failed_pattern_write_skips_downstream_stages() {
    let h = harness();
    h.seed_shipping_logs("user-1", 5).await;
    h.raw_sql("DROP TABLE patterns;");

    let report = h.pipeline.run("user-1").await.unwrap();
    assert!(matches!(report.outcome(Stage::Patterns), Some(StageOutcome::Failed { .. })));
    assert_eq!(
        report.outcome(Stage::Profile),
        Some(&StageOutcome::Skipped { reason: "patterns stage failed".to_owned() })
    );
    assert_eq!(
        report.outcome(Stage::Drift),
        Some(&StageOutcome::Skipped { reason: "no profile available".to_owned() })
    );
    assert!(h.storage.get_profile("user-1").await.unwrap().is_none());
    assert!(h.storage.most_recent_snapshot("user-1").await.unwrap().is_none());
}
