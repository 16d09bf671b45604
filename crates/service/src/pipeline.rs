//! Ordered analysis stages: patterns → profile → drift.
//!
//! Each stage commits on its own. A failed stage never rolls back earlier
//! writes; stages downstream of it are skipped.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use founderos_analysis::{
    IntentClassifier, KeywordClassifier, calculate_drift, classify_profile, detect_all_with,
};
use founderos_core::{BuilderProfile, DriftRecord, Pattern, ProfileSnapshot};
use founderos_storage::StorageBackend;
use founderos_storage::traits::{
    ActivityStore, DriftStore, PatternStore, ProfileStore, SnapshotStore,
};
use serde::Serialize;

use crate::error::ServiceError;
use crate::locks::UserLocks;
use crate::{now, require_non_empty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Patterns,
    Profile,
    Drift,
}

impl Stage {
    pub const ALL: [Self; 3] = [Self::Patterns, Self::Profile, Self::Drift];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Patterns => "patterns",
            Self::Profile => "profile",
            Self::Drift => "drift",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageOutcome {
    Completed,
    /// Upstream output was missing; nothing was written.
    Skipped { reason: String },
    Failed { error: String },
}

impl StageOutcome {
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped { reason: reason.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub stage: Stage,
    #[serde(flatten)]
    pub outcome: StageOutcome,
}

/// What one pipeline run did, stage by stage, and what it produced.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub user_id: String,
    pub analyzed_at: DateTime<Utc>,
    pub log_count: usize,
    pub stages: Vec<StageReport>,
    pub patterns: Vec<Pattern>,
    pub profile: Option<BuilderProfile>,
    pub drift: Option<DriftRecord>,
}

impl AnalysisReport {
    fn new(user_id: &str, analyzed_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_owned(),
            analyzed_at,
            log_count: 0,
            stages: Vec::with_capacity(Stage::ALL.len()),
            patterns: Vec::new(),
            profile: None,
            drift: None,
        }
    }

    #[must_use]
    pub fn outcome(&self, stage: Stage) -> Option<&StageOutcome> {
        self.stages.iter().find(|r| r.stage == stage).map(|r| &r.outcome)
    }

    /// Every stage ran to completion.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.stages.len() == Stage::ALL.len() && self.stages.iter().all(|r| r.outcome.is_completed())
    }

    fn record(&mut self, stage: Stage, outcome: StageOutcome) {
        match &outcome {
            StageOutcome::Completed => {
                tracing::debug!(user_id = %self.user_id, stage = %stage, "stage completed");
            },
            StageOutcome::Skipped { reason } => {
                tracing::info!(user_id = %self.user_id, stage = %stage, reason = %reason, "stage skipped");
            },
            StageOutcome::Failed { error } => {
                tracing::warn!(user_id = %self.user_id, stage = %stage, error = %error, "stage failed");
            },
        }
        self.stages.push(StageReport { stage, outcome });
    }
}

/// Reason a stage cannot run given its upstream outcome, if any.
fn upstream_blocker(upstream: Stage, outcome: Option<&StageOutcome>) -> Option<String> {
    match outcome {
        Some(StageOutcome::Completed) => None,
        Some(StageOutcome::Failed { .. }) => Some(format!("{upstream} stage failed")),
        Some(StageOutcome::Skipped { .. }) | None => Some(format!("no {upstream} available")),
    }
}

pub struct AnalysisPipeline {
    storage: Arc<StorageBackend>,
    locks: UserLocks,
    classifier: Arc<dyn IntentClassifier>,
}

impl AnalysisPipeline {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage, locks: UserLocks::new(), classifier: Arc::new(KeywordClassifier::default()) }
    }

    /// Replace the keyword-based execution intent classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Arc<dyn IntentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    #[must_use]
    pub const fn locks(&self) -> &UserLocks {
        &self.locks
    }

    /// Run every stage for `user_id` while holding that user's lock.
    ///
    /// Stage failures are reported in the returned [`AnalysisReport`], not as
    /// an `Err`; only invalid input fails the call.
    pub async fn run(&self, user_id: &str) -> Result<AnalysisReport, ServiceError> {
        let user_id = require_non_empty("user_id", user_id)?;
        let _guard = self.locks.lock(user_id).await;

        let mut report = AnalysisReport::new(user_id, now());

        let outcome = match self.detect_patterns(user_id, report.analyzed_at).await {
            Ok((log_count, patterns)) => {
                report.log_count = log_count;
                report.patterns = patterns;
                StageOutcome::Completed
            },
            Err(e) => StageOutcome::Failed { error: e.to_string() },
        };
        report.record(Stage::Patterns, outcome);

        let outcome = match upstream_blocker(Stage::Patterns, report.outcome(Stage::Patterns)) {
            Some(reason) => StageOutcome::skipped(reason),
            None => match self.classify(user_id, report.analyzed_at).await {
                Ok(Some(profile)) => {
                    report.profile = Some(profile);
                    StageOutcome::Completed
                },
                Ok(None) => StageOutcome::skipped("no patterns to classify"),
                Err(e) => StageOutcome::Failed { error: e.to_string() },
            },
        };
        report.record(Stage::Profile, outcome);

        let outcome = match (
            upstream_blocker(Stage::Profile, report.outcome(Stage::Profile)),
            report.profile.as_ref(),
        ) {
            (None, Some(profile)) => match self.track_drift(profile, report.analyzed_at).await {
                Ok(record) => {
                    report.drift = Some(record);
                    StageOutcome::Completed
                },
                Err(e) => StageOutcome::Failed { error: e.to_string() },
            },
            (Some(reason), _) => StageOutcome::skipped(reason),
            (None, None) => StageOutcome::skipped("no profile available"),
        };
        report.record(Stage::Drift, outcome);

        tracing::info!(
            user_id = %user_id,
            logs = report.log_count,
            builder_mode = report.profile.as_ref().map_or("-", |p| p.builder_mode.as_str()),
            severity = report.drift.as_ref().map_or("-", |d| d.severity.as_str()),
            complete = report.is_complete(),
            "analysis pipeline finished"
        );
        Ok(report)
    }

    async fn detect_patterns(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(usize, Vec<Pattern>), ServiceError> {
        let logs = self.storage.list_logs(user_id, None).await?;
        let mut patterns = Vec::with_capacity(4);
        for signal in detect_all_with(&logs, now, self.classifier.as_ref()) {
            let pattern = signal.into_pattern(user_id, now);
            self.storage.upsert_pattern(&pattern).await?;
            patterns.push(pattern);
        }
        Ok((logs.len(), patterns))
    }

    /// Classify from the stored patterns, which the previous stage just wrote.
    async fn classify(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<BuilderProfile>, ServiceError> {
        let patterns = self.storage.list_patterns(user_id).await?;
        let Some(traits) = classify_profile(&patterns) else {
            return Ok(None);
        };
        let profile = traits.into_profile(user_id, now);
        self.storage.upsert_profile(&profile).await?;
        Ok(Some(profile))
    }

    /// The previous snapshot is read before this run's snapshot is appended.
    async fn track_drift(
        &self,
        profile: &BuilderProfile,
        now: DateTime<Utc>,
    ) -> Result<DriftRecord, ServiceError> {
        let previous = self.storage.most_recent_snapshot(&profile.user_id).await?;
        let assessment = calculate_drift(profile, previous.as_ref());

        self.storage.append_snapshot(&ProfileSnapshot::from_profile(profile, now)).await?;

        let record = assessment.into_record(&profile.user_id, now);
        self.storage.upsert_drift(&record).await?;
        Ok(record)
    }
}
