//! Signal extractors. Each classifies a user's activity logs into one pattern.
//!
//! All detectors are pure: the caller passes `now` so results are reproducible.

mod execution;
mod focus;
mod friction;
mod momentum;

use chrono::{DateTime, Utc};
use founderos_core::ActivityLog;

pub use execution::{
    IntentClassifier, IntentCounts, IntentHits, KeywordClassifier, count_intents,
    detect_execution, detect_execution_with,
};
pub use focus::detect_focus;
pub use friction::detect_friction;
pub use momentum::detect_momentum;

use crate::PatternSignal;

/// Run all four detectors in canonical order (momentum, focus, execution, friction).
#[must_use]
pub fn detect_all(logs: &[ActivityLog], now: DateTime<Utc>) -> Vec<PatternSignal> {
    detect_all_with(logs, now, &KeywordClassifier::default())
}

/// Same as [`detect_all`] with a custom execution-intent classifier.
#[must_use]
pub fn detect_all_with(
    logs: &[ActivityLog],
    now: DateTime<Utc>,
    classifier: &dyn IntentClassifier,
) -> Vec<PatternSignal> {
    tracing::debug!(logs = logs.len(), "running pattern detectors");
    vec![
        detect_momentum(logs, now),
        detect_focus(logs),
        detect_execution_with(logs, classifier),
        detect_friction(logs),
    ]
}

/// A log paired with its (known) creation time.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TimedLog<'a> {
    pub at: DateTime<Utc>,
    pub log: &'a ActivityLog,
}

/// Logs with a timestamp, newest first. Ties keep input order.
pub(crate) fn recent_first(logs: &[ActivityLog]) -> Vec<TimedLog<'_>> {
    let mut timed: Vec<TimedLog<'_>> = logs
        .iter()
        .filter_map(|log| log.created_at.map(|at| TimedLog { at, log }))
        .collect();
    timed.sort_by(|a, b| b.at.cmp(&a.at));
    timed
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{DateTime, Duration, Utc};
    use founderos_core::{ActivityLog, LogType};

    pub fn log_at(
        project: &str,
        content: &str,
        log_type: LogType,
        at: DateTime<Utc>,
    ) -> ActivityLog {
        ActivityLog::new(
            format!("log-{}", at.timestamp_micros()),
            project.to_owned(),
            "user-1".to_owned(),
            content.to_owned(),
            log_type,
            at,
        )
    }

    /// `count` update logs on one project, one hour apart, the newest `age` before `now`.
    pub fn updates(count: usize, project: &str, now: DateTime<Utc>, age: Duration) -> Vec<ActivityLog> {
        (0..count)
            .map(|i| {
                let at = now - age - Duration::hours(i64::try_from(i).unwrap_or(0));
                log_at(project, "worked on stuff", LogType::Update, at)
            })
            .collect()
    }
}
