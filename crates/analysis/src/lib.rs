//! Deterministic, rule-based analysis of founder activity.
//!
//! Everything here is pure: callers supply the inputs and the current time,
//! and persistence is left to `founderos-storage`.

#![allow(
    clippy::module_name_repetitions,
    reason = "detector and summary names mirror their modules"
)]

mod chatter;
pub mod detectors;
mod drift;
mod insight;
pub mod labels;
mod profile;
mod signal;

pub use chatter::{ChatterSummary, chatter_ratio, classify_chatter, ratio_trend, summarize_chatter};
pub use detectors::{IntentClassifier, KeywordClassifier, detect_all, detect_all_with};
pub use drift::{
    BASELINE_SUMMARY, DriftAssessment, STABLE_SUMMARY, calculate_drift, severity_for_score,
};
pub use insight::{NOT_ENOUGH_DATA_INSIGHT, synthesize_insight};
pub use profile::{ProfileTraits, classify_profile};
pub use signal::PatternSignal;

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use founderos_core::{DriftSeverity, LogType, Pattern, ProfileSnapshot};

    use super::*;
    use crate::detectors::test_support::log_at;

    #[test]
    fn focused_shipper_end_to_end() {
        let now = Utc::now();
        let logs: Vec<_> = (0..5)
            .map(|i| {
                log_at(
                    "P1",
                    "shipped the new button",
                    LogType::Update,
                    now - Duration::hours(i * 4),
                )
            })
            .collect();

        let patterns: Vec<Pattern> =
            detect_all(&logs, now).into_iter().map(|s| s.into_pattern("user-1", now)).collect();
        let labels: Vec<&str> = patterns.iter().map(|p| p.pattern_label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                labels::STRONG_MOMENTUM,
                labels::DEEP_FOCUS,
                labels::EXECUTION_DRIVEN,
                labels::SMOOTH_FLOW
            ]
        );

        let profile = classify_profile(&patterns).unwrap().into_profile("user-1", now);
        assert_eq!(profile.builder_mode, labels::DEEP_FOCUS_BUILDER);
        assert_eq!(profile.execution_style, labels::SHIPPER);
        assert_eq!(profile.friction_type, labels::MINIMAL_FRICTION);
        assert_eq!(profile.summary_label, "Deep Focus Builder • Shipper");

        let baseline = calculate_drift(&profile, None);
        assert_eq!(baseline.summary, BASELINE_SUMMARY);

        let snapshot = ProfileSnapshot::from_profile(&profile, now);
        let again = calculate_drift(&profile, Some(&snapshot));
        assert_eq!(again.summary, STABLE_SUMMARY);
        assert_eq!(again.severity, DriftSeverity::Stable);

        assert_eq!(
            synthesize_insight(&patterns),
            "Your recent work shows a consistent streak of activity, channeled into a single \
             project, with a clear bias toward shipping over planning, and work is flowing with \
             few blockers."
        );
    }

    #[test]
    fn pattern_signal_serializes_with_type_tag() {
        let now = Utc::now();
        let logs = vec![log_at("P1", "plan", LogType::Update, now)];
        let signals = detect_all(&logs, now);
        let json = serde_json::to_value(&signals[0]).unwrap();
        assert_eq!(json["pattern_type"], "momentum");
        assert_eq!(json["label"], labels::CALIBRATING);
    }
}
