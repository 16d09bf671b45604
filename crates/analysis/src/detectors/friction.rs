use founderos_core::{
    ActivityLog, FRICTION_WINDOW, HIGH_FRICTION_CONFIDENCE, HIGH_FRICTION_RATIO, PatternType,
    SMOOTH_FLOW_CONFIDENCE,
};

use super::recent_first;
use crate::PatternSignal;
use crate::labels::{HIGH_FRICTION, SMOOTH_FLOW};

/// Classify friction from the share of blockers among the most recent logs.
///
/// Logs missing a type or a timestamp are left out of the window.
#[must_use]
#[allow(clippy::cast_precision_loss, reason = "window is at most FRICTION_WINDOW entries")]
pub fn detect_friction(logs: &[ActivityLog]) -> PatternSignal {
    let window: Vec<_> = recent_first(logs)
        .into_iter()
        .filter(|t| t.log.log_type.is_some())
        .take(FRICTION_WINDOW)
        .collect();
    let blockers = window.iter().filter(|t| t.log.is_blocker()).count();
    let share = blockers as f64 / window.len().max(1) as f64;

    if share > HIGH_FRICTION_RATIO {
        PatternSignal::new(
            PatternType::Friction,
            HIGH_FRICTION,
            format!(
                "{blockers} of your last {} updates report blockers ({:.0}%).",
                window.len(),
                share * 100.0
            ),
            HIGH_FRICTION_CONFIDENCE,
        )
    } else {
        PatternSignal::new(
            PatternType::Friction,
            SMOOTH_FLOW,
            "Few of your recent updates report blockers.",
            SMOOTH_FLOW_CONFIDENCE,
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use founderos_core::LogType;

    use super::*;
    use crate::detectors::test_support::log_at;

    fn mix(blockers: usize, others: usize) -> Vec<ActivityLog> {
        let now = Utc::now();
        (0..blockers + others)
            .map(|i| {
                let log_type = if i < blockers { LogType::Blocker } else { LogType::Update };
                log_at("p", "x", log_type, now - Duration::minutes(i64::try_from(i).unwrap()))
            })
            .collect()
    }

    #[test]
    fn no_logs_is_smooth_flow() {
        let signal = detect_friction(&[]);
        assert_eq!(signal.label, SMOOTH_FLOW);
        assert!((signal.confidence - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn blocker_share_above_thirty_percent_is_high_friction() {
        let signal = detect_friction(&mix(4, 6));
        assert_eq!(signal.label, HIGH_FRICTION);
        assert!((signal.confidence - 0.92).abs() < f64::EPSILON);
    }

    #[test]
    fn exactly_thirty_percent_is_smooth() {
        assert_eq!(detect_friction(&mix(3, 7)).label, SMOOTH_FLOW);
    }

    #[test]
    fn older_blockers_outside_window_are_ignored() {
        let now = Utc::now();
        let mut logs = mix(0, 20);
        for i in 0..10 {
            logs.push(log_at("p", "stuck", LogType::Blocker, now - Duration::days(10 + i)));
        }
        assert_eq!(detect_friction(&logs).label, SMOOTH_FLOW);
    }

    #[test]
    fn untyped_logs_are_excluded_from_window() {
        let mut logs = mix(2, 2);
        for log in logs.iter_mut().skip(2) {
            log.log_type = None;
        }
        assert_eq!(detect_friction(&logs).label, HIGH_FRICTION);
    }
}
