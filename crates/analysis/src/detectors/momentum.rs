use chrono::{DateTime, Utc};
use founderos_core::{
    ActivityLog, MOMENTUM_DECAY_CONFIDENCE, MOMENTUM_DECAY_DAYS, MOMENTUM_MIN_LOGS,
    MOMENTUM_STRONG_CONFIDENCE, PatternType,
};

use super::recent_first;
use crate::PatternSignal;
use crate::labels::{MOMENTUM_DECAY, STRONG_MOMENTUM};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Classify momentum from how long ago the latest log was written.
///
/// A hard threshold, not a continuous score: more than
/// [`MOMENTUM_DECAY_DAYS`] since the latest log is decay, anything else
/// (including exactly the threshold) is strong momentum.
#[must_use]
pub fn detect_momentum(logs: &[ActivityLog], now: DateTime<Utc>) -> PatternSignal {
    let recent = recent_first(logs);
    let Some(latest) = recent.first().filter(|_| recent.len() >= MOMENTUM_MIN_LOGS) else {
        return PatternSignal::calibrating(PatternType::Momentum, MOMENTUM_MIN_LOGS);
    };

    let gap_days = days_between(latest.at, now);
    if gap_days > MOMENTUM_DECAY_DAYS {
        PatternSignal::new(
            PatternType::Momentum,
            MOMENTUM_DECAY,
            format!(
                "No activity logged in the last {} days. Momentum is fading.",
                gap_days.floor()
            ),
            MOMENTUM_DECAY_CONFIDENCE,
        )
    } else {
        PatternSignal::new(
            PatternType::Momentum,
            STRONG_MOMENTUM,
            format!(
                "You have logged {} updates and stayed active within the last {MOMENTUM_DECAY_DAYS} days.",
                recent.len()
            ),
            MOMENTUM_STRONG_CONFIDENCE,
        )
    }
}

#[allow(clippy::cast_precision_loss, reason = "millisecond gaps fit comfortably in f64")]
fn days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / MILLIS_PER_DAY
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use founderos_core::LogType;

    use super::*;
    use crate::detectors::test_support::{log_at, updates};
    use crate::labels::CALIBRATING;

    #[test]
    fn fewer_than_three_logs_is_calibrating() {
        let now = Utc::now();
        for count in 0..3 {
            let signal = detect_momentum(&updates(count, "p1", now, Duration::zero()), now);
            assert_eq!(signal.label, CALIBRATING);
            assert!((signal.confidence - 0.1).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn recent_activity_is_strong_momentum() {
        let now = Utc::now();
        let signal = detect_momentum(&updates(3, "p1", now, Duration::hours(2)), now);
        assert_eq!(signal.label, STRONG_MOMENTUM);
        assert!((signal.confidence - 0.92).abs() < f64::EPSILON);
    }

    #[test]
    fn exactly_five_days_is_not_decay() {
        let now = Utc::now();
        let signal = detect_momentum(&updates(3, "p1", now, Duration::days(5)), now);
        assert_eq!(signal.label, STRONG_MOMENTUM);
    }

    #[test]
    fn gap_over_five_days_is_decay() {
        let now = Utc::now();
        let logs = updates(4, "p1", now, Duration::days(5) + Duration::minutes(1));
        let signal = detect_momentum(&logs, now);
        assert_eq!(signal.label, MOMENTUM_DECAY);
        assert!((signal.confidence - 0.85).abs() < f64::EPSILON);
        assert!(signal.explanation.contains("last 5 days"), "{}", signal.explanation);
    }

    #[test]
    fn latest_log_wins_regardless_of_input_order() {
        let now = Utc::now();
        let mut logs = updates(3, "p1", now, Duration::days(10));
        logs.push(log_at("p1", "back at it", LogType::Update, now - Duration::hours(1)));
        logs.reverse();
        assert_eq!(detect_momentum(&logs, now).label, STRONG_MOMENTUM);
    }

    #[test]
    fn logs_without_timestamp_are_not_counted() {
        let now = Utc::now();
        let mut logs = updates(2, "p1", now, Duration::zero());
        let mut undated = log_at("p1", "mystery", LogType::Update, now);
        undated.created_at = None;
        logs.push(undated);
        assert_eq!(detect_momentum(&logs, now).label, CALIBRATING);
    }
}
