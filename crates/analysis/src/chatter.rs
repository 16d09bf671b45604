//! AI-interaction vs. execution time ("chatter") classification.

use chrono::{Days, NaiveDate};
use founderos_core::constants::{
    CHATTER_BALANCED_RATIO, CHATTER_DECAY_TREND, CHATTER_DEEP_FLOW_RATIO,
    CHATTER_PLANNING_LOOP_RATIO,
};
use founderos_core::{ChatterMode, ChatterSession};
use serde::Serialize;

/// Share of session time spent talking to an AI. Zero when no AI time was logged.
///
/// Computed as `1 / (1 + exec / ai)` so huge durations cannot overflow the sum.
#[must_use]
pub fn chatter_ratio(ai_minutes: f64, execution_minutes: f64) -> f64 {
    if ai_minutes > 0.0 { 1.0 / (1.0 + execution_minutes / ai_minutes) } else { 0.0 }
}

#[must_use]
pub fn classify_chatter(ratio: f64, trend: f64) -> ChatterMode {
    if ratio < CHATTER_DEEP_FLOW_RATIO {
        ChatterMode::DeepFlow
    } else if ratio < CHATTER_BALANCED_RATIO {
        ChatterMode::BalancedBuilding
    } else if ratio >= CHATTER_PLANNING_LOOP_RATIO {
        ChatterMode::PlanningLoop
    } else if trend < CHATTER_DECAY_TREND {
        ChatterMode::MomentumDecay
    } else {
        ChatterMode::BalancedBuilding
    }
}

/// Average of the newer half minus the average of the older half.
///
/// `ratios` must be ordered oldest first. With an odd count the middle
/// element belongs to the newer half.
#[must_use]
#[allow(clippy::cast_precision_loss, reason = "session counts are far below 2^52")]
pub fn ratio_trend(ratios: &[f64]) -> f64 {
    if ratios.len() < 2 {
        return 0.0;
    }
    let (older, recent) = ratios.split_at(ratios.len() / 2);
    let avg = |xs: &[f64]| xs.iter().sum::<f64>() / xs.len() as f64;
    avg(recent) - avg(older)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatterSummary {
    pub session_count: usize,
    pub total_ai_minutes: f64,
    pub total_execution_minutes: f64,
    pub ratio: f64,
    pub trend: f64,
    /// `None` when the window holds no sessions.
    pub mode: Option<ChatterMode>,
    pub window_days: i64,
}

/// Summarize sessions dated within the last `window_days` days, `today` included.
#[must_use]
pub fn summarize_chatter(
    sessions: &[ChatterSession],
    today: NaiveDate,
    window_days: i64,
) -> ChatterSummary {
    let window_days = window_days.max(1);
    let span = u64::try_from(window_days - 1).unwrap_or(0);
    let since = today.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN);

    let mut in_window: Vec<&ChatterSession> = sessions
        .iter()
        .filter(|s| s.session_date >= since && s.session_date <= today)
        .collect();
    in_window.sort_by_key(|s| s.session_date);

    let total_ai_minutes: f64 = in_window.iter().map(|s| s.ai_interaction_minutes).sum();
    let total_execution_minutes: f64 = in_window.iter().map(|s| s.execution_minutes).sum();
    let ratios: Vec<f64> = in_window.iter().map(|s| s.chatter_ratio).collect();

    let ratio = chatter_ratio(total_ai_minutes, total_execution_minutes);
    let trend = ratio_trend(&ratios);
    let mode = (!in_window.is_empty()).then(|| classify_chatter(ratio, trend));

    ChatterSummary {
        session_count: in_window.len(),
        total_ai_minutes,
        total_execution_minutes,
        ratio,
        trend,
        mode,
        window_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(date: NaiveDate, ai: f64, exec: f64) -> ChatterSession {
        ChatterSession {
            user_id: "u".to_owned(),
            project_id: None,
            ai_interaction_minutes: ai,
            execution_minutes: exec,
            chatter_ratio: chatter_ratio(ai, exec),
            model_used: None,
            session_date: date,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn ratio_is_zero_without_time() {
        assert_eq!(chatter_ratio(0.0, 0.0), 0.0);
        assert!((chatter_ratio(30.0, 90.0) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn ratio_survives_huge_durations() {
        let ratio = chatter_ratio(f64::MAX, f64::MAX);
        assert!((ratio - 0.5).abs() < 1e-9);
        assert_eq!(classify_chatter(ratio, 0.0), ChatterMode::BalancedBuilding);
        assert!((chatter_ratio(f64::MAX, 0.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn classification_bands() {
        assert_eq!(classify_chatter(0.1, 0.0), ChatterMode::DeepFlow);
        assert_eq!(classify_chatter(0.3, 0.0), ChatterMode::BalancedBuilding);
        assert_eq!(classify_chatter(0.7, 0.0), ChatterMode::PlanningLoop);
        assert_eq!(classify_chatter(0.6, -0.2), ChatterMode::MomentumDecay);
        assert_eq!(classify_chatter(0.6, -0.1), ChatterMode::BalancedBuilding);
        assert_eq!(classify_chatter(0.6, 0.3), ChatterMode::BalancedBuilding);
    }

    #[test]
    fn trend_needs_two_points() {
        assert_eq!(ratio_trend(&[]), 0.0);
        assert_eq!(ratio_trend(&[0.8]), 0.0);
    }

    #[test]
    fn trend_is_recent_minus_older() {
        assert!((ratio_trend(&[0.8, 0.4]) - (-0.4)).abs() < 1e-9);
        // odd count: [0.2] vs [0.4, 0.6]
        assert!((ratio_trend(&[0.2, 0.4, 0.6]) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn summary_of_empty_window_has_no_mode() {
        let summary = summarize_chatter(&[], day(20), 14);
        assert_eq!(summary.session_count, 0);
        assert_eq!(summary.mode, None);
        assert_eq!(summary.ratio, 0.0);
    }

    #[test]
    fn summary_respects_window_bounds() {
        let sessions = vec![
            session(day(1), 100.0, 0.0),
            session(day(7), 30.0, 90.0),
            session(day(20), 10.0, 30.0),
            session(day(21), 100.0, 0.0),
        ];
        // window of 14 days ending on the 20th starts on the 7th
        let summary = summarize_chatter(&sessions, day(20), 14);
        assert_eq!(summary.session_count, 2);
        assert!((summary.total_ai_minutes - 40.0).abs() < f64::EPSILON);
        assert!((summary.ratio - 0.25).abs() < 1e-9);
        assert_eq!(summary.mode, Some(ChatterMode::DeepFlow));
    }

    #[test]
    fn summary_detects_decay_from_ordered_sessions() {
        let sessions = vec![
            session(day(10), 40.0, 60.0),
            session(day(2), 80.0, 20.0),
            session(day(3), 80.0, 20.0),
            session(day(9), 40.0, 60.0),
        ];
        let summary = summarize_chatter(&sessions, day(10), 14);
        assert!((summary.ratio - 0.6).abs() < 1e-9);
        assert!((summary.trend - (-0.4)).abs() < 1e-9);
        assert_eq!(summary.mode, Some(ChatterMode::MomentumDecay));
    }
}
