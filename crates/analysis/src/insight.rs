//! Template-based insight sentence over the current patterns. No model call.

use founderos_core::{Pattern, PatternType};

use crate::labels::{DEEP_FOCUS, EXECUTION_DRIVEN, HIGH_FRICTION, PREPARATION_LOOP, STRONG_MOMENTUM};

pub const NOT_ENOUGH_DATA_INSIGHT: &str =
    "Not enough data yet to generate insights. Keep logging your work to unlock your builder patterns.";

/// Compose one sentence from four independent clauses.
///
/// A pattern type missing from `patterns` takes the fallback branch of its clause.
#[must_use]
pub fn synthesize_insight(patterns: &[Pattern]) -> String {
    if patterns.is_empty() {
        return NOT_ENOUGH_DATA_INSIGHT.to_owned();
    }

    let label = |pattern_type: PatternType| {
        patterns
            .iter()
            .find(|p| p.pattern_type == pattern_type)
            .map(|p| p.pattern_label.as_str())
    };

    let momentum = if label(PatternType::Momentum) == Some(STRONG_MOMENTUM) {
        "a consistent streak of activity"
    } else {
        "intermittent periods of activity"
    };
    let focus = if label(PatternType::Focus) == Some(DEEP_FOCUS) {
        "channeled into a single project"
    } else {
        "distributed across multiple contexts"
    };
    let execution = match label(PatternType::Execution) {
        Some(EXECUTION_DRIVEN) => "with a clear bias toward shipping over planning",
        Some(PREPARATION_LOOP) => "with more time spent preparing than shipping",
        _ => "with a healthy balance of planning and execution",
    };
    let friction = if label(PatternType::Friction) == Some(HIGH_FRICTION) {
        "and blockers are currently slowing you down"
    } else {
        "and work is flowing with few blockers"
    };

    format!("Your recent work shows {momentum}, {focus}, {execution}, {friction}.")
}
