use std::collections::HashSet;

use founderos_core::{
    ActivityLog, FOCUS_BALANCED_CONFIDENCE, FOCUS_CONTEXT_SWITCH_CONFIDENCE,
    FOCUS_CONTEXT_SWITCH_PROJECTS, FOCUS_DEEP_CONFIDENCE, FOCUS_MIN_LOGS, FOCUS_WINDOW,
    PatternType,
};

use super::recent_first;
use crate::PatternSignal;
use crate::labels::{BALANCED, CONTEXT_SWITCHING, DEEP_FOCUS};

/// Classify focus from the number of distinct projects among the most recent logs.
#[must_use]
pub fn detect_focus(logs: &[ActivityLog]) -> PatternSignal {
    let recent = recent_first(logs);
    if recent.len() < FOCUS_MIN_LOGS {
        return PatternSignal::calibrating(PatternType::Focus, FOCUS_MIN_LOGS);
    }

    let window = &recent[..recent.len().min(FOCUS_WINDOW)];
    let projects: HashSet<&str> = window.iter().map(|t| t.log.project_id.as_str()).collect();

    match projects.len() {
        1 => PatternSignal::new(
            PatternType::Focus,
            DEEP_FOCUS,
            format!("Your last {} updates all target a single project.", window.len()),
            FOCUS_DEEP_CONFIDENCE,
        ),
        n if n >= FOCUS_CONTEXT_SWITCH_PROJECTS => PatternSignal::new(
            PatternType::Focus,
            CONTEXT_SWITCHING,
            format!("Your last {} updates are spread across {n} projects.", window.len()),
            FOCUS_CONTEXT_SWITCH_CONFIDENCE,
        ),
        _ => PatternSignal::new(
            PatternType::Focus,
            BALANCED,
            "Your recent updates are split between two projects.",
            FOCUS_BALANCED_CONFIDENCE,
        ),
    }
}
