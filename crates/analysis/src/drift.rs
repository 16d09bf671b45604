//! Profile drift: compares the current profile with the last snapshot.

use chrono::{DateTime, Utc};
use founderos_core::constants::{
    DRIFT_EXECUTION_STYLE_WEIGHT, DRIFT_FRICTION_CLEARED_WEIGHT, DRIFT_FRICTION_SHIFT_WEIGHT,
    DRIFT_MAJOR_SHIFT_SCORE, DRIFT_MODE_CHANGE_WEIGHT, DRIFT_NEW_FRICTION_WEIGHT,
};
use founderos_core::{BuilderProfile, DriftRecord, DriftSeverity, ProfileSnapshot};
use serde::Serialize;

use crate::labels::MINIMAL_FRICTION;

pub const BASELINE_SUMMARY: &str = "System baseline established. Tracking initialized.";
pub const STABLE_SUMMARY: &str = "Operating system remains stable. No significant drift detected.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriftAssessment {
    pub summary: String,
    pub severity: DriftSeverity,
    pub score: u32,
    /// Individual change clauses, in evaluation order.
    pub changes: Vec<String>,
}

impl DriftAssessment {
    #[must_use]
    pub fn into_record(self, user_id: &str, now: DateTime<Utc>) -> DriftRecord {
        DriftRecord {
            user_id: user_id.to_owned(),
            summary: self.summary,
            severity: self.severity,
            created_at: now,
        }
    }

    fn unchanged(summary: &str) -> Self {
        Self {
            summary: summary.to_owned(),
            severity: DriftSeverity::Stable,
            score: 0,
            changes: Vec::new(),
        }
    }
}

#[must_use]
pub const fn severity_for_score(score: u32) -> DriftSeverity {
    if score == 0 {
        DriftSeverity::Stable
    } else if score >= DRIFT_MAJOR_SHIFT_SCORE {
        DriftSeverity::MajorShift
    } else {
        DriftSeverity::MinorShift
    }
}

/// Diff `current` against `previous`. No previous snapshot means this is the baseline.
#[must_use]
pub fn calculate_drift(
    current: &BuilderProfile,
    previous: Option<&ProfileSnapshot>,
) -> DriftAssessment {
    let Some(previous) = previous else {
        return DriftAssessment::unchanged(BASELINE_SUMMARY);
    };

    let mut score = 0;
    let mut changes = Vec::new();

    if current.builder_mode != previous.builder_mode {
        score += DRIFT_MODE_CHANGE_WEIGHT;
        changes.push(format!(
            "Mode shifted from {} to {}",
            previous.builder_mode, current.builder_mode
        ));
    }

    if current.execution_style != previous.execution_style {
        score += DRIFT_EXECUTION_STYLE_WEIGHT;
        changes.push(format!("Execution style changed to {}", current.execution_style));
    }

    if current.friction_type != previous.friction_type {
        let was_minimal = previous.friction_type == MINIMAL_FRICTION;
        let is_minimal = current.friction_type == MINIMAL_FRICTION;
        match (was_minimal, is_minimal) {
            (false, true) => {
                score += DRIFT_FRICTION_CLEARED_WEIGHT;
                changes.push(format!("Friction cleared ({} resolved)", previous.friction_type));
            },
            (true, false) => {
                score += DRIFT_NEW_FRICTION_WEIGHT;
                changes.push(format!("New friction detected: {}", current.friction_type));
            },
            _ => {
                score += DRIFT_FRICTION_SHIFT_WEIGHT;
                changes.push(format!("Friction source shifted to {}", current.friction_type));
            },
        }
    }

    if changes.is_empty() {
        return DriftAssessment::unchanged(STABLE_SUMMARY);
    }

    DriftAssessment {
        summary: format!("System drift detected: {}.", changes.join(". ")),
        severity: severity_for_score(score),
        score,
        changes,
    }
}
