use chrono::{DateTime, Utc};
use founderos_core::{Pattern, PatternType};
use serde::Serialize;

use crate::labels::CALIBRATING;

/// Output of a single detector before it is bound to a user and persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternSignal {
    pub pattern_type: PatternType,
    pub label: String,
    pub explanation: String,
    pub confidence: f64,
}

impl PatternSignal {
    pub(crate) fn new(
        pattern_type: PatternType,
        label: &str,
        explanation: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self { pattern_type, label: label.to_owned(), explanation: explanation.into(), confidence }
    }

    /// Insufficient-data state shared by detectors with a minimum record count.
    pub(crate) fn calibrating(pattern_type: PatternType, min_logs: usize) -> Self {
        Self::new(
            pattern_type,
            CALIBRATING,
            format!(
                "Not enough activity yet to read your {pattern_type}. Log at least {min_logs} updates."
            ),
            founderos_core::CALIBRATING_CONFIDENCE,
        )
    }

    #[must_use]
    pub fn is_calibrating(&self) -> bool {
        self.label == CALIBRATING
    }

    #[must_use]
    pub fn into_pattern(self, user_id: &str, now: DateTime<Utc>) -> Pattern {
        Pattern::new(
            user_id.to_owned(),
            self.pattern_type,
            self.label,
            self.explanation,
            self.confidence,
            now,
        )
    }
}
