//! Behavioral pattern records. One live row per `(user_id, pattern_type)`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The four behavioral dimensions a founder is classified on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum PatternType {
    Momentum,
    Focus,
    Execution,
    Friction,
}

impl PatternType {
    /// Canonical order. Profile classification breaks confidence ties by it.
    pub const ALL: [Self; 4] = [Self::Momentum, Self::Focus, Self::Execution, Self::Friction];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Momentum => "momentum",
            Self::Focus => "focus",
            Self::Execution => "execution",
            Self::Friction => "friction",
        }
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "momentum" => Ok(Self::Momentum),
            "focus" => Ok(Self::Focus),
            "execution" => Ok(Self::Execution),
            "friction" => Ok(Self::Friction),
            other => Err(CoreError::InvalidPatternType(other.to_owned())),
        }
    }
}

/// Current classification of one behavioral dimension for a user.
///
/// Superseded on every analysis run, never versioned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pattern {
    pub user_id: String,
    pub pattern_type: PatternType,
    pub pattern_label: String,
    pub explanation: String,
    /// Confidence in `[0, 1]`
    pub confidence_score: f64,
    pub updated_at: DateTime<Utc>,
}

impl Pattern {
    #[must_use]
    pub fn new(
        user_id: String,
        pattern_type: PatternType,
        pattern_label: String,
        explanation: String,
        confidence_score: f64,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            pattern_type,
            pattern_label,
            explanation,
            confidence_score: confidence_score.clamp(0.0, 1.0),
            updated_at,
        }
    }
}

/// Sort patterns into canonical type order (momentum, focus, execution, friction).
pub fn sort_by_pattern_type(patterns: &mut [Pattern]) {
    patterns.sort_by_key(|p| p.pattern_type);
}
