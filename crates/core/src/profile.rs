//! Builder profile (current state) and its append-only snapshot history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Synthesized working style of a founder, derived from the current patterns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BuilderProfile {
    pub user_id: String,
    pub builder_mode: String,
    pub dominant_pattern: String,
    pub execution_style: String,
    pub friction_type: String,
    pub summary_label: String,
    pub updated_at: DateTime<Utc>,
}

/// Point-in-time copy of a profile, used as the "previous state" for drift.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileSnapshot {
    pub user_id: String,
    pub builder_mode: String,
    pub execution_style: String,
    pub dominant_pattern: String,
    pub friction_type: String,
    pub recorded_at: DateTime<Utc>,
}

impl ProfileSnapshot {
    #[must_use]
    pub fn from_profile(profile: &BuilderProfile, recorded_at: DateTime<Utc>) -> Self {
        Self {
            user_id: profile.user_id.clone(),
            builder_mode: profile.builder_mode.clone(),
            execution_style: profile.execution_style.clone(),
            dominant_pattern: profile.dominant_pattern.clone(),
            friction_type: profile.friction_type.clone(),
            recorded_at,
        }
    }
}
