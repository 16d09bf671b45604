//! Drift records: the measured change between a profile and its last snapshot.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DriftSeverity {
    #[serde(rename = "stable")]
    Stable,
    #[serde(rename = "minor shift")]
    MinorShift,
    #[serde(rename = "major shift")]
    MajorShift,
}

impl DriftSeverity {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Stable => "stable",
            Self::MinorShift => "minor shift",
            Self::MajorShift => "major shift",
        }
    }
}

impl fmt::Display for DriftSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriftSeverity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "stable" => Ok(Self::Stable),
            "minor shift" => Ok(Self::MinorShift),
            "major shift" => Ok(Self::MajorShift),
            other => Err(CoreError::InvalidDriftSeverity(other.to_owned())),
        }
    }
}

/// Latest drift assessment for a user. One live row per user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DriftRecord {
    pub user_id: String,
    pub summary: String,
    pub severity: DriftSeverity,
    pub created_at: DateTime<Utc>,
}
