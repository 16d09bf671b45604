//! Activity log records, the only input to the pattern detectors.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Kind of entry a founder logs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LogType {
    /// Progress update
    Update,
    /// Something learned along the way
    Learning,
    /// Something blocking progress
    Blocker,
}

impl LogType {
    pub const ALL_VARIANTS_STR: &'static str = "update|learning|blocker";

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Update => "update",
            Self::Learning => "learning",
            Self::Blocker => "blocker",
        }
    }
}

impl FromStr for LogType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "update" => Ok(Self::Update),
            "learning" => Ok(Self::Learning),
            "blocker" => Ok(Self::Blocker),
            other => Err(CoreError::InvalidLogType(other.to_owned())),
        }
    }
}

/// One logged unit of work. Immutable once written.
///
/// `log_type` and `created_at` are optional because rows read back from
/// storage may be malformed; detectors exclude such rows from the windows
/// that depend on the missing field instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityLog {
    pub id: String,
    pub project_id: String,
    pub user_id: String,
    pub content: String,
    pub log_type: Option<LogType>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ActivityLog {
    #[must_use]
    pub fn new(
        id: String,
        project_id: String,
        user_id: String,
        content: String,
        log_type: LogType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            project_id,
            user_id,
            content,
            log_type: Some(log_type),
            created_at: Some(created_at),
        }
    }

    #[must_use]
    pub fn is_blocker(&self) -> bool {
        self.log_type == Some(LogType::Blocker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_type_parses_case_insensitively() {
        assert_eq!("Blocker".parse::<LogType>(), Ok(LogType::Blocker));
        assert_eq!(" update ".parse::<LogType>(), Ok(LogType::Update));
    }

    #[test]
    fn log_type_rejects_unknown_values() {
        assert_eq!(
            "rant".parse::<LogType>(),
            Err(CoreError::InvalidLogType("rant".to_owned()))
        );
    }

    #[test]
    fn log_type_serde_matches_as_str() {
        for variant in [LogType::Update, LogType::Learning, LogType::Blocker] {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.as_str()));
        }
    }
}
