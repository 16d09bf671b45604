//! Chatter sessions: time spent talking to an AI assistant versus executing.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One logged working session. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatterSession {
    pub user_id: String,
    pub project_id: Option<String>,
    pub ai_interaction_minutes: f64,
    pub execution_minutes: f64,
    pub chatter_ratio: f64,
    pub model_used: Option<String>,
    pub session_date: NaiveDate,
}

/// Builder mode derived from the chatter ratio and its short-term trend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChatterMode {
    DeepFlow,
    BalancedBuilding,
    PlanningLoop,
    MomentumDecay,
}

impl ChatterMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::DeepFlow => "deep_flow",
            Self::BalancedBuilding => "balanced_building",
            Self::PlanningLoop => "planning_loop",
            Self::MomentumDecay => "momentum_decay",
        }
    }
}

impl fmt::Display for ChatterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatterMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deep_flow" => Ok(Self::DeepFlow),
            "balanced_building" => Ok(Self::BalancedBuilding),
            "planning_loop" => Ok(Self::PlanningLoop),
            "momentum_decay" => Ok(Self::MomentumDecay),
            other => Err(CoreError::InvalidChatterMode(other.to_owned())),
        }
    }
}
