//! Shared constants for FounderOS.
//!
//! Classification thresholds and confidence scores encode product tuning.
//! Change them only with evidence from real usage.

// ── Momentum ─────────────────────────────────────────────────────

/// Minimum timestamped logs before momentum is classified.
pub const MOMENTUM_MIN_LOGS: usize = 3;

/// Days since the latest log after which momentum decays. The boundary itself is not decay.
pub const MOMENTUM_DECAY_DAYS: f64 = 5.0;

pub const MOMENTUM_STRONG_CONFIDENCE: f64 = 0.92;
pub const MOMENTUM_DECAY_CONFIDENCE: f64 = 0.85;

// ── Focus ────────────────────────────────────────────────────────

pub const FOCUS_MIN_LOGS: usize = 5;

/// Number of most recent logs inspected for distinct projects.
pub const FOCUS_WINDOW: usize = 10;

/// Distinct projects at or above which focus counts as context switching.
pub const FOCUS_CONTEXT_SWITCH_PROJECTS: usize = 3;

pub const FOCUS_DEEP_CONFIDENCE: f64 = 0.95;
pub const FOCUS_CONTEXT_SWITCH_CONFIDENCE: f64 = 0.88;
pub const FOCUS_BALANCED_CONFIDENCE: f64 = 0.6;

// ── Execution ────────────────────────────────────────────────────

pub const EXECUTION_MIN_LOGS: usize = 3;

/// Execution share above which a founder is execution-driven.
pub const EXECUTION_DRIVEN_RATIO: f64 = 0.7;

/// Execution share below which a founder is stuck preparing.
pub const PREPARATION_LOOP_RATIO: f64 = 0.3;

pub const EXECUTION_UNKNOWN_CONFIDENCE: f64 = 0.2;
pub const EXECUTION_DRIVEN_CONFIDENCE: f64 = 0.9;
pub const PREPARATION_LOOP_CONFIDENCE: f64 = 0.85;
pub const BALANCED_APPROACH_CONFIDENCE: f64 = 0.7;

pub const PLANNING_KEYWORDS: &[&str] =
    &["plan", "think", "research", "explore", "study", "maybe", "consider"];

pub const EXECUTION_KEYWORDS: &[&str] =
    &["ship", "build", "code", "deploy", "fix", "implement", "write", "release"];

// ── Friction ─────────────────────────────────────────────────────

pub const FRICTION_WINDOW: usize = 20;

/// Blocker share above which friction is high.
pub const HIGH_FRICTION_RATIO: f64 = 0.3;

pub const HIGH_FRICTION_CONFIDENCE: f64 = 0.92;
pub const SMOOTH_FLOW_CONFIDENCE: f64 = 0.8;

/// Confidence attached to every insufficient-data ("Calibrating") pattern.
pub const CALIBRATING_CONFIDENCE: f64 = 0.1;

// ── Drift ────────────────────────────────────────────────────────

pub const DRIFT_MODE_CHANGE_WEIGHT: u32 = 2;
pub const DRIFT_EXECUTION_STYLE_WEIGHT: u32 = 1;
pub const DRIFT_FRICTION_CLEARED_WEIGHT: u32 = 1;
pub const DRIFT_NEW_FRICTION_WEIGHT: u32 = 2;
pub const DRIFT_FRICTION_SHIFT_WEIGHT: u32 = 1;

/// Accumulated drift score at or above which the shift is major.
pub const DRIFT_MAJOR_SHIFT_SCORE: u32 = 3;

// ── Chatter ratio ────────────────────────────────────────────────

pub const CHATTER_DEEP_FLOW_RATIO: f64 = 0.3;
pub const CHATTER_BALANCED_RATIO: f64 = 0.5;
pub const CHATTER_PLANNING_LOOP_RATIO: f64 = 0.7;

/// Trend below which a mid-range ratio is read as momentum decay.
pub const CHATTER_DECAY_TREND: f64 = -0.1;

/// Default number of days of sessions feeding the chatter trend.
pub const CHATTER_TREND_WINDOW_DAYS: i64 = 14;

/// Upper bound on either duration of one chatter session: a full day.
pub const MAX_SESSION_MINUTES: f64 = 1440.0;

// ── Storage / API ────────────────────────────────────────────────

/// Maximum number of results for any query (DoS protection).
pub const MAX_QUERY_LIMIT: usize = 1000;

/// Default number of results when limit is not specified by the caller.
pub const DEFAULT_QUERY_LIMIT: usize = 20;

/// Maximum accepted length of an activity log body, in characters.
pub const MAX_LOG_CONTENT_LEN: usize = 10_000;

/// SQLite connection pool size when `FOUNDEROS_DB_POOL_SIZE` is unset.
pub const DEFAULT_DB_POOL_SIZE: u32 = 8;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;
