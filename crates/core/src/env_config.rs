//! Environment variable parsing with warn-level logging for invalid values.

use crate::constants::{CHATTER_TREND_WINDOW_DAYS, DEFAULT_DB_POOL_SIZE};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// SQLite pool size from `FOUNDEROS_DB_POOL_SIZE`, at least 1.
#[must_use]
pub fn db_pool_size() -> u32 {
    env_parse_with_default("FOUNDEROS_DB_POOL_SIZE", DEFAULT_DB_POOL_SIZE).max(1)
}

/// Chatter trend window from `FOUNDEROS_CHATTER_WINDOW_DAYS`, at least 1 day.
#[must_use]
pub fn chatter_window_days() -> i64 {
    let days = env_parse_with_default("FOUNDEROS_CHATTER_WINDOW_DAYS", CHATTER_TREND_WINDOW_DAYS);
    if days < 1 {
        tracing::warn!(days, "FOUNDEROS_CHATTER_WINDOW_DAYS must be positive, using 1");
        return 1;
    }
    days
}
