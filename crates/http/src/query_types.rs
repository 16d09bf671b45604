//! Request/query types (Deserialize)

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct LogsQuery {
    pub project_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SnapshotsQuery {
    /// Defaults to `DEFAULT_QUERY_LIMIT`, capped at `MAX_QUERY_LIMIT`.
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatterQuery {
    /// Only list sessions on or after this date.
    pub since: Option<NaiveDate>,
    /// End of the summary window; defaults to today (UTC).
    pub today: Option<NaiveDate>,
}
