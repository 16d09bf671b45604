//! Service layer for FounderOS
//!
//! Sits between the HTTP/CLI front ends and storage, and runs the analysis
//! pipeline over stored activity.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]

mod activity_service;
mod chatter_service;
mod error;
mod insight_service;
mod locks;
mod pipeline;
#[cfg(test)]
mod tests;

use chrono::{DateTime, SubsecRound as _, Utc};

pub use activity_service::{ActivityService, NewActivityLog};
pub use chatter_service::{ChatterService, NewChatterSession};
pub use founderos_analysis::ChatterSummary;
pub use error::ServiceError;
pub use insight_service::{Insight, InsightService};
pub use locks::{UserGuard, UserLocks};
pub use pipeline::{AnalysisPipeline, AnalysisReport, Stage, StageOutcome, StageReport};

/// Current time at the precision both storage backends keep.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

pub(crate) fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}
