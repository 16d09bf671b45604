//! Async trait implementations for SQLite `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use chrono::NaiveDate;
use founderos_core::{
    ActivityLog, BuilderProfile, ChatterSession, DriftRecord, Pattern, ProfileSnapshot,
};

use crate::Storage;
use crate::error::StorageError;
use crate::traits::{
    ActivityStore, ChatterStore, DriftStore, PatternStore, ProfileStore, SnapshotStore,
};

/// Run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@ref arg`      `.clone()` a `&T`, pass as `&arg`
/// - `@str arg`      `.to_owned()` a `&str`, pass as `&arg`
/// - `@opt_str arg`  `.map(ToOwned::to_owned)` an `Option<&str>`, pass as `arg.as_deref()`
/// - `@val arg`      move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture opt_str $arg:ident) => { let $arg = $arg.map(ToOwned::to_owned); };
    (@capture val $arg:ident) => { };
    (@pass ref $arg:ident) => { &$arg };
    (@pass str $arg:ident) => { &$arg };
    (@pass opt_str $arg:ident) => { $arg.as_deref() };
    (@pass val $arg:ident) => { $arg };
}

// ── ActivityStore ────────────────────────────────────────────────

#[async_trait]
impl ActivityStore for Storage {
    async fn save_log(&self, log: &ActivityLog) -> Result<(), StorageError> {
        delegate!(self, save_log, @ref log)
    }
    async fn list_logs(
        &self,
        user_id: &str,
        project_id: Option<&str>,
    ) -> Result<Vec<ActivityLog>, StorageError> {
        delegate!(self, list_logs, @str user_id, @opt_str project_id)
    }
    async fn list_user_ids(&self) -> Result<Vec<String>, StorageError> {
        delegate!(self, list_user_ids)
    }
}

// ── PatternStore ─────────────────────────────────────────────────

#[async_trait]
impl PatternStore for Storage {
    async fn upsert_pattern(&self, pattern: &Pattern) -> Result<(), StorageError> {
        delegate!(self, upsert_pattern, @ref pattern)
    }
    async fn list_patterns(&self, user_id: &str) -> Result<Vec<Pattern>, StorageError> {
        delegate!(self, list_patterns, @str user_id)
    }
}

// ── ProfileStore ─────────────────────────────────────────────────

#[async_trait]
impl ProfileStore for Storage {
    async fn upsert_profile(&self, profile: &BuilderProfile) -> Result<(), StorageError> {
        delegate!(self, upsert_profile, @ref profile)
    }
    async fn get_profile(&self, user_id: &str) -> Result<Option<BuilderProfile>, StorageError> {
        delegate!(self, get_profile, @str user_id)
    }
}

// ── SnapshotStore ────────────────────────────────────────────────

#[async_trait]
impl SnapshotStore for Storage {
    async fn most_recent_snapshot(
        &self,
        user_id: &str,
    ) -> Result<Option<ProfileSnapshot>, StorageError> {
        delegate!(self, most_recent_snapshot, @str user_id)
    }
    async fn append_snapshot(&self, snapshot: &ProfileSnapshot) -> Result<(), StorageError> {
        delegate!(self, append_snapshot, @ref snapshot)
    }
    async fn list_snapshots(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ProfileSnapshot>, StorageError> {
        delegate!(self, list_snapshots, @str user_id, @val limit)
    }
}

// ── DriftStore ───────────────────────────────────────────────────

#[async_trait]
impl DriftStore for Storage {
    async fn upsert_drift(&self, record: &DriftRecord) -> Result<(), StorageError> {
        delegate!(self, upsert_drift, @ref record)
    }
    async fn get_drift(&self, user_id: &str) -> Result<Option<DriftRecord>, StorageError> {
        delegate!(self, get_drift, @str user_id)
    }
}

// ── ChatterStore ─────────────────────────────────────────────────

#[async_trait]
impl ChatterStore for Storage {
    async fn save_chatter_session(&self, session: &ChatterSession) -> Result<(), StorageError> {
        delegate!(self, save_chatter_session, @ref session)
    }
    async fn list_chatter_sessions(
        &self,
        user_id: &str,
        since: Option<NaiveDate>,
    ) -> Result<Vec<ChatterSession>, StorageError> {
        delegate!(self, list_chatter_sessions, @str user_id, @val since)
    }
}
