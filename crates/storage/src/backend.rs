//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDate;
use founderos_core::{
    ActivityLog, BuilderProfile, ChatterSession, DriftRecord, Pattern, ProfileSnapshot,
};

use crate::error::StorageError;
use crate::traits::{
    ActivityStore, ChatterStore, DriftStore, PatternStore, ProfileStore, SnapshotStore,
};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::Storage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::Storage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    /// # Errors
    /// Returns error if the database cannot be opened or migrated.
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::Storage::new(db_path)?))
    }

    /// # Errors
    /// Returns error if the connection or migrations fail.
    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// Short backend name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

// ── ActivityStore ────────────────────────────────────────────────

#[async_trait]
impl ActivityStore for StorageBackend {
    async fn save_log(&self, log: &ActivityLog) -> Result<(), StorageError> {
        dispatch!(self, ActivityStore, save_log(log))
    }

    async fn list_logs(
        &self,
        user_id: &str,
        project_id: Option<&str>,
    ) -> Result<Vec<ActivityLog>, StorageError> {
        dispatch!(self, ActivityStore, list_logs(user_id, project_id))
    }

    async fn list_user_ids(&self) -> Result<Vec<String>, StorageError> {
        dispatch!(self, ActivityStore, list_user_ids())
    }
}

// ── PatternStore ─────────────────────────────────────────────────

#[async_trait]
impl PatternStore for StorageBackend {
    async fn upsert_pattern(&self, pattern: &Pattern) -> Result<(), StorageError> {
        dispatch!(self, PatternStore, upsert_pattern(pattern))
    }

    async fn list_patterns(&self, user_id: &str) -> Result<Vec<Pattern>, StorageError> {
        dispatch!(self, PatternStore, list_patterns(user_id))
    }
}

// ── ProfileStore ─────────────────────────────────────────────────

#[async_trait]
impl ProfileStore for StorageBackend {
    async fn upsert_profile(&self, profile: &BuilderProfile) -> Result<(), StorageError> {
        dispatch!(self, ProfileStore, upsert_profile(profile))
    }

    async fn get_profile(&self, user_id: &str) -> Result<Option<BuilderProfile>, StorageError> {
        dispatch!(self, ProfileStore, get_profile(user_id))
    }
}

// ── SnapshotStore ────────────────────────────────────────────────

#[async_trait]
impl SnapshotStore for StorageBackend {
    async fn most_recent_snapshot(
        &self,
        user_id: &str,
    ) -> Result<Option<ProfileSnapshot>, StorageError> {
        dispatch!(self, SnapshotStore, most_recent_snapshot(user_id))
    }

    async fn append_snapshot(&self, snapshot: &ProfileSnapshot) -> Result<(), StorageError> {
        dispatch!(self, SnapshotStore, append_snapshot(snapshot))
    }

    async fn list_snapshots(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ProfileSnapshot>, StorageError> {
        dispatch!(self, SnapshotStore, list_snapshots(user_id, limit))
    }
}

// ── DriftStore ───────────────────────────────────────────────────

#[async_trait]
impl DriftStore for StorageBackend {
    async fn upsert_drift(&self, record: &DriftRecord) -> Result<(), StorageError> {
        dispatch!(self, DriftStore, upsert_drift(record))
    }

    async fn get_drift(&self, user_id: &str) -> Result<Option<DriftRecord>, StorageError> {
        dispatch!(self, DriftStore, get_drift(user_id))
    }
}

// ── ChatterStore ─────────────────────────────────────────────────

#[async_trait]
impl ChatterStore for StorageBackend {
    async fn save_chatter_session(&self, session: &ChatterSession) -> Result<(), StorageError> {
        dispatch!(self, ChatterStore, save_chatter_session(session))
    }

    async fn list_chatter_sessions(
        &self,
        user_id: &str,
        since: Option<NaiveDate>,
    ) -> Result<Vec<ChatterSession>, StorageError> {
        dispatch!(self, ChatterStore, list_chatter_sessions(user_id, since))
    }
}
