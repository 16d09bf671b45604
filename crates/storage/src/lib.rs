//! Storage layer for FounderOS
//!
//! Async store traits with a SQLite backend (default `sqlite` feature) and
//! a PostgreSQL backend (`postgres` feature), unified by [`StorageBackend`].

mod backend;
pub mod error;
#[cfg(feature = "sqlite")]
mod migrations;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
pub mod pg_storage;
#[cfg(feature = "sqlite")]
mod sqlite_async;
#[cfg(feature = "sqlite")]
mod storage;
#[cfg(all(test, feature = "sqlite"))]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
pub use error::StorageError;
#[cfg(feature = "sqlite")]
pub use storage::Storage;
pub use traits::{
    ActivityStore, ChatterStore, DriftStore, PatternStore, ProfileStore, SnapshotStore,
};
