//! Storage backend trait abstraction
//!
//! One async trait per concern. Both the SQLite and PostgreSQL backends
//! implement all of them, and `StorageBackend` dispatches to either.

pub mod activity;
pub mod chatter;
pub mod drift;
pub mod pattern;
pub mod profile;

pub use activity::ActivityStore;
pub use chatter::ChatterStore;
pub use drift::DriftStore;
pub use pattern::PatternStore;
pub use profile::{ProfileStore, SnapshotStore};
