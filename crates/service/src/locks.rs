//! Per-user async mutex registry.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

type LockMap = DashMap<String, Arc<Mutex<()>>>;

/// At most one holder per user id. An entry lives while someone holds or
/// waits on it, so the map only grows with concurrently active users.
#[derive(Debug, Clone, Default)]
pub struct UserLocks {
    locks: Arc<LockMap>,
}

/// Holds a user's lock. Dropping it releases the lock and forgets the
/// user's entry when nobody else is waiting.
#[derive(Debug)]
pub struct UserGuard {
    guard: Option<OwnedMutexGuard<()>>,
    locks: Arc<LockMap>,
    user_id: String,
}

impl Drop for UserGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        // map + nobody else: the only remaining reference is the map's own
        self.locks.remove_if(&self.user_id, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}

impl UserLocks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for the user's lock. Released when the guard drops.
    pub async fn lock(&self, user_id: &str) -> UserGuard {
        // clone the Arc out so the shard guard is released before awaiting
        let mutex = Arc::clone(self.locks.entry(user_id.to_owned()).or_default().value());
        let guard = mutex.lock_owned().await;
        UserGuard {
            guard: Some(guard),
            locks: Arc::clone(&self.locks),
            user_id: user_id.to_owned(),
        }
    }

    /// Users currently holding or waiting for a lock.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
