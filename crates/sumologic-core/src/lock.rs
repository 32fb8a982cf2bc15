//! Per-path lock set used by the optimistic-concurrency update path.
//!
//! Locks are created lazily on first use and never removed, so the table
//! grows monotonically with the set of distinct paths updated during the
//! process lifetime. That matches the intended use: a bounded universe of
//! resource paths touched by one configuration run.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Set of named async locks keyed by request path.
///
/// Holding the guard returned by [`PathLocks::acquire`] serializes writers to
/// one path; writers to different paths proceed independently. The guard is
/// RAII, so the lock is released on every exit path including errors.
#[derive(Debug, Default)]
pub struct PathLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl PathLocks {
    /// Create an empty lock set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for `path`, creating it on first use.
    ///
    /// Waiters on the same path are granted the lock in FIFO order.
    pub async fn acquire(&self, path: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self
                .locks
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(path.to_string()).or_default())
        };
        lock.lock_owned().await
    }

    /// Number of distinct paths that have been locked so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True if no path has been locked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
