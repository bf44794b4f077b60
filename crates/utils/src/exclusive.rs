//! Mutual exclusion scopes
//!
//! [`mutex`] creates one lock and hands back an [`Exclusive`] that runs
//! callbacks under it. Each scope owns its own lock, so independent scopes
//! never block each other. Clones of an `Exclusive` share the lock.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::trace;

/// A lock plus the means to run callbacks while holding it
#[derive(Debug, Clone, Default)]
pub struct Exclusive {
    lock: Arc<Mutex<()>>,
}

/// Create a new mutual exclusion scope with its own lock
pub fn mutex() -> Exclusive {
    Exclusive::new()
}

impl Exclusive {
    /// Create a scope with a fresh lock
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `cb` while holding the lock.
    ///
    /// Blocks until the lock is free. The lock is released when `cb` returns
    /// or panics; a panic is propagated to the caller.
    pub fn run<F, R>(&self, cb: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = self.lock.lock();
        trace!("exclusive section entered");
        cb()
    }

    /// Whether some caller currently holds the lock
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Turn the scope into a plain function value that runs callbacks under the lock
    pub fn into_fn(self) -> impl Fn(&mut dyn FnMut()) + Clone + Send + Sync {
        move |cb| self.run(cb)
    }
}
