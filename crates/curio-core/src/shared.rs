//! Closure-scoped critical sections for long-lived shared resources
//!
//! Collections and listings are shared objects reachable by many independent
//! callers. Every public operation on them must be atomic from the caller's
//! perspective, so mutation goes through a single critical section keyed by
//! the resource: one closure, one lock acquisition, one logical transaction.
//!
//! No operation in the engine suspends mid-mutation, so holding the lock for
//! the duration of the closure is sufficient to rule out observable partial
//! state.

use parking_lot::RwLock;
use std::sync::Arc;

/// A cloneable handle to a shared resource
///
/// `read` and `mutate` each run the supplied closure under the lock and
/// return its result. Callers never see the guard, so a lock cannot leak
/// past the end of the transaction.
#[derive(Debug, Default)]
pub struct Shared<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Shared<T> {
    /// Wrap a value as a shared resource
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Run a read-only transaction against the resource
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run a mutating transaction against the resource
    pub fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write())
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn transactions_see_each_others_writes() {
        let shared = Shared::new(0u64);
        shared.mutate(|n| *n += 5);
        assert_eq!(shared.read(|n| *n), 5);
    }

    #[test]
    fn concurrent_mutations_serialize() {
        let shared = Shared::new(0u64);
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for _ in 0..1000 {
                        shared.mutate(|n| *n += 1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(shared.read(|n| *n), 8000);
    }
}
