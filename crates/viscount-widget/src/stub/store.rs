use std::sync::atomic::{AtomicU64, Ordering};

/// Visit counter. Increments are a single atomic add, never read-then-write.
#[derive(Debug, Default)]
pub struct CounterStore {
    views: AtomicU64,
}

impl CounterStore {
    pub fn new(initial: u64) -> Self {
        Self {
            views: AtomicU64::new(initial),
        }
    }

    /// Add one and return the updated value.
    pub fn incr(&self) -> u64 {
        self.views.fetch_add(1, Ordering::SeqCst).wrapping_add(1)
    }

    pub fn current(&self) -> u64 {
        self.views.load(Ordering::SeqCst)
    }
}
