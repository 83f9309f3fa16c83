//! Atomic sequence clock.

use crate::application::ports::SequenceClock;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free sequence clock backed by an atomic counter.
///
/// The first call to `next` returns 1. `fetch_add` guarantees uniqueness
/// under concurrency; racing callers draw distinct, increasing values.
#[derive(Debug, Default)]
pub struct AtomicSequence {
    counter: AtomicU64,
}

impl AtomicSequence {
    /// Create a sequence clock starting before 1.
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// The highest sequence number handed out so far, 0 if none.
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl SequenceClock for AtomicSequence {
    fn next(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }
}
