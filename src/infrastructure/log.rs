//! In-memory invocation log.

use crate::application::ports::InvocationLog;
use crate::domain::invocation::InvocationRecord;
use std::sync::Mutex;

/// Append-only log of invocation records guarded by a mutex.
///
/// The mutex serializes appends from racing callers so no record is lost or
/// torn; relative ordering between racing callers is whatever the lock
/// acquisition order produced. Reads copy the history, so verification never
/// holds the lock while test code inspects records.
#[derive(Debug, Default)]
pub struct InMemoryLog {
    records: Mutex<Vec<InvocationRecord>>,
}

impl InMemoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }
}

impl InvocationLog for InMemoryLog {
    fn append(&self, record: InvocationRecord) {
        self.records
            .lock()
            .expect("InMemoryLog mutex poisoned - a test thread panicked while holding the lock")
            .push(record);
    }

    fn snapshot(&self) -> Vec<InvocationRecord> {
        self.records
            .lock()
            .expect("InMemoryLog mutex poisoned - a test thread panicked while holding the lock")
            .clone()
    }

    fn len(&self) -> usize {
        self.records
            .lock()
            .expect("InMemoryLog mutex poisoned - a test thread panicked while holding the lock")
            .len()
    }
}
