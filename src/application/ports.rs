//! Ports (interfaces) for the application layer.
//!
//! In hexagonal architecture, ports define the interfaces that the application
//! layer needs. Infrastructure adapters implement these ports.

use crate::domain::invocation::InvocationRecord;
use std::fmt::Debug;

/// Port for monotonically increasing sequence numbers.
///
/// Every invocation is stamped with the next value from a sequence clock.
/// Stubs created by the same [`MockRegistry`](crate::MockRegistry) share one
/// clock, making invocation order comparable across stubs. Infrastructure
/// provides the concrete implementation (`AtomicSequence`).
pub trait SequenceClock: Send + Sync + Debug {
    /// Return the next sequence number. Values are unique and strictly
    /// increasing; concurrent callers never observe the same value twice.
    fn next(&self) -> u64;
}

/// Port for the append-only invocation history.
///
/// Records are immutable once appended: the port exposes no way to edit or
/// reorder history, only to append and to snapshot. Appends from racing
/// callers are serialized so no record is lost, but relative ordering between
/// racing callers is undefined beyond that atomicity.
pub trait InvocationLog: Send + Sync + Debug {
    /// Append a record to the history.
    fn append(&self, record: InvocationRecord);

    /// Take a point-in-time copy of the full history.
    fn snapshot(&self) -> Vec<InvocationRecord>;

    /// Number of records appended so far.
    fn len(&self) -> usize;

    /// Check if no calls have been recorded.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
