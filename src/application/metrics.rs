//! Observability metrics for the stub engine.
//!
//! Provides counters about dispatch behavior for debugging noisy test suites.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics tracking stub dispatch statistics.
///
/// All metrics use atomic operations for thread-safe updates and reads.
/// Clones share the same underlying counters.
#[derive(Debug, Clone)]
pub struct EngineMetrics {
    inner: Arc<MetricsInner>,
}

#[derive(Debug)]
struct MetricsInner {
    /// Total number of calls dispatched against the stub
    calls_dispatched: AtomicU64,
    /// Calls that matched no configured expectation
    calls_unstubbed: AtomicU64,
    /// Calls that raised a configured failure
    failures_injected: AtomicU64,
}

impl EngineMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(MetricsInner {
                calls_dispatched: AtomicU64::new(0),
                calls_unstubbed: AtomicU64::new(0),
                failures_injected: AtomicU64::new(0),
            }),
        }
    }

    /// Record a dispatched call.
    pub(crate) fn record_dispatch(&self) {
        self.inner.calls_dispatched.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a call that matched no expectation.
    pub(crate) fn record_unstubbed(&self) {
        self.inner.calls_unstubbed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a configured failure being raised.
    pub(crate) fn record_failure_injected(&self) {
        self.inner.failures_injected.fetch_add(1, Ordering::Relaxed);
    }

    /// Total number of calls dispatched.
    pub fn calls_dispatched(&self) -> u64 {
        self.inner.calls_dispatched.load(Ordering::Relaxed)
    }

    /// Number of calls that matched no expectation.
    pub fn calls_unstubbed(&self) -> u64 {
        self.inner.calls_unstubbed.load(Ordering::Relaxed)
    }

    /// Number of calls that raised a configured failure.
    pub fn failures_injected(&self) -> u64 {
        self.inner.failures_injected.load(Ordering::Relaxed)
    }

    /// Get a snapshot of all metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            calls_dispatched: self.calls_dispatched(),
            calls_unstubbed: self.calls_unstubbed(),
            failures_injected: self.failures_injected(),
        }
    }
}

impl Default for EngineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of engine metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Total number of calls dispatched against the stub
    pub calls_dispatched: u64,
    /// Calls that matched no configured expectation
    pub calls_unstubbed: u64,
    /// Calls that raised a configured failure
    pub failures_injected: u64,
}

impl MetricsSnapshot {
    /// Ratio of unstubbed calls to total calls (0.0 to 1.0).
    ///
    /// Returns 0.0 if no calls have been dispatched.
    pub fn unstubbed_rate(&self) -> f64 {
        if self.calls_dispatched == 0 {
            0.0
        } else {
            self.calls_unstubbed as f64 / self.calls_dispatched as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_start_at_zero() {
        let metrics = EngineMetrics::new();
        assert_eq!(metrics.calls_dispatched(), 0);
        assert_eq!(metrics.calls_unstubbed(), 0);
        assert_eq!(metrics.failures_injected(), 0);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = EngineMetrics::new();
        let clone = metrics.clone();

        metrics.record_dispatch();
        metrics.record_dispatch();
        clone.record_unstubbed();

        assert_eq!(clone.calls_dispatched(), 2);
        assert_eq!(metrics.calls_unstubbed(), 1);
    }

    #[test]
    fn test_unstubbed_rate() {
        let snapshot = MetricsSnapshot {
            calls_dispatched: 4,
            calls_unstubbed: 1,
            failures_injected: 0,
        };
        assert!((snapshot.unstubbed_rate() - 0.25).abs() < f64::EPSILON);

        let empty = MetricsSnapshot {
            calls_dispatched: 0,
            calls_unstubbed: 0,
            failures_injected: 0,
        };
        assert_eq!(empty.unstubbed_rate(), 0.0);
    }
}
