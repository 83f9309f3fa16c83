//! Per-operation expectation storage.

use crate::domain::directive::ResponseDirective;
use crate::domain::expectation::Expectation;
use dashmap::DashMap;
use serde_json::Value;

/// Expectation storage keyed by operation name, backed by DashMap.
///
/// DashMap gives lock-free reads and fine-grained write locking, so stubs
/// shared across threads can register and dispatch without a global lock.
/// Within one operation, expectations keep their registration order; `select`
/// scans them newest first, which is what gives later registrations
/// precedence over earlier overlapping ones.
#[derive(Debug, Default)]
pub struct ExpectationTable {
    map: DashMap<String, Vec<Expectation>>,
}

impl ExpectationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            map: DashMap::new(),
        }
    }

    /// Append an expectation under its operation name.
    pub fn append(&self, expectation: Expectation) {
        let operation = expectation.pattern().operation_name().to_string();
        self.map.entry(operation).or_default().push(expectation);
    }

    /// Select the directive for a call, newest registration first.
    ///
    /// Returns a clone of the directive so dispatch never holds a map guard
    /// while evaluating answer callbacks. Argument predicates do run under
    /// the read guard; they must not call back into the same stub.
    pub fn select(&self, operation: &str, args: &Value) -> Option<ResponseDirective> {
        let entries = self.map.get(operation)?;
        entries
            .iter()
            .rev()
            .find(|expectation| expectation.accepts(args))
            .map(|expectation| expectation.directive().clone())
    }

    /// Display forms of every pattern configured for an operation.
    ///
    /// Listed in registration order for unstubbed-call diagnostics.
    pub fn patterns_for(&self, operation: &str) -> Vec<String> {
        self.map
            .get(operation)
            .map(|entries| {
                entries
                    .iter()
                    .map(|expectation| expectation.pattern().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total number of registered expectations across all operations.
    pub fn len(&self) -> usize {
        self.map.iter().map(|entry| entry.value().len()).sum()
    }

    /// Check if no expectation has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
