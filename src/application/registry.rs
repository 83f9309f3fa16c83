//! Factory for stubs sharing one sequence clock.

use crate::application::ports::SequenceClock;
use crate::application::stub::Stub;
use crate::infrastructure::sequence::AtomicSequence;
use std::sync::Arc;

/// Creates stubs whose invocation records share one sequence clock.
///
/// Sequence numbers from a shared clock are comparable across stubs, so a
/// test can assert that a call on one stub happened before a call on another.
/// Stubs created directly with [`Stub::new`] each own a private clock and are
/// only internally ordered.
///
/// # Example
/// ```
/// use stubkit::{CallPattern, MockRegistry};
/// use serde_json::json;
///
/// let registry = MockRegistry::new();
/// let cache = registry.create_stub("cache");
/// let fetch = registry.create_stub("fetch");
///
/// cache.when(CallPattern::operation("lookup")).then_return(json!(null));
/// fetch.when(CallPattern::operation("get")).then_return(json!(200));
///
/// cache.call("lookup", json!(["key"])).unwrap();
/// fetch.call("get", json!(["url"])).unwrap();
///
/// cache
///     .verify(&CallPattern::operation("lookup"))
///     .before(&fetch.verify(&CallPattern::operation("get")))
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct MockRegistry {
    sequence: Arc<AtomicSequence>,
}

impl MockRegistry {
    /// Create a registry with a fresh sequence clock.
    pub fn new() -> Self {
        Self {
            sequence: Arc::new(AtomicSequence::new()),
        }
    }

    /// Create a stub stamping its invocations from this registry's clock.
    pub fn create_stub(&self, name: impl Into<String>) -> Stub {
        let sequence: Arc<dyn SequenceClock> = self.sequence.clone();
        Stub::with_sequence(name, sequence)
    }
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matcher::CallPattern;
    use serde_json::json;

    #[test]
    fn test_stubs_from_one_registry_share_ordering() {
        let registry = MockRegistry::new();
        let first = registry.create_stub("first");
        let second = registry.create_stub("second");

        first.when(CallPattern::operation("a")).then_return(json!(1));
        second.when(CallPattern::operation("b")).then_return(json!(2));

        first.call("a", json!([])).unwrap();
        second.call("b", json!([])).unwrap();
        first.call("a", json!([])).unwrap();

        let a = first.invocations();
        let b = second.invocations();
        assert!(a[0].sequence() < b[0].sequence());
        assert!(b[0].sequence() < a[1].sequence());
    }

    #[test]
    fn test_standalone_stubs_have_private_clocks() {
        let first = Stub::new("first");
        let second = Stub::new("second");

        first.when(CallPattern::operation("a")).then_return(json!(1));
        second.when(CallPattern::operation("b")).then_return(json!(2));

        first.call("a", json!([])).unwrap();
        second.call("b", json!([])).unwrap();

        // Both start their own history at the first sequence number.
        assert_eq!(
            first.invocations()[0].sequence(),
            second.invocations()[0].sequence()
        );
    }
}
