//! # stubkit
//!
//! Programmable test doubles for unit tests: stub configuration, call
//! recording, and verification.
//!
//! This crate provides a small, embeddable stub engine usable from any test
//! harness. A [`Stub`] impersonates a real collaborator (a network client, a
//! cache, a queue): the test configures behavior for specific calls, the code
//! under test calls the stub as if it were real, and the test afterwards
//! queries the recorded history to assert what happened.
//!
//! ## Quick Start
//!
//! ```rust
//! use stubkit::{create_stub, when, verify, CallPattern};
//! use serde_json::json;
//!
//! let stub = create_stub("fetch");
//!
//! // "When get is called with this URL, return this response."
//! when(&stub, CallPattern::operation("get").with_args(json!(["https://x/1"])))
//!     .then_return(json!({"status": 200, "body": "{\"title\":\"Test\"}"}));
//!
//! // The code under test calls the stub like the real collaborator.
//! let response = stub.call("get", json!(["https://x/1"])).unwrap();
//! assert_eq!(response["status"], 200);
//!
//! // Afterwards, assert on the recorded history.
//! verify(&stub, &CallPattern::operation("get")).times(1).unwrap();
//! ```
//!
//! ## Configuring behavior
//!
//! [`Stub::when`] takes a [`CallPattern`] (operation name plus an argument
//! matcher: exact value, wildcard, or predicate) and returns a builder:
//!
//! - [`then_return`](ExpectationBuilder::then_return) - fixed value.
//! - [`then_answer`](ExpectationBuilder::then_answer) - callback invoked with
//!   the actual arguments at call time.
//! - [`then_fail`](ExpectationBuilder::then_fail) - raise a caller-specified
//!   failure, re-raised verbatim.
//! - `then_answer_future` (feature `async`) - callback returning a future,
//!   awaited by `Stub::call_async`.
//!
//! Registering twice for an overlapping pattern does not remove the earlier
//! expectation. Dispatch scans expectations for the operation newest first
//! and the first matcher accepting the arguments wins, so later `when` calls
//! override earlier ones within the same test. There is no reset call and
//! none is needed.
//!
//! ## Unstubbed calls fail loudly
//!
//! Calling an operation with no matching expectation fails with
//! [`StubError::Unstubbed`], naming the operation, the arguments, and every
//! pattern configured for that operation. Nothing is ever silently defaulted;
//! a missing `when(...)` is diagnosable from the error message alone.
//!
//! ```rust
//! use stubkit::{create_stub, StubError};
//! use serde_json::json;
//!
//! let stub = create_stub("fetch");
//! let err = stub.call("get", json!(["https://x/1"])).unwrap_err();
//! assert!(matches!(err, StubError::Unstubbed { .. }));
//! ```
//!
//! ## Verification
//!
//! [`Stub::verify`] scans the append-only invocation history and returns a
//! [`VerificationResult`] with counts, sequence numbers, and assertion
//! helpers (`times`, `never`, `at_least`, `before`). Stubs created by one
//! [`MockRegistry`] share a sequence clock, so `before` can order calls
//! across stubs.
//!
//! ## Failure injection
//!
//! ```rust
//! use stubkit::{create_stub, when, CallPattern, Failure, StubError};
//! use serde_json::json;
//!
//! let stub = create_stub("fetch");
//! when(&stub, CallPattern::operation("get").with_args(json!(["url/1"])))
//!     .then_fail("NotFoundError", "missing");
//!
//! let err = stub.call("get", json!(["url/1"])).unwrap_err();
//! assert_eq!(err, StubError::Configured(Failure::new("NotFoundError", "missing")));
//! ```
//!
//! ## Capability interfaces
//!
//! The engine is dynamically typed over `serde_json::Value` payloads; a
//! consumer exposes it behind their own capability trait with a small
//! hand-written adapter, keeping the code under test ignorant of the stub:
//!
//! ```rust
//! use stubkit::Stub;
//! use serde_json::{json, Value};
//!
//! trait Fetch {
//!     fn get(&self, url: &str) -> Result<Value, stubkit::StubError>;
//! }
//!
//! struct StubFetch(Stub);
//!
//! impl Fetch for StubFetch {
//!     fn get(&self, url: &str) -> Result<Value, stubkit::StubError> {
//!         self.0.call("get", json!([url]))
//!     }
//! }
//! ```
//!
//! ## Thread Safety
//!
//! Stubs are `Send + Sync` and cheap to clone; clones share expectations and
//! history. Record appends from racing callers are serialized so nothing is
//! lost, but callers racing each other get no ordering guarantee beyond that
//! atomicity. The intended shape remains single-threaded: configure during
//! setup, exercise, then verify.

// Domain layer - pure stubbing logic
pub mod domain;

// Application layer - orchestration
pub mod application;

// Infrastructure layer - port adapters
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::{
    directive::{AnswerFn, Failure, ResponseDirective},
    expectation::Expectation,
    invocation::InvocationRecord,
    matcher::{ArgMatcher, CallPattern, PredicateFn},
};

pub use application::{
    metrics::{EngineMetrics, MetricsSnapshot},
    ports::{InvocationLog, SequenceClock},
    registry::MockRegistry,
    stub::{ExpectationBuilder, Stub, StubError},
    verify::VerificationResult,
};

pub use infrastructure::{log::InMemoryLog, sequence::AtomicSequence, table::ExpectationTable};

#[cfg(feature = "async")]
pub use domain::directive::{AsyncAnswerFn, BoxAnswerFuture};

/// Create a standalone stub with a private sequence clock.
///
/// Convenience wrapper over [`Stub::new`]; use a [`MockRegistry`] when call
/// ordering across stubs matters.
pub fn create_stub(name: impl Into<String>) -> Stub {
    Stub::new(name)
}

/// Begin configuring behavior for calls on `stub` matching `pattern`.
///
/// Equivalent to [`Stub::when`]; provided as a free function for the
/// `when(stub, pattern).then_return(...)` reading order.
pub fn when(stub: &Stub, pattern: CallPattern) -> ExpectationBuilder<'_> {
    stub.when(pattern)
}

/// Scan the invocation history of `stub` for calls matching `pattern`.
///
/// Equivalent to [`Stub::verify`].
pub fn verify(stub: &Stub, pattern: &CallPattern) -> VerificationResult {
    stub.verify(pattern)
}
