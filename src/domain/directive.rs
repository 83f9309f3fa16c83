//! Response directives replayed when an expectation matches.
//!
//! A directive is attached to an expectation at configuration time and
//! evaluated lazily at call time, so computed answers can observe the actual
//! call arguments.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[cfg(feature = "async")]
use std::future::Future;
#[cfg(feature = "async")]
use std::pin::Pin;

/// A failure configured via `then_fail`, re-raised verbatim at call time.
///
/// The engine never wraps or suppresses a configured failure; the kind and
/// message reach the caller exactly as configured, as if the real
/// collaborator had failed that way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct Failure {
    /// Caller-specified failure kind, e.g. `"NotFoundError"`.
    pub kind: String,
    /// Caller-specified message.
    pub message: String,
}

impl Failure {
    /// Create a failure with a kind and message.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

/// Synchronous answer callback, invoked with the actual call arguments.
pub type AnswerFn = Arc<dyn Fn(&Value) -> Result<Value, Failure> + Send + Sync>;

/// A boxed future resolving to a stubbed outcome.
#[cfg(feature = "async")]
pub type BoxAnswerFuture = Pin<Box<dyn Future<Output = Result<Value, Failure>> + Send>>;

/// Asynchronous answer callback, producing a fresh future per call.
#[cfg(feature = "async")]
pub type AsyncAnswerFn = Arc<dyn Fn(Value) -> BoxAnswerFuture + Send + Sync>;

/// The configured outcome for a matched call.
#[derive(Clone)]
pub enum ResponseDirective {
    /// Return a fixed value.
    Return(Value),
    /// Invoke a callback with the actual arguments and use its result.
    Answer(AnswerFn),
    /// Raise the configured failure instead of returning.
    Fail(Failure),
    /// Invoke a callback producing a future; awaited by async dispatch.
    #[cfg(feature = "async")]
    AnswerFuture(AsyncAnswerFn),
}

impl ResponseDirective {
    /// Short name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ResponseDirective::Return(_) => "return",
            ResponseDirective::Answer(_) => "answer",
            ResponseDirective::Fail(_) => "fail",
            #[cfg(feature = "async")]
            ResponseDirective::AnswerFuture(_) => "answer_future",
        }
    }
}

impl fmt::Debug for ResponseDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseDirective::Return(value) => f.debug_tuple("Return").field(value).finish(),
            ResponseDirective::Answer(_) => write!(f, "Answer(..)"),
            ResponseDirective::Fail(failure) => f.debug_tuple("Fail").field(failure).finish(),
            #[cfg(feature = "async")]
            ResponseDirective::AnswerFuture(_) => write!(f, "AnswerFuture(..)"),
        }
    }
}
