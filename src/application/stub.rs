//! The stub engine: expectation registration and invocation dispatch.
//!
//! A [`Stub`] is a programmable fake standing in for a real collaborator.
//! It accumulates expectations (`when(...).then_*`) and replays the
//! configured behavior when test code calls an operation on it. Every call is
//! recorded, whether or not it matched, so verification can inspect the full
//! history afterwards.

use crate::application::metrics::EngineMetrics;
use crate::application::ports::{InvocationLog, SequenceClock};
use crate::application::verify::VerificationResult;
use crate::domain::directive::{AnswerFn, Failure, ResponseDirective};
use crate::domain::expectation::Expectation;
use crate::domain::invocation::InvocationRecord;
use crate::domain::matcher::CallPattern;
use crate::infrastructure::log::InMemoryLog;
use crate::infrastructure::sequence::AtomicSequence;
use crate::infrastructure::table::ExpectationTable;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

#[cfg(feature = "async")]
use crate::domain::directive::{AsyncAnswerFn, BoxAnswerFuture};

/// Errors raised by the stub engine.
///
/// The engine has exactly one failure of its own ([`StubError::Unstubbed`]);
/// everything else is either a verbatim re-raise of a configured failure or a
/// verification mismatch with an expected-versus-actual summary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StubError {
    /// A call matched no configured expectation.
    ///
    /// Carries the operation, the actual arguments, and the patterns that
    /// were configured for the operation, so a missing `when(...)` is
    /// diagnosable from the message alone.
    #[error(
        "unstubbed call {stub}.{operation}({args}); configured patterns for `{operation}`: [{}]",
        .patterns.join(", ")
    )]
    Unstubbed {
        /// Name of the stub that received the call.
        stub: String,
        /// Operation that was called.
        operation: String,
        /// Actual argument payload.
        args: Value,
        /// Display form of every pattern configured for this operation.
        patterns: Vec<String>,
    },

    /// A `then_fail` directive fired; the configured failure, verbatim.
    #[error(transparent)]
    Configured(#[from] Failure),

    /// Synchronous dispatch reached a future-producing directive.
    ///
    /// Like [`StubError::Unstubbed`], this surfaces a test-authoring mistake:
    /// the operation was stubbed with `then_answer_future` but driven through
    /// [`Stub::call`] instead of [`Stub::call_async`].
    #[cfg(feature = "async")]
    #[error("operation `{operation}` is stubbed with a future answer; dispatch it with call_async")]
    DeferredDirective {
        /// Operation whose directive produces a future.
        operation: String,
    },

    /// The invocation history did not satisfy a verification assertion.
    #[error("verification failed for {pattern}: expected {expected}, actual {actual}")]
    VerificationMismatch {
        /// Display form of the verified pattern.
        pattern: String,
        /// What the assertion required.
        expected: String,
        /// What the history actually contained.
        actual: String,
    },
}

/// A programmable fake standing in for a real collaborator.
///
/// A stub starts with every operation unconfigured; calling an unconfigured
/// operation fails with [`StubError::Unstubbed`] rather than silently
/// returning a default. Behavior is registered through [`Stub::when`] and
/// queried through [`Stub::verify`].
///
/// # Example
/// ```
/// use stubkit::{CallPattern, Stub};
/// use serde_json::json;
///
/// let stub = Stub::new("fetch");
/// stub.when(CallPattern::operation("get").with_args(json!(["url/1"])))
///     .then_return(json!({"status": 200}));
///
/// let response = stub.call("get", json!(["url/1"])).unwrap();
/// assert_eq!(response["status"], 200);
/// ```
///
/// # Thread Safety
///
/// `Stub` is thread-safe and can be cloned to share across threads. All
/// clones share the same expectations and invocation history. Racing callers
/// are serialized when appending records; their relative ordering is
/// whatever the race produced.
#[derive(Debug, Clone)]
pub struct Stub {
    inner: Arc<StubInner>,
}

#[derive(Debug)]
struct StubInner {
    name: String,
    table: ExpectationTable,
    log: Arc<dyn InvocationLog>,
    sequence: Arc<dyn SequenceClock>,
    metrics: EngineMetrics,
}

impl Stub {
    /// Create a standalone stub with a private sequence clock.
    ///
    /// Standalone stubs order their own history but are not comparable with
    /// other stubs. Use [`MockRegistry`](crate::MockRegistry) when a test
    /// needs to assert ordering across stubs.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_sequence(name, Arc::new(AtomicSequence::new()))
    }

    /// Create a stub stamping invocations from the given sequence clock.
    pub(crate) fn with_sequence(name: impl Into<String>, sequence: Arc<dyn SequenceClock>) -> Self {
        Self {
            inner: Arc::new(StubInner {
                name: name.into(),
                table: ExpectationTable::new(),
                log: Arc::new(InMemoryLog::new()),
                sequence,
                metrics: EngineMetrics::new(),
            }),
        }
    }

    /// The name this stub was created with.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Begin configuring behavior for calls matching `pattern`.
    ///
    /// Registering a second expectation for an overlapping pattern does not
    /// remove the first; dispatch scans newest-first, so the most recent
    /// matching registration wins. There is no reset call and none is needed.
    pub fn when(&self, pattern: CallPattern) -> ExpectationBuilder<'_> {
        ExpectationBuilder {
            stub: self,
            pattern,
        }
    }

    /// Call an operation on the stub, replaying the configured behavior.
    ///
    /// The call is recorded before expectations are consulted, so even an
    /// unstubbed call shows up in the history.
    pub fn call(&self, operation: &str, args: impl Into<Value>) -> Result<Value, StubError> {
        let args = args.into();
        let directive = self.dispatch(operation, &args)?;
        match directive {
            ResponseDirective::Return(value) => Ok(value),
            ResponseDirective::Answer(f) => f(&args).map_err(|failure| self.inject(failure)),
            ResponseDirective::Fail(failure) => Err(self.inject(failure)),
            #[cfg(feature = "async")]
            ResponseDirective::AnswerFuture(_) => Err(StubError::DeferredDirective {
                operation: operation.to_string(),
            }),
        }
    }

    /// Call an operation, awaiting future-producing directives.
    ///
    /// Behaves exactly like [`Stub::call`] for synchronous directives; a
    /// directive registered with `then_answer_future` is invoked with the
    /// actual arguments and its future awaited.
    #[cfg(feature = "async")]
    pub async fn call_async(
        &self,
        operation: &str,
        args: impl Into<Value>,
    ) -> Result<Value, StubError> {
        let args = args.into();
        let directive = self.dispatch(operation, &args)?;
        match directive {
            ResponseDirective::Return(value) => Ok(value),
            ResponseDirective::Answer(f) => f(&args).map_err(|failure| self.inject(failure)),
            ResponseDirective::Fail(failure) => Err(self.inject(failure)),
            ResponseDirective::AnswerFuture(f) => {
                f(args).await.map_err(|failure| self.inject(failure))
            }
        }
    }

    /// Scan the invocation history for calls matching `pattern`.
    pub fn verify(&self, pattern: &CallPattern) -> VerificationResult {
        let matched: Vec<InvocationRecord> = self
            .inner
            .log
            .snapshot()
            .into_iter()
            .filter(|record| pattern.matches(record.operation(), record.args()))
            .collect();
        tracing::trace!(
            stub = %self.inner.name,
            pattern = %pattern,
            matched = matched.len(),
            "verification scan"
        );
        VerificationResult::new(pattern, matched)
    }

    /// Snapshot of every call recorded so far, in append order.
    pub fn invocations(&self) -> Vec<InvocationRecord> {
        self.inner.log.snapshot()
    }

    /// Dispatch metrics for this stub.
    pub fn metrics(&self) -> EngineMetrics {
        self.inner.metrics.clone()
    }

    /// Record the call, then select a directive newest-first.
    fn dispatch(&self, operation: &str, args: &Value) -> Result<ResponseDirective, StubError> {
        let sequence = self.inner.sequence.next();
        self.inner
            .log
            .append(InvocationRecord::new(operation, args.clone(), sequence));
        self.inner.metrics.record_dispatch();
        tracing::trace!(
            stub = %self.inner.name,
            operation,
            sequence,
            "invocation recorded"
        );

        match self.inner.table.select(operation, args) {
            Some(directive) => {
                tracing::debug!(
                    stub = %self.inner.name,
                    operation,
                    directive = directive.kind(),
                    "expectation matched"
                );
                Ok(directive)
            }
            None => {
                self.inner.metrics.record_unstubbed();
                tracing::debug!(
                    stub = %self.inner.name,
                    operation,
                    "call matched no expectation"
                );
                Err(StubError::Unstubbed {
                    stub: self.inner.name.clone(),
                    operation: operation.to_string(),
                    args: args.clone(),
                    patterns: self.inner.table.patterns_for(operation),
                })
            }
        }
    }

    fn inject(&self, failure: Failure) -> StubError {
        self.inner.metrics.record_failure_injected();
        StubError::Configured(failure)
    }
}

/// Builder returned by [`Stub::when`], completing an expectation.
///
/// The expectation is registered when one of the `then_*` methods is called;
/// dropping the builder without calling one registers nothing.
#[must_use = "an expectation is only registered once a then_* method is called"]
pub struct ExpectationBuilder<'a> {
    stub: &'a Stub,
    pattern: CallPattern,
}

impl ExpectationBuilder<'_> {
    /// Return `value` for every matching call.
    pub fn then_return(self, value: impl Into<Value>) {
        self.register(ResponseDirective::Return(value.into()));
    }

    /// Invoke `answer` with the actual call arguments and use its result.
    ///
    /// The callback is evaluated at call time, not at configuration time, so
    /// it can compute its result from the arguments or return a different
    /// outcome per call.
    pub fn then_answer(
        self,
        answer: impl Fn(&Value) -> Result<Value, Failure> + Send + Sync + 'static,
    ) {
        let answer: AnswerFn = Arc::new(answer);
        self.register(ResponseDirective::Answer(answer));
    }

    /// Raise a failure of the given kind instead of returning.
    ///
    /// The failure reaches the caller verbatim, attributed to the call site
    /// as if the real collaborator had failed that way.
    pub fn then_fail(self, kind: impl Into<String>, message: impl Into<String>) {
        self.register(ResponseDirective::Fail(Failure::new(kind, message)));
    }

    /// Invoke `answer` with the actual arguments and await the future it
    /// returns.
    ///
    /// Only [`Stub::call_async`] can drive this directive; a synchronous
    /// [`Stub::call`] reports [`StubError::DeferredDirective`].
    #[cfg(feature = "async")]
    pub fn then_answer_future(self, answer: impl Fn(Value) -> BoxAnswerFuture + Send + Sync + 'static) {
        let answer: AsyncAnswerFn = Arc::new(answer);
        self.register(ResponseDirective::AnswerFuture(answer));
    }

    fn register(self, directive: ResponseDirective) {
        tracing::debug!(
            stub = %self.stub.inner.name,
            pattern = %self.pattern,
            directive = directive.kind(),
            "expectation registered"
        );
        self.stub
            .inner
            .table
            .append(Expectation::new(self.pattern, directive));
    }
}
