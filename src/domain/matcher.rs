//! Argument matchers and call patterns.
//!
//! A call pattern names an operation and constrains its argument payload.
//! Arguments are represented as `serde_json::Value`, so any serializable
//! argument tuple can be matched structurally without code generation.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Predicate over an argument payload.
pub type PredicateFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Matcher applied to the argument payload of an invocation.
#[derive(Clone)]
pub enum ArgMatcher {
    /// Accept any arguments.
    Any,
    /// Accept arguments structurally equal to the given value.
    Exact(Value),
    /// Accept arguments for which the predicate returns true.
    ///
    /// The label names the predicate in diagnostics, since closures have no
    /// useful `Debug` representation.
    Predicate {
        /// Human-readable name for the predicate.
        label: String,
        /// The predicate itself.
        predicate: PredicateFn,
    },
}

impl ArgMatcher {
    /// Check whether this matcher accepts the given argument payload.
    pub fn matches(&self, args: &Value) -> bool {
        match self {
            ArgMatcher::Any => true,
            ArgMatcher::Exact(expected) => expected == args,
            ArgMatcher::Predicate { predicate, .. } => predicate(args),
        }
    }
}

impl fmt::Display for ArgMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgMatcher::Any => write!(f, "any"),
            ArgMatcher::Exact(value) => write!(f, "exact({})", value),
            ArgMatcher::Predicate { label, .. } => write!(f, "predicate({})", label),
        }
    }
}

impl fmt::Debug for ArgMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArgMatcher({})", self)
    }
}

/// An operation name plus an argument matcher.
///
/// Patterns are used both to register expectations (`when`) and to query the
/// invocation history (`verify`).
///
/// # Example
/// ```
/// use stubkit::CallPattern;
/// use serde_json::json;
///
/// // Match any call to `get`
/// let any_get = CallPattern::operation("get");
///
/// // Match `get` called with one specific URL
/// let one_url = CallPattern::operation("get").with_args(json!(["https://x/1"]));
/// assert!(one_url.matches("get", &json!(["https://x/1"])));
/// assert!(!one_url.matches("get", &json!(["https://x/2"])));
/// assert!(!one_url.matches("post", &json!(["https://x/1"])));
/// ```
#[derive(Clone)]
pub struct CallPattern {
    operation: String,
    matcher: ArgMatcher,
}

impl CallPattern {
    /// Create a pattern matching any call to the named operation.
    pub fn operation(name: impl Into<String>) -> Self {
        Self {
            operation: name.into(),
            matcher: ArgMatcher::Any,
        }
    }

    /// Constrain the pattern to arguments structurally equal to `args`.
    pub fn with_args(mut self, args: impl Into<Value>) -> Self {
        self.matcher = ArgMatcher::Exact(args.into());
        self
    }

    /// Constrain the pattern with a predicate over the argument payload.
    ///
    /// The label names the predicate in error messages.
    pub fn matching(
        mut self,
        label: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.matcher = ArgMatcher::Predicate {
            label: label.into(),
            predicate: Arc::new(predicate),
        };
        self
    }

    /// The operation name this pattern applies to.
    pub fn operation_name(&self) -> &str {
        &self.operation
    }

    /// The argument matcher.
    pub fn matcher(&self) -> &ArgMatcher {
        &self.matcher
    }

    /// Check whether this pattern accepts a call to `operation` with `args`.
    pub fn matches(&self, operation: &str, args: &Value) -> bool {
        self.operation == operation && self.matcher.matches(args)
    }
}

impl fmt::Display for CallPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.operation, self.matcher)
    }
}

impl fmt::Debug for CallPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallPattern")
            .field("operation", &self.operation)
            .field("matcher", &format_args!("{}", self.matcher))
            .finish()
    }
}
