//! Expectation registrations.

use crate::domain::directive::ResponseDirective;
use crate::domain::matcher::CallPattern;
use serde_json::Value;

/// A (call pattern -> response directive) registration on a stub.
///
/// Expectations accumulate in registration order; dispatch scans them newest
/// first, so a later registration for an overlapping pattern overrides an
/// earlier one without removing it.
#[derive(Debug, Clone)]
pub struct Expectation {
    pattern: CallPattern,
    directive: ResponseDirective,
}

impl Expectation {
    /// Create an expectation binding a pattern to a directive.
    pub fn new(pattern: CallPattern, directive: ResponseDirective) -> Self {
        Self { pattern, directive }
    }

    /// The pattern this expectation applies to.
    pub fn pattern(&self) -> &CallPattern {
        &self.pattern
    }

    /// The directive replayed when the pattern matches.
    pub fn directive(&self) -> &ResponseDirective {
        &self.directive
    }

    /// Check whether this expectation accepts the given argument payload.
    ///
    /// The operation name is already resolved by the expectation table, so
    /// only the argument matcher is consulted here.
    pub fn accepts(&self, args: &Value) -> bool {
        self.pattern.matcher().matches(args)
    }
}
