//! Verification queries over the invocation history.

use crate::application::stub::StubError;
use crate::domain::invocation::InvocationRecord;
use crate::domain::matcher::CallPattern;

/// Result of scanning the invocation history for a pattern.
///
/// Produced by [`Stub::verify`](crate::Stub::verify). Exposes the matched
/// records for free-form inspection plus assertion helpers that raise
/// [`StubError::VerificationMismatch`] with an expected-versus-actual
/// summary.
#[derive(Debug, Clone)]
pub struct VerificationResult {
    pattern: String,
    matched: Vec<InvocationRecord>,
}

impl VerificationResult {
    pub(crate) fn new(pattern: &CallPattern, matched: Vec<InvocationRecord>) -> Self {
        Self {
            pattern: pattern.to_string(),
            matched,
        }
    }

    /// Number of matching calls.
    pub fn count(&self) -> usize {
        self.matched.len()
    }

    /// Check if no call matched.
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    /// The matching records, in append order.
    pub fn records(&self) -> &[InvocationRecord] {
        &self.matched
    }

    /// Sequence numbers of the matching calls, in append order.
    pub fn sequences(&self) -> Vec<u64> {
        self.matched.iter().map(InvocationRecord::sequence).collect()
    }

    /// Sequence number of the earliest matching call.
    pub fn first_sequence(&self) -> Option<u64> {
        self.matched.first().map(InvocationRecord::sequence)
    }

    /// Sequence number of the latest matching call.
    pub fn last_sequence(&self) -> Option<u64> {
        self.matched.last().map(InvocationRecord::sequence)
    }

    /// Assert the pattern matched exactly `expected` calls.
    pub fn times(&self, expected: usize) -> Result<(), StubError> {
        if self.count() == expected {
            Ok(())
        } else {
            Err(self.mismatch(
                format!("exactly {} matching call(s)", expected),
                self.actual_summary(),
            ))
        }
    }

    /// Assert the pattern matched no call at all.
    pub fn never(&self) -> Result<(), StubError> {
        self.times(0)
    }

    /// Assert the pattern matched at least `minimum` calls.
    pub fn at_least(&self, minimum: usize) -> Result<(), StubError> {
        if self.count() >= minimum {
            Ok(())
        } else {
            Err(self.mismatch(
                format!("at least {} matching call(s)", minimum),
                self.actual_summary(),
            ))
        }
    }

    /// Assert every call matched here happened before every call in `later`.
    ///
    /// Both results must be non-empty; ordering against an empty history is
    /// a mismatch, not a vacuous success. Sequence numbers are only
    /// comparable when both stubs share a clock, i.e. were created by the
    /// same [`MockRegistry`](crate::MockRegistry).
    pub fn before(&self, later: &VerificationResult) -> Result<(), StubError> {
        let (Some(last), Some(first)) = (self.last_sequence(), later.first_sequence()) else {
            return Err(self.mismatch(
                format!("calls on both {} and {}", self.pattern, later.pattern),
                format!(
                    "{} call(s) on {}, {} call(s) on {}",
                    self.count(),
                    self.pattern,
                    later.count(),
                    later.pattern
                ),
            ));
        };
        if last < first {
            Ok(())
        } else {
            Err(self.mismatch(
                format!("all calls before {}", later.pattern),
                format!(
                    "last {} at sequence {}, first {} at sequence {}",
                    self.pattern, last, later.pattern, first
                ),
            ))
        }
    }

    fn actual_summary(&self) -> String {
        if self.is_empty() {
            "no matching calls".to_string()
        } else {
            format!(
                "{} matching call(s) at sequence(s) {:?}",
                self.count(),
                self.sequences()
            )
        }
    }

    fn mismatch(&self, expected: String, actual: String) -> StubError {
        StubError::VerificationMismatch {
            pattern: self.pattern.clone(),
            expected,
            actual,
        }
    }
}
