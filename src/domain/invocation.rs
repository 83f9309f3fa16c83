//! Immutable records of calls observed by a stub.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// One actual call made against a stub.
///
/// Records are append-only history: fields are private and there are no
/// mutators, so a record can never be edited after the fact. The sequence
/// number is assigned by the stub's sequence clock at dispatch time and is
/// strictly increasing across all stubs sharing that clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationRecord {
    operation: String,
    args: Value,
    sequence: u64,
}

impl InvocationRecord {
    /// Create a new record. Called by the engine at dispatch time.
    pub(crate) fn new(operation: impl Into<String>, args: Value, sequence: u64) -> Self {
        Self {
            operation: operation.into(),
            args,
            sequence,
        }
    }

    /// The operation that was called.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// The argument payload the operation was called with.
    pub fn args(&self) -> &Value {
        &self.args
    }

    /// Position of this call in the observed history.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl fmt::Display for InvocationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}({})", self.sequence, self.operation, self.args)
    }
}
