//! Domain layer - pure stubbing logic with no shared state.
//!
//! This layer contains the core concepts and invariants of the stub engine:
//! - Argument matchers and call patterns
//! - Response directives (return, computed answer, injected failure)
//! - Expectation registrations
//! - Immutable invocation records
//!
//! All types in this layer are pure and easily testable.

pub mod directive;
pub mod expectation;
pub mod invocation;
pub mod matcher;
