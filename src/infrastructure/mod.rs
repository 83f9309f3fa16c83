//! Infrastructure layer - concrete adapters for the application ports.
//!
//! This layer provides adapters for:
//! - Sequence clock (atomic counter)
//! - Invocation log (in-memory, append-only)
//! - Expectation storage (per-operation concurrent map)

pub mod log;
pub mod sequence;
pub mod table;
