//! Application layer - orchestration of domain logic.
//!
//! This layer coordinates the domain logic and manages the runtime behavior:
//! - Stub engine (expectation registration and invocation dispatch)
//! - Mock registry (stub creation with a shared sequence clock)
//! - Verification queries over the invocation history
//! - Engine metrics
//!
//! ## Ports
//!
//! The application layer defines ports (traits) that infrastructure
//! adapters must implement. This keeps the application layer independent
//! from infrastructure details.

pub mod metrics;
pub mod ports;
pub mod registry;
pub mod stub;
pub mod verify;
