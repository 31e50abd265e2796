//! API request and response types for the Proofguard validation service.
//!
//! Field names follow the wire contract exactly (camelCase JSON). All
//! response entities are immutable value objects: the client never mutates
//! them after deserialization.

pub mod agent;
pub mod evidence;
pub mod usage;
pub mod validation;

// Re-export all types for convenience
pub use agent::*;
pub use evidence::*;
pub use usage::*;
pub use validation::*;
