//! # Proofguard Rust SDK
//!
//! A thin async client for the Proofguard transaction-validation API, built
//! for autonomous blockchain agents. The client's entire job is to serialize
//! a proposed transaction, send it to the validation endpoint, and translate
//! the HTTP response into a typed result or a typed error — all validation
//! logic, trust scoring and on-chain recording happen server-side.
//!
//! ## Modules
//!
//! - [`api`]: the API client, its error taxonomy and wire types
//! - [`network`]: endpoint, chain id and timeout defaults
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use proofguard::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ProofguardClient::builder("pg_live_...")
//!         .chain_id(8453)
//!         .build()?;
//!
//!     let request = ValidationRequest::new("0xfrom", "0xto", "0xcalldata")
//!         .with_value("1000000000000000000");
//!
//!     // Errors with VALIDATION_FAILED when the service says unsafe.
//!     match client.validate_strict(&request).await {
//!         Ok(result) => println!("cleared: {}", result.reason),
//!         Err(e) if e.code() == ErrorCode::ValidationFailed => {
//!             println!("aborted: {}", e);
//!         }
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Execution contract
//!
//! Callers wiring this into a transaction pipeline must treat
//! [`ErrorCode::ValidationFailed`](api::ErrorCode) and a `false`
//! [`safe`](api::ValidationResult::safe) verdict as equivalent "do not
//! execute" signals, and must never source the API key implicitly from
//! process environment — it is always passed in explicitly.

/// REST API client module for transaction validation, agent trust profiles,
/// evidence lookup and usage queries.
pub mod api;

/// Network defaults (API endpoint, chain id, timeout).
pub mod network;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use proofguard::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        // Client
        ProofguardClient, ProofguardClientBuilder,
        // Errors
        ClientError, ClientResult, ErrorCode,
        // Validation types
        CheckOutcome, CheckSeverity, ValidationRequest, ValidationResult, ValidationStatus,
        // Agent types
        AgentProfile, AgentRegistration, AgentStats, VerificationStatus,
        // Evidence types
        AgentSummary, EvidenceRecord, EvidenceTransaction, ProofMetadata,
        // Usage types
        UsageSnapshot,
    };

    pub use crate::network::{DEFAULT_API_URL, DEFAULT_CHAIN_ID, DEFAULT_TIMEOUT_MS};
}
