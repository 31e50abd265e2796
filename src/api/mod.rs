//! REST API client module for Proofguard.
//!
//! Provides a typed HTTP client for the Proofguard transaction-validation
//! API: transaction validation, agent trust profiles, evidence lookup and
//! usage queries.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use proofguard::api::{ProofguardClient, ValidationRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ProofguardClient::new("pg_live_...")?;
//!
//!     let result = client
//!         .validate(&ValidationRequest::new("0xfrom", "0xto", "0xdata"))
//!         .await?;
//!     println!("safe: {}", result.safe);
//!
//!     let profile = client.check_agent("0xfrom").await?;
//!     println!("trust score: {}", profile.trust_score);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{ProofguardClient, ProofguardClientBuilder};
pub use error::{ClientError, ClientResult, ErrorCode};
pub use types::*;
