//! Network constants for the Proofguard SDK.

/// Default REST API base URL for Proofguard.
pub const DEFAULT_API_URL: &str = "https://api.proofguard.xyz";

/// Chain id applied when neither the client nor the request specifies one
/// (BNB Smart Chain). Deployments targeting other chains should configure
/// their own default via the client builder.
pub const DEFAULT_CHAIN_ID: u64 = 56;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
