//! Proofguard REST API client implementation.
//!
//! The [`ProofguardClient`] is a thin, typed wrapper over the Proofguard
//! validation API: it serializes a proposed transaction, POSTs it to the
//! validation endpoint, and translates the HTTP response into a typed result
//! or a typed error. All validation logic, scoring and on-chain recording
//! happen server-side.
//!
//! # Example
//!
//! ```rust,ignore
//! use proofguard::api::{ProofguardClient, ValidationRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ProofguardClient::new("pg_live_...")?;
//!
//!     let request = ValidationRequest::new(
//!         "0xSenderAddress",
//!         "0xTargetContract",
//!         "0xa9059cbb...",
//!     )
//!     .with_value("1000000000000000000");
//!
//!     let result = client.validate(&request).await?;
//!     if result.safe {
//!         println!("safe to execute: {}", result.reason);
//!     } else {
//!         println!("do not execute: {}", result.reason);
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::{ClientError, ClientResult, ErrorResponse};
use crate::api::types::validation::ValidateBody;
use crate::api::types::{
    AgentProfile, EvidenceRecord, UsageSnapshot, ValidationRequest, ValidationResult,
};
use crate::network::{DEFAULT_API_URL, DEFAULT_CHAIN_ID, DEFAULT_TIMEOUT_MS};

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "x-api-key";

/// Required prefix for Proofguard API keys.
const API_KEY_PREFIX: &str = "pg_";

/// Builder for configuring [`ProofguardClient`].
#[derive(Debug, Clone)]
pub struct ProofguardClientBuilder {
    api_key: String,
    base_url: String,
    chain_id: u64,
    guardrail_id: Option<String>,
    timeout: Duration,
}

impl ProofguardClientBuilder {
    /// Create a new builder with the given API key and documented defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_URL.to_string(),
            chain_id: DEFAULT_CHAIN_ID,
            guardrail_id: None,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Override the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the chain id applied when a request does not carry one.
    pub fn chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Set the guardrail id applied when a request does not carry one.
    pub fn guardrail_id(mut self, guardrail_id: impl Into<String>) -> Self {
        self.guardrail_id = Some(guardrail_id.into());
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the per-request timeout in milliseconds.
    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.timeout = Duration::from_millis(ms);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Fails with [`ClientError::MissingCredential`] for an empty API key and
    /// [`ClientError::InvalidCredential`] for a key without the `pg_` prefix.
    /// Credential validation happens here, never deferred to the first call.
    pub fn build(self) -> ClientResult<ProofguardClient> {
        if self.api_key.is_empty() {
            return Err(ClientError::MissingCredential);
        }
        if !self.api_key.starts_with(API_KEY_PREFIX) {
            return Err(ClientError::InvalidCredential);
        }

        // A zero timeout would mean "wait forever" to some transports;
        // every call must have a finite budget.
        let timeout = if self.timeout.is_zero() {
            Duration::from_millis(DEFAULT_TIMEOUT_MS)
        } else {
            self.timeout
        };

        let http_client = Client::builder()
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Network)?;

        Ok(ProofguardClient {
            http_client,
            api_key: self.api_key,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            chain_id: self.chain_id,
            guardrail_id: self.guardrail_id,
            timeout,
        })
    }
}

/// Proofguard REST API client.
///
/// Holds only immutable merged configuration; clones share the underlying
/// connection pool. Concurrent calls from the same instance are independent
/// and need no coordination.
#[derive(Debug, Clone)]
pub struct ProofguardClient {
    http_client: Client,
    api_key: String,
    base_url: String,
    chain_id: u64,
    guardrail_id: Option<String>,
    timeout: Duration,
}

impl ProofguardClient {
    /// Create a client with the default endpoint, chain id and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredential`] or
    /// [`ClientError::InvalidCredential`] for a bad API key.
    pub fn new(api_key: impl Into<String>) -> ClientResult<Self> {
        ProofguardClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration.
    pub fn builder(api_key: impl Into<String>) -> ProofguardClientBuilder {
        ProofguardClientBuilder::new(api_key)
    }

    /// The configured base URL (no trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The chain id applied when requests do not carry one.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// The guardrail id applied when requests do not carry one.
    pub fn guardrail_id(&self) -> Option<&str> {
        self.guardrail_id.as_deref()
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Submit a transaction for validation.
    ///
    /// `value` is transmitted as `"0"` when unset; guardrail and chain id
    /// fall back to the client's configured defaults when the request leaves
    /// them unset. The result is returned exactly as the service produced
    /// it — `safe` is the authoritative execute/abort verdict.
    pub async fn validate(&self, request: &ValidationRequest) -> ClientResult<ValidationResult> {
        let body = ValidateBody {
            from: &request.from,
            to: &request.to,
            data: &request.data,
            value: request.value.as_deref().unwrap_or("0"),
            guardrail_id: request
                .guardrail_id
                .as_deref()
                .or(self.guardrail_id.as_deref()),
            chain_id: request.chain_id.unwrap_or(self.chain_id),
        };
        let url = format!("{}/validate", self.base_url);
        self.post(&url, &body).await
    }

    /// Like [`validate`](Self::validate), but treats an unsafe verdict as an
    /// error.
    ///
    /// When the service returns `safe == false` this fails with
    /// [`ClientError::ValidationFailed`], carrying the service's `reason` as
    /// the message and the full result for inspection. Exactly one request is
    /// issued either way.
    pub async fn validate_strict(
        &self,
        request: &ValidationRequest,
    ) -> ClientResult<ValidationResult> {
        let result = self.validate(request).await?;
        if !result.safe {
            return Err(ClientError::ValidationFailed {
                reason: result.reason.clone(),
                result: Box::new(result),
            });
        }
        Ok(result)
    }

    // =========================================================================
    // Agents
    // =========================================================================

    /// Fetch the trust profile for an agent wallet.
    ///
    /// Purely a typed read: trust score and tier are computed server-side.
    pub async fn check_agent(&self, wallet: &str) -> ClientResult<AgentProfile> {
        let url = format!(
            "{}/agents/check?wallet={}",
            self.base_url,
            urlencoding::encode(wallet)
        );
        self.get(&url).await
    }

    // =========================================================================
    // Evidence
    // =========================================================================

    /// Fetch the evidence record for a past validation.
    ///
    /// The id is treated as an opaque path segment and URL-escaped; repeated
    /// lookups by the same id are idempotent reads.
    pub async fn get_evidence(&self, validation_id: &str) -> ClientResult<EvidenceRecord> {
        let url = format!(
            "{}/evidence/{}",
            self.base_url,
            urlencoding::encode(validation_id)
        );
        self.get(&url).await
    }

    // =========================================================================
    // Usage
    // =========================================================================

    /// Fetch the usage snapshot for a wallet.
    pub async fn get_usage(&self, wallet: &str) -> ClientResult<UsageSnapshot> {
        let url = format!(
            "{}/validate?wallet={}",
            self.base_url,
            urlencoding::encode(wallet)
        );
        self.get(&url).await
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    async fn get<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        self.execute(self.http_client.get(url)).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, url: &str, body: &B) -> ClientResult<T> {
        self.execute(self.http_client.post(url).json(body)).await
    }

    /// Single request/response cycle every public operation funnels through.
    ///
    /// Attaches the credential header, arms the per-request timeout (disarmed
    /// by the transport on completion, success or not), and maps every
    /// failure into exactly one [`ClientError`]. No retries: retry policy
    /// belongs to the caller.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> ClientResult<T> {
        let response = request
            .header(API_KEY_HEADER, self.api_key.as_str())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(|e| {
                if e.is_timeout() {
                    ClientError::Timeout(self.timeout)
                } else if e.is_decode() {
                    ClientError::MalformedResponse(e.to_string())
                } else {
                    ClientError::Network(e)
                }
            });
        }

        Err(self.parse_error_response(status, response).await)
    }

    fn map_transport_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.timeout)
        } else {
            ClientError::Network(err)
        }
    }

    /// Map a non-success response to [`ClientError::Api`], preferring the
    /// service's own error message over the bare status line.
    async fn parse_error_response(
        &self,
        status: StatusCode,
        response: reqwest::Response,
    ) -> ClientError {
        let message = match response.text().await {
            Ok(text) => serde_json::from_str::<ErrorResponse>(&text)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            Err(e) => {
                tracing::warn!("failed to read error response body: {}", e);
                format!("HTTP {}", status.as_u16())
            }
        };

        tracing::debug!(status = status.as_u16(), %message, "API returned an error");
        ClientError::Api {
            status: status.as_u16(),
            message,
        }
    }
}
