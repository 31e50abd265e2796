//! Transaction validation request and response types.

use serde::{Deserialize, Serialize};

/// A proposed transaction to submit for validation.
///
/// `from`, `to` and `data` are opaque strings forwarded to the service
/// verbatim; the client never parses, checksums or otherwise interprets
/// them. Chain-specific correctness is entirely the service's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    /// Sender address.
    pub from: String,
    /// Target contract or recipient address.
    pub to: String,
    /// Hex-encoded calldata.
    pub data: String,
    /// Value in wei as a decimal string. Transmitted as `"0"` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Guardrail id override for this request only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardrail_id: Option<String>,
    /// Chain id override for this request only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

impl ValidationRequest {
    /// Create a request with the three required transaction fields.
    pub fn new(from: impl Into<String>, to: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            data: data.into(),
            value: None,
            guardrail_id: None,
            chain_id: None,
        }
    }

    /// Set the value in wei (decimal string).
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Override the guardrail id for this request.
    pub fn with_guardrail_id(mut self, guardrail_id: impl Into<String>) -> Self {
        self.guardrail_id = Some(guardrail_id.into());
        self
    }

    /// Override the chain id for this request.
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }
}

/// Exact wire body for `POST /validate`, built after client defaults are
/// merged in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidateBody<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub data: &'a str,
    pub value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardrail_id: Option<&'a str>,
    pub chain_id: u64,
}

/// Validation status reported by the service.
///
/// The service may introduce new statuses before the SDK learns about them,
/// so unrecognized values deserialize as [`ValidationStatus::Unknown`] rather
/// than failing. `safe` on [`ValidationResult`] is the authoritative
/// execute/abort signal; never infer safety from the status alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    /// Transaction passed all checks.
    Approved,
    /// Transaction failed one or more checks.
    Rejected,
    /// Transaction flagged for manual review.
    Review,
    /// Validation itself errored server-side.
    Error,
    /// Status string this SDK version does not recognize.
    #[serde(other)]
    Unknown,
}

/// Severity of a single check outcome.
///
/// Informational only: `safe` is computed by the service and is not derived
/// locally from check severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckSeverity {
    Info,
    Warning,
    Critical,
}

/// Result of one named validation rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcome {
    /// Rule name.
    pub name: String,
    /// Whether the rule passed.
    pub passed: bool,
    /// Human-readable detail for this rule.
    pub details: String,
    /// Severity of a failure of this rule.
    pub severity: CheckSeverity,
}

/// Outcome of a validation call, passed through from the service without
/// local reinterpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Identifier for this validation, usable with the evidence endpoint.
    pub validation_id: String,
    /// Service-reported status.
    pub status: ValidationStatus,
    /// Human-readable explanation of the verdict.
    pub reason: String,
    /// URI of the evidence record backing this decision.
    pub evidence_uri: String,
    /// Authoritative execute/abort verdict.
    pub safe: bool,
    /// Per-check outcomes in the order the service ran them.
    pub checks: Vec<CheckOutcome>,
    /// Chain id the transaction was validated against.
    pub chain_id: u64,
    /// Whether the caller was authenticated with a registered key.
    pub authenticated: bool,
    /// Caller tier the service applied.
    pub tier: String,
    /// Validation backend that produced this result.
    pub backend: String,
    /// Whether the decision was recorded on-chain.
    pub on_chain_recorded: bool,
}
