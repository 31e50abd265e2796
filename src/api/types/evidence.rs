//! Evidence record types.
//!
//! Evidence is a retrospective, immutable record of a past validation
//! decision. Repeated lookups by the same id are idempotent reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::types::validation::ValidationResult;

/// The original transaction fields as submitted for validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceTransaction {
    pub from: String,
    pub to: String,
    pub data: String,
    pub value: String,
}

/// Summary of the submitting agent at validation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentSummary {
    pub wallet: String,
    pub trust_score: u8,
    pub tier: String,
}

/// Authentication and on-chain proof metadata for an evidence record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofMetadata {
    /// Whether the validation was made with a registered, authenticated key.
    pub authenticated: bool,
    /// Whether the decision has been anchored on-chain.
    pub on_chain: bool,
    /// Batch the decision was anchored in, if on-chain.
    pub batch_id: Option<String>,
    /// When the decision was anchored, if on-chain.
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Full retrospective record of a past validation decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceRecord {
    /// Validation this record belongs to.
    pub validation_id: String,
    /// When the validation was performed.
    pub timestamp: DateTime<Utc>,
    /// Chain id the transaction was validated against.
    pub chain_id: u64,
    /// The transaction as originally submitted.
    pub transaction: EvidenceTransaction,
    /// Snapshot of the validation result.
    pub result: ValidationResult,
    /// Guardrail applied, if any.
    pub guardrail_id: Option<String>,
    /// Submitting agent at validation time.
    pub agent: AgentSummary,
    /// Proof metadata.
    pub proof: ProofMetadata,
}
