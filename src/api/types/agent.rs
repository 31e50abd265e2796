//! Agent trust profile types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Verification status of an agent wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Wallet has never completed verification.
    Unverified,
    /// Verification submitted, awaiting review.
    Pending,
    /// Wallet identity verified.
    Verified,
    /// Status string this SDK version does not recognize.
    #[serde(other)]
    Unknown,
}

/// Aggregate validation statistics for an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStats {
    /// Total validations ever submitted by this wallet.
    pub total_validations: u64,
    /// Validations that came back safe.
    pub passed: u64,
    /// Validations that came back unsafe.
    pub failed: u64,
    /// Fraction of validations that passed, 0.0 to 1.0.
    pub pass_rate: f64,
}

/// Registration metadata, present only for registered agents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentRegistration {
    /// Agent display name.
    pub name: Option<String>,
    /// Operator organisation.
    pub operator: Option<String>,
    /// When the agent registered.
    pub registered_at: Option<DateTime<Utc>>,
}

/// Trust and reputation snapshot for an agent wallet.
///
/// Trust score and tier are opaque values computed server-side; the client
/// performs no local scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentProfile {
    /// Wallet address the snapshot describes.
    pub wallet: String,
    /// Whether the wallet is registered with the service.
    pub registered: bool,
    /// Identity verification status.
    pub verification_status: VerificationStatus,
    /// Computed trust score, 0 to 100.
    pub trust_score: u8,
    /// Tier label (e.g. `"gold"`).
    pub tier: String,
    /// Display symbol for the tier.
    pub tier_emoji: String,
    /// Validation statistics.
    pub stats: AgentStats,
    /// Registration metadata, absent for unregistered wallets.
    #[serde(default)]
    pub registration: Option<AgentRegistration>,
    /// Service recommendation for counterparties of this agent.
    pub recommendation: String,
}
