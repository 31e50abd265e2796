//! Usage and quota types.

use serde::{Deserialize, Serialize};

/// Usage snapshot for a wallet over the current quota period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSnapshot {
    /// Plan tier the wallet is on.
    pub tier: String,
    /// Validations consumed in the current period.
    pub validations_used: u64,
    /// Validations allowed in the current period.
    pub validations_limit: u64,
    /// Cumulative spend today, in wei, as a decimal string.
    pub daily_spend_wei: String,
}
