use serde::{Deserialize, Serialize};

use crate::models::Asset;

/// A registered token whose balance could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceFailure {
    pub contract: String,
    pub symbol: String,
    pub error: String,
}

/// Result of one aggregation pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetReport {
    /// Native, clone, registered and custom rows, in that order.
    pub assets: Vec<Asset>,
    /// Non-fatal per-token failures. The affected tokens are absent from `assets`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<BalanceFailure>,
}

impl AssetReport {
    /// True when every registered token balance loaded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
