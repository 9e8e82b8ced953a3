//! On-chain balance lookups.

#[cfg(feature = "http")]
mod json_rpc;

#[cfg(feature = "http")]
pub use json_rpc::JsonRpcBalanceSource;

use anyhow::Result;

/// Reads balances for a single address from one chain.
///
/// Balances are returned as base-10 integer strings in the smallest unit.
/// Address and contract validity are the implementation's concern.
#[async_trait::async_trait]
pub trait ChainBalanceSource: Send + Sync {
    /// Balance of the chain's native currency.
    async fn get_balance(&self, address: &str) -> Result<String>;

    /// Balance of a fungible token contract.
    async fn get_token_balance(&self, contract: &str, address: &str) -> Result<String>;

    fn name(&self) -> &str;
}
