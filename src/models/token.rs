use serde::{Deserialize, Serialize};

use super::IconRef;

/// A fungible token registered against a network's live state.
///
/// Tokens are immutable; balances fetched for them live in the aggregation
/// call that requested them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Erc20Token {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub icon: IconRef,
    pub contract: String,
    pub decimals: u32,
}

impl Erc20Token {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        contract: impl Into<String>,
        decimals: u32,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            icon: IconRef::none(),
            contract: contract.into(),
            decimals,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<IconRef>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// Statically registered chain-specific token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomTokenDescriptor {
    pub name: &'static str,
    pub symbol: &'static str,
    pub icon: &'static str,
    pub address: &'static str,
    pub decimals: u32,
}
