use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::IconRef;
use crate::format::format_amount;
use crate::units::{from_base, UnitAmount, UnitsError};

/// Contract sentinel used for the chain's native currency.
pub const NATIVE_TOKEN_ADDRESS: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

/// Where an asset row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetProvenance {
    /// The chain's gas currency
    Native,
    /// The network-specific clone currency
    Secondary,
    /// A token from the network's registered token list
    Registered,
    /// A token from the static per-chain registry
    Custom,
}

/// One displayable row of an account's holdings.
///
/// `balance` is the raw integer amount in the smallest unit; `balancef` is the
/// same amount in display units, already formatted. USD fields are zero unless
/// market data priced the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub name: String,
    pub symbol: String,
    pub icon: IconRef,
    pub balance: String,
    pub balancef: String,
    pub decimals: u32,
    #[serde(rename = "balanceUSD", with = "rust_decimal::serde::float")]
    pub balance_usd: Decimal,
    #[serde(rename = "balanceUSDf")]
    pub balance_usdf: String,
    pub value: String,
    pub valuef: String,
    pub price_change_percentage: f64,
    pub sparkline: String,
    pub contract: String,
    pub provenance: AssetProvenance,
}

impl Asset {
    /// Build a row with no pricing attached.
    pub fn unpriced(
        name: impl Into<String>,
        symbol: impl Into<String>,
        icon: IconRef,
        balance: impl Into<String>,
        decimals: u32,
        contract: impl Into<String>,
        provenance: AssetProvenance,
    ) -> Result<Self, UnitsError> {
        let balance = balance.into();
        let balancef = format_amount(&UnitAmount::from_base(&balance, decimals)?);

        Ok(Self {
            name: name.into(),
            symbol: symbol.into(),
            icon,
            balance,
            balancef,
            decimals,
            balance_usd: Decimal::ZERO,
            balance_usdf: "0".to_string(),
            value: "0".to_string(),
            valuef: "0".to_string(),
            price_change_percentage: 0.0,
            sparkline: String::new(),
            contract: contract.into(),
            provenance,
        })
    }

    /// Balance in display units, for price arithmetic.
    pub fn amount(&self) -> Result<Decimal, UnitsError> {
        from_base(&self.balance, self.decimals)
    }

    /// True when the formatted balance is the zero marker.
    pub fn is_empty(&self) -> bool {
        self.balancef == "0"
    }
}
