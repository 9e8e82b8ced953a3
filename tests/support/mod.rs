#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::str::FromStr;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{bail, Result};
use async_trait::async_trait;
use rust_decimal::Decimal;
use skale_assets::chain::ChainBalanceSource;
use skale_assets::market_data::{MarketDataPoint, MarketDataSource};
use skale_assets::models::Erc20Token;
use skale_assets::network::{Network, SkaleParams};

pub const OWNER: &str = "0x1111111111111111111111111111111111111111";
pub const ONE_UNIT_18: &str = "1000000000000000000";

/// In-memory chain with per-contract balances, failures and delays.
#[derive(Default)]
pub struct MockChainBalanceSource {
    native: String,
    token_balances: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    failing: HashSet<String>,
    fail_native: bool,
    native_delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl MockChainBalanceSource {
    pub fn new() -> Self {
        Self {
            native: "0".to_string(),
            ..Self::default()
        }
    }

    pub fn with_native(mut self, balance: impl Into<String>) -> Self {
        self.native = balance.into();
        self
    }

    pub fn with_token(mut self, contract: &str, balance: impl Into<String>) -> Self {
        self.token_balances
            .insert(contract.to_lowercase(), balance.into());
        self
    }

    pub fn with_delay(mut self, contract: &str, delay: Duration) -> Self {
        self.delays.insert(contract.to_lowercase(), delay);
        self
    }

    pub fn fail_on(mut self, contract: &str) -> Self {
        self.failing.insert(contract.to_lowercase());
        self
    }

    pub fn with_native_delay(mut self, delay: Duration) -> Self {
        self.native_delay = Some(delay);
        self
    }

    pub fn fail_native(mut self) -> Self {
        self.fail_native = true;
        self
    }

    /// Contracts queried so far, `native` for the native balance.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChainBalanceSource for MockChainBalanceSource {
    async fn get_balance(&self, _address: &str) -> Result<String> {
        self.calls.lock().unwrap().push("native".to_string());
        if let Some(delay) = self.native_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_native {
            bail!("native balance unavailable");
        }
        Ok(self.native.clone())
    }

    async fn get_token_balance(&self, contract: &str, _address: &str) -> Result<String> {
        let key = contract.to_lowercase();
        self.calls.lock().unwrap().push(key.clone());
        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(&key) {
            bail!("execution reverted");
        }
        Ok(self
            .token_balances
            .get(&key)
            .cloned()
            .unwrap_or_else(|| "0".to_string()))
    }

    fn name(&self) -> &str {
        "mock-chain"
    }
}

/// In-memory market data keyed by identifier.
#[derive(Default)]
pub struct MockMarketDataSource {
    points: HashMap<String, MarketDataPoint>,
    delay: Option<Duration>,
    fail: bool,
}

impl MockMarketDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_point(mut self, point: MarketDataPoint) -> Self {
        self.points.insert(point.id.clone(), point);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn fail_on_fetch(mut self) -> Self {
        self.fail = true;
        self
    }
}

#[async_trait]
impl MarketDataSource for MockMarketDataSource {
    async fn get_market_data(&self, ids: &[&str]) -> Result<Vec<Option<MarketDataPoint>>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            bail!("market data unavailable");
        }
        Ok(ids.iter().map(|id| self.points.get(*id).cloned()).collect())
    }

    fn name(&self) -> &str {
        "mock-market"
    }
}

pub fn eth_point(price: &str) -> MarketDataPoint {
    MarketDataPoint::new("ethereum", Decimal::from_str(price).unwrap())
        .with_sparkline(vec![2400.0, 2450.0, 2500.0])
        .with_price_change_7d(4.2)
}

pub fn token(symbol: &str, contract: &str, decimals: u32) -> Erc20Token {
    Erc20Token::new(format!("{symbol} Token"), symbol, contract, decimals)
}

pub fn europa() -> Network {
    Network::skale(&SkaleParams::europa()).unwrap()
}

pub fn calypso() -> Network {
    Network::skale(&SkaleParams::calypso()).unwrap()
}
