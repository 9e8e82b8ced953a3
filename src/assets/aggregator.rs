use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use futures::future::join_all;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::{
    AssetReport, BalanceFailure, CLONE_CURRENCY_CONTRACT, CLONE_CURRENCY_DECIMALS,
    CLONE_CURRENCY_ICON, CLONE_CURRENCY_MARKET_ID, CLONE_CURRENCY_NAME, CLONE_CURRENCY_SYMBOL,
    NATIVE_CURRENCY_ICON, SPARKLINE_WIDTH,
};
use crate::chain::ChainBalanceSource;
use crate::format::format_fiat_value;
use crate::market_data::{MarketDataPoint, MarketDataSource, Sparkline};
use crate::models::{Asset, AssetProvenance, Erc20Token, IconRef, NATIVE_TOKEN_ADDRESS};
use crate::network::{custom_tokens_for_chain, Network, NetworkDescriptor};

/// Builds the priced asset list of an address on one network.
///
/// Holds no per-call state, so one aggregator can serve concurrent calls.
pub struct AssetAggregator {
    chain: Arc<dyn ChainBalanceSource>,
    market_data: Arc<dyn MarketDataSource>,
}

impl AssetAggregator {
    pub fn new(chain: Arc<dyn ChainBalanceSource>, market_data: Arc<dyn MarketDataSource>) -> Self {
        Self { chain, market_data }
    }

    /// Fetch, price and order every asset `address` holds on `network`.
    ///
    /// Native balance, clone balance and clone market data are mandatory: if
    /// any of them fails the whole call fails. Registered-token failures are
    /// reported in [`AssetReport::failures`] and only drop the affected row.
    pub async fn aggregate(&self, network: &Network, address: &str) -> Result<AssetReport> {
        let descriptor = network.descriptor.as_ref();
        debug!(
            network = %descriptor.name,
            address,
            tokens = network.tokens.len(),
            "aggregating assets"
        );

        let native = async {
            self.chain
                .get_balance(address)
                .await
                .with_context(|| format!("Failed to fetch {} balance", descriptor.currency_name))
        };
        let secondary = async {
            self.chain
                .get_token_balance(CLONE_CURRENCY_CONTRACT, address)
                .await
                .with_context(|| format!("Failed to fetch {CLONE_CURRENCY_SYMBOL} balance"))
        };
        let market = self.clone_market_data();
        let tokens = join_all(network.tokens.iter().map(|token| async move {
            let balance = self.chain.get_token_balance(&token.contract, address).await;
            (token, balance)
        }));

        let (mandatory, token_balances) =
            tokio::join!(async { tokio::try_join!(native, secondary, market) }, tokens);
        let (native_balance, clone_balance, clone_market) = mandatory?;

        let mut assets = Vec::with_capacity(2 + network.tokens.len());
        assets.push(native_asset(descriptor, native_balance)?);
        assets.push(clone_asset(clone_balance, clone_market)?);

        let mut failures = Vec::new();
        for (token, balance) in token_balances {
            match balance.and_then(|balance| registered_asset(token, balance)) {
                Ok(asset) if asset.is_empty() => {}
                Ok(asset) => assets.push(asset),
                Err(e) => {
                    warn!(
                        network = %descriptor.name,
                        contract = %token.contract,
                        symbol = %token.symbol,
                        error = %e,
                        "token balance unavailable"
                    );
                    failures.push(BalanceFailure {
                        contract: token.contract.clone(),
                        symbol: token.symbol.clone(),
                        error: format!("{e:#}"),
                    });
                }
            }
        }

        assets.extend(custom_assets(&descriptor.chain_id)?);

        info!(
            network = %descriptor.name,
            assets = assets.len(),
            failed = failures.len(),
            "assets aggregated"
        );

        Ok(AssetReport { assets, failures })
    }

    async fn clone_market_data(&self) -> Result<Option<MarketDataPoint>> {
        let points = self
            .market_data
            .get_market_data(&[CLONE_CURRENCY_MARKET_ID])
            .await
            .with_context(|| {
                format!(
                    "Failed to fetch {CLONE_CURRENCY_MARKET_ID} market data from {}",
                    self.market_data.name()
                )
            })?;
        Ok(points.into_iter().next().flatten())
    }
}

fn native_asset(descriptor: &NetworkDescriptor, balance: String) -> Result<Asset> {
    Asset::unpriced(
        descriptor.currency_name_long.clone(),
        descriptor.currency_name.clone(),
        IconRef::new(NATIVE_CURRENCY_ICON),
        balance,
        descriptor.decimals,
        NATIVE_TOKEN_ADDRESS,
        AssetProvenance::Native,
    )
    .with_context(|| format!("Invalid {} balance", descriptor.currency_name))
}

fn clone_asset(balance: String, market: Option<MarketDataPoint>) -> Result<Asset> {
    let mut asset = Asset::unpriced(
        CLONE_CURRENCY_NAME,
        CLONE_CURRENCY_SYMBOL,
        IconRef::new(CLONE_CURRENCY_ICON),
        balance,
        CLONE_CURRENCY_DECIMALS,
        CLONE_CURRENCY_CONTRACT,
        AssetProvenance::Secondary,
    )
    .with_context(|| format!("Invalid {CLONE_CURRENCY_SYMBOL} balance"))?;

    let price = market
        .as_ref()
        .map(|point| point.current_price)
        .unwrap_or(Decimal::ZERO);
    let balance_usd = asset
        .amount()?
        .checked_mul(price)
        .ok_or_else(|| anyhow!("{CLONE_CURRENCY_SYMBOL} USD balance overflows"))?
        .normalize();

    asset.balance_usd = balance_usd;
    asset.balance_usdf = format_fiat_value(balance_usd);
    asset.value = price.normalize().to_string();
    asset.valuef = format_fiat_value(price);

    if let Some(point) = market {
        asset.price_change_percentage = point.price_change_percentage_7d_in_currency;
        asset.sparkline = Sparkline::new(&point.sparkline_in_7d, SPARKLINE_WIDTH).data_uri();
    }

    Ok(asset)
}

fn registered_asset(token: &Erc20Token, balance: String) -> Result<Asset> {
    Asset::unpriced(
        token.name.clone(),
        token.symbol.clone(),
        token.icon.clone(),
        balance,
        token.decimals,
        token.contract.clone(),
        AssetProvenance::Registered,
    )
    .with_context(|| format!("Invalid {} balance", token.symbol))
}

/// Custom tokens are not balance-checked, so every row carries a zero
/// balance and the empty-row filter removes it.
fn custom_assets(chain_id: &str) -> Result<Vec<Asset>> {
    let mut assets = Vec::new();
    for token in custom_tokens_for_chain(chain_id) {
        let asset = Asset::unpriced(
            token.name,
            token.symbol,
            IconRef::new(token.icon),
            "0",
            token.decimals,
            token.address,
            AssetProvenance::Custom,
        )?;
        if !asset.is_empty() {
            assets.push(asset);
        }
    }
    Ok(assets)
}
