//! CoinGecko market data implementation.
//!
//! Uses the free `/coins/markets` endpoint, which returns current price,
//! 7-day sparkline and 7-day change for a batch of coin ids in one request.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use crate::market_data::{MarketDataPoint, MarketDataSource};

pub const COINGECKO_API_BASE: &str = "https://api.coingecko.com/api/v3";

const USER_AGENT: &str = concat!("skale-assets/", env!("CARGO_PKG_VERSION"));

/// One entry of the `/coins/markets` response.
#[derive(Debug, Deserialize)]
struct CoinMarket {
    id: String,
    current_price: Option<f64>,
    #[serde(default)]
    sparkline_in_7d: Option<SparklineIn7d>,
    #[serde(default)]
    price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(default)]
    last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct SparklineIn7d {
    #[serde(default)]
    price: Vec<f64>,
}

impl CoinMarket {
    /// `None` when CoinGecko lists the coin without a price.
    fn into_point(self) -> Result<Option<MarketDataPoint>> {
        let Some(price) = self.current_price else {
            return Ok(None);
        };
        let current_price = Decimal::from_str(&price.to_string())
            .with_context(|| format!("CoinGecko price for {} is not a decimal: {price}", self.id))?;

        Ok(Some(MarketDataPoint {
            id: self.id,
            current_price,
            sparkline_in_7d: self.sparkline_in_7d.map(|s| s.price).unwrap_or_default(),
            price_change_percentage_7d_in_currency: self
                .price_change_percentage_7d_in_currency
                .unwrap_or(0.0),
            last_updated: self.last_updated,
        }))
    }
}

/// CoinGecko market data source.
///
/// No API key is required for basic usage, though rate limits apply.
pub struct CoinGeckoMarketData {
    client: reqwest::Client,
    base_url: String,
    /// Quote currency for prices (e.g., "usd", "eur")
    quote_currency: String,
    timeout: Option<Duration>,
}

impl CoinGeckoMarketData {
    /// Creates a new CoinGecko source with USD as the quote currency.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Creates a new CoinGecko source with a custom reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: COINGECKO_API_BASE.to_string(),
            quote_currency: "usd".to_string(),
            timeout: None,
        }
    }

    /// Points the source at another API root (mirrors, pro endpoint, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_quote_currency(mut self, currency: impl Into<String>) -> Self {
        self.quote_currency = currency.into().to_lowercase();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    async fn fetch_markets(&self, ids: &[&str]) -> Result<Vec<CoinMarket>> {
        let url = format!(
            "{}/coins/markets?vs_currency={}&ids={}&sparkline=true&price_change_percentage=7d",
            self.base_url,
            self.quote_currency,
            ids.join(",")
        );
        debug!(url = %url, "fetching coingecko markets");

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .context("CoinGecko markets request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("CoinGecko markets API error: {} - {}", status, body));
        }

        let markets: Vec<CoinMarket> = response
            .json()
            .await
            .context("Failed to parse CoinGecko markets response")?;
        Ok(markets)
    }
}

impl Default for CoinGeckoMarketData {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl MarketDataSource for CoinGeckoMarketData {
    async fn get_market_data(&self, ids: &[&str]) -> Result<Vec<Option<MarketDataPoint>>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let markets = self.fetch_markets(ids).await?;
        let mut by_id: HashMap<String, MarketDataPoint> = HashMap::new();
        for market in markets {
            if let Some(point) = market.into_point()? {
                by_id.insert(point.id.clone(), point);
            }
        }

        Ok(ids.iter().map(|id| by_id.get(*id).cloned()).collect())
    }

    fn name(&self) -> &str {
        "coingecko"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_ETH_MARKETS: &str = r#"[{
        "id": "ethereum",
        "symbol": "eth",
        "name": "Ethereum",
        "current_price": 2534.89,
        "market_cap": 304567890123,
        "last_updated": "2024-01-15T12:00:00.000Z",
        "sparkline_in_7d": { "price": [2400.5, 2450.0, 2534.89] },
        "price_change_percentage_7d_in_currency": 5.6
    }]"#;

    const SAMPLE_NO_SPARKLINE: &str = r#"[{
        "id": "skale",
        "symbol": "skl",
        "name": "SKALE",
        "current_price": 0.0712
    }]"#;

    const SAMPLE_NULL_PRICE: &str = r#"[{
        "id": "delisted",
        "symbol": "dls",
        "name": "Delisted",
        "current_price": null
    }]"#;

    #[test]
    fn test_parse_eth_markets() {
        let markets: Vec<CoinMarket> =
            serde_json::from_str(SAMPLE_ETH_MARKETS).expect("Failed to parse markets");
        assert_eq!(markets.len(), 1);

        let point = markets
            .into_iter()
            .next()
            .unwrap()
            .into_point()
            .unwrap()
            .expect("should have price");
        assert_eq!(point.id, "ethereum");
        assert_eq!(point.current_price, Decimal::from_str("2534.89").unwrap());
        assert_eq!(point.sparkline_in_7d, vec![2400.5, 2450.0, 2534.89]);
        assert!((point.price_change_percentage_7d_in_currency - 5.6).abs() < 1e-9);
        assert!(point.last_updated.is_some());
    }

    #[test]
    fn test_missing_sparkline_defaults() {
        let markets: Vec<CoinMarket> = serde_json::from_str(SAMPLE_NO_SPARKLINE).unwrap();
        let point = markets
            .into_iter()
            .next()
            .unwrap()
            .into_point()
            .unwrap()
            .unwrap();
        assert!(point.sparkline_in_7d.is_empty());
        assert_eq!(point.price_change_percentage_7d_in_currency, 0.0);
        assert_eq!(point.current_price, Decimal::from_str("0.0712").unwrap());
    }

    #[test]
    fn test_null_price_is_absent() {
        let markets: Vec<CoinMarket> = serde_json::from_str(SAMPLE_NULL_PRICE).unwrap();
        let point = markets.into_iter().next().unwrap().into_point().unwrap();
        assert!(point.is_none());
    }

    #[test]
    fn test_quote_currency_configuration() {
        let source = CoinGeckoMarketData::new().with_quote_currency("EUR");
        assert_eq!(source.quote_currency, "eur");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let source = CoinGeckoMarketData::new().with_base_url("http://localhost:1234/");
        assert_eq!(source.base_url, "http://localhost:1234");
    }

    #[test]
    fn test_default_implementation() {
        let source = CoinGeckoMarketData::default();
        assert_eq!(source.quote_currency, "usd");
        assert_eq!(source.base_url, COINGECKO_API_BASE);
        assert_eq!(source.name(), "coingecko");
    }

    #[tokio::test]
    async fn test_empty_ids_skip_http() {
        let source = CoinGeckoMarketData::new().with_base_url("http://127.0.0.1:9");
        let data = source.get_market_data(&[]).await.unwrap();
        assert!(data.is_empty());
    }
}
