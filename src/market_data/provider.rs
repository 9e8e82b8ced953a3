use anyhow::Result;

use super::MarketDataPoint;

/// Source of current market data.
///
/// Implementations return exactly one slot per requested identifier, in the
/// order requested. `None` means the source has no data for that identifier
/// and is not an error.
#[async_trait::async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn get_market_data(&self, ids: &[&str]) -> Result<Vec<Option<MarketDataPoint>>>;

    fn name(&self) -> &str;
}

/// Source that knows nothing; every slot is `None`.
pub struct NoopMarketData;

#[async_trait::async_trait]
impl MarketDataSource for NoopMarketData {
    async fn get_market_data(&self, ids: &[&str]) -> Result<Vec<Option<MarketDataPoint>>> {
        Ok(vec![None; ids.len()])
    }

    fn name(&self) -> &str {
        "noop"
    }
}
