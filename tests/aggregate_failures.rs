mod support;

use std::sync::Arc;

use anyhow::Result;
use skale_assets::assets::{AssetAggregator, CLONE_CURRENCY_CONTRACT};
use support::{europa, token, MockChainBalanceSource, MockMarketDataSource, ONE_UNIT_18, OWNER};

const USDC: &str = "0x5F795bb52dAC3085f578f4877D450e2929D2F13d";
const SKL: &str = "0xE0595a049d02b7674572b0d59cd4880Db60EDC50";

#[tokio::test]
async fn native_balance_failure_fails_the_call() {
    let chain = MockChainBalanceSource::new().fail_native();
    let aggregator = AssetAggregator::new(Arc::new(chain), Arc::new(MockMarketDataSource::new()));

    let err = aggregator.aggregate(&europa(), OWNER).await.unwrap_err();
    assert!(err.to_string().contains("SFUEL"));
    assert!(format!("{err:#}").contains("native balance unavailable"));
}

#[tokio::test]
async fn clone_balance_failure_fails_the_call() {
    let chain = MockChainBalanceSource::new().fail_on(CLONE_CURRENCY_CONTRACT);
    let aggregator = AssetAggregator::new(Arc::new(chain), Arc::new(MockMarketDataSource::new()));

    let err = aggregator.aggregate(&europa(), OWNER).await.unwrap_err();
    assert!(err.to_string().contains("ETHC"));
}

#[tokio::test]
async fn market_data_failure_fails_the_call() {
    let market = MockMarketDataSource::new().fail_on_fetch();
    let aggregator = AssetAggregator::new(Arc::new(MockChainBalanceSource::new()), Arc::new(market));

    let err = aggregator.aggregate(&europa(), OWNER).await.unwrap_err();
    assert!(err.to_string().contains("mock-market"));
}

#[tokio::test]
async fn token_failure_drops_only_that_token() -> Result<()> {
    let chain = MockChainBalanceSource::new()
        .with_token(USDC, "1000000")
        .with_token(SKL, ONE_UNIT_18)
        .fail_on(USDC);
    let aggregator = AssetAggregator::new(Arc::new(chain), Arc::new(MockMarketDataSource::new()));
    let network = europa()
        .with_token(token("USDC", USDC, 6))
        .with_token(token("SKL", SKL, 18));

    let report = aggregator.aggregate(&network, OWNER).await?;

    let symbols: Vec<_> = report.assets.iter().map(|a| a.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["SFUEL", "ETHC", "SKL"]);
    assert!(!report.is_complete());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].symbol, "USDC");
    assert_eq!(report.failures[0].contract, USDC);
    assert!(report.failures[0].error.contains("execution reverted"));

    Ok(())
}

#[tokio::test]
async fn malformed_token_balance_is_reported() -> Result<()> {
    let chain = MockChainBalanceSource::new().with_token(SKL, "0x10");
    let aggregator = AssetAggregator::new(Arc::new(chain), Arc::new(MockMarketDataSource::new()));
    let network = europa().with_token(token("SKL", SKL, 18));

    let report = aggregator.aggregate(&network, OWNER).await?;

    assert_eq!(report.assets.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].error.contains("SKL"));

    Ok(())
}

#[tokio::test]
async fn every_token_is_queried_even_after_a_failure() -> Result<()> {
    let chain = Arc::new(
        MockChainBalanceSource::new()
            .fail_on(USDC)
            .with_token(SKL, ONE_UNIT_18),
    );
    let aggregator = AssetAggregator::new(chain.clone(), Arc::new(MockMarketDataSource::new()));
    let network = europa()
        .with_token(token("USDC", USDC, 6))
        .with_token(token("SKL", SKL, 18));

    aggregator.aggregate(&network, OWNER).await?;

    let calls = chain.calls();
    assert!(calls.contains(&"native".to_string()));
    assert!(calls.contains(&CLONE_CURRENCY_CONTRACT.to_lowercase()));
    assert!(calls.contains(&USDC.to_lowercase()));
    assert!(calls.contains(&SKL.to_lowercase()));

    Ok(())
}
