use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use skale_assets::assets::{AssetAggregator, AssetReport};
use skale_assets::chain::JsonRpcBalanceSource;
use skale_assets::config::{default_config_path, Config};
use skale_assets::market_data::providers::CoinGeckoMarketData;
use skale_assets::market_data::{MarketDataSource, NoopMarketData};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "skale-assets")]
#[command(about = "Priced asset balances of an address on a SKALE chain")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Network name (e.g. SkaleEuropa) or chain short-name
    network: String,

    /// Account address
    address: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,skale_assets=info")),
        )
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let config = Config::load_or_default(&config_path)?;
    let network = config.resolve_network(&cli.network)?;

    let rpc_url = config
        .rpc
        .url
        .clone()
        .unwrap_or_else(|| network.descriptor.rpc_url.clone());
    let chain = JsonRpcBalanceSource::new(rpc_url).with_timeout(config.rpc.timeout);

    let market_data: Arc<dyn MarketDataSource> = if config.market_data.enabled {
        Arc::new(
            CoinGeckoMarketData::new()
                .with_base_url(&config.market_data.base_url)
                .with_timeout(config.market_data.timeout),
        )
    } else {
        Arc::new(NoopMarketData)
    };

    let aggregator = AssetAggregator::new(Arc::new(chain), market_data);
    let report = aggregator
        .aggregate(&network, &cli.address)
        .await
        .with_context(|| {
            format!(
                "Failed to load assets of {} on {}",
                cli.address, network.descriptor.name
            )
        })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report);
    }

    Ok(())
}

fn print_table(report: &AssetReport) {
    let symbol_width = report
        .assets
        .iter()
        .map(|asset| asset.symbol.len())
        .max()
        .unwrap_or(0)
        .max("SYMBOL".len());

    println!(
        "{:<symbol_width$}  {:>24}  {:>14}  {:>8}",
        "SYMBOL", "BALANCE", "USD", "7D %"
    );
    for asset in &report.assets {
        println!(
            "{:<symbol_width$}  {:>24}  {:>14}  {:>8.2}",
            asset.symbol, asset.balancef, asset.balance_usdf, asset.price_change_percentage
        );
    }

    for failure in &report.failures {
        eprintln!(
            "warning: {} ({}) skipped: {}",
            failure.symbol, failure.contract, failure.error
        );
    }
}
