//! Asset aggregation for SKALE chains.

mod aggregator;
mod report;

pub use aggregator::AssetAggregator;
pub use report::{AssetReport, BalanceFailure};

/// ETHC, the Ethereum clone token predeployed on every SKALE chain.
pub const CLONE_CURRENCY_CONTRACT: &str = "0xD2Aaa00700000000000000000000000000000000";
pub const CLONE_CURRENCY_DECIMALS: u32 = 18;
pub const CLONE_CURRENCY_NAME: &str = "Ethereum Clone";
pub const CLONE_CURRENCY_SYMBOL: &str = "ETHC";
/// ETHC is priced as ETH.
pub const CLONE_CURRENCY_MARKET_ID: &str = "ethereum";

const CLONE_CURRENCY_ICON: &str = "eth.svg";
const NATIVE_CURRENCY_ICON: &str = "skl-fuel.png";
const SPARKLINE_WIDTH: u32 = 25;
