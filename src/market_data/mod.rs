mod models;
mod provider;
#[cfg(feature = "http")]
pub mod providers;
mod sparkline;

pub use models::MarketDataPoint;
pub use provider::{MarketDataSource, NoopMarketData};
pub use sparkline::Sparkline;
