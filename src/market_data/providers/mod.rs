pub mod coingecko;

pub use coingecko::CoinGeckoMarketData;
