pub mod assets;
pub mod chain;
pub mod config;
pub mod duration;
pub mod format;
pub mod market_data;
pub mod models;
pub mod network;
pub mod units;
