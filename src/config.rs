use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::duration::{deserialize_duration, serialize_duration};
use crate::models::Erc20Token;
use crate::network::{Network, SkaleParams};

const CONFIG_FILE_NAME: &str = "skale-assets.toml";

/// Default CoinGecko API root.
fn default_market_data_base_url() -> String {
    "https://api.coingecko.com/api/v3".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_enabled() -> bool {
    true
}

/// Chain RPC settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RpcConfig {
    /// Per-request timeout for balance calls.
    #[serde(
        default = "default_timeout",
        deserialize_with = "deserialize_duration",
        serialize_with = "serialize_duration"
    )]
    pub timeout: Duration,

    /// Overrides the network's own JSON-RPC endpoint when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            url: None,
        }
    }
}

/// Market data settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketDataConfig {
    /// When false, no prices are fetched and USD fields stay at zero.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_market_data_base_url")]
    pub base_url: String,

    #[serde(
        default = "default_timeout",
        deserialize_with = "deserialize_duration",
        serialize_with = "serialize_duration"
    )]
    pub timeout: Duration,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            base_url: default_market_data_base_url(),
            timeout: default_timeout(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rpc: RpcConfig,

    pub market_data: MarketDataConfig,

    /// Networks beyond the built-in hubs. An entry whose name matches a
    /// built-in hub replaces it.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<SkaleParams>,

    /// Registered tokens keyed by network name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub tokens: BTreeMap<String, Vec<Erc20Token>>,
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load config from a file, or return default config if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Find network parameters by network name or chain short-name,
    /// preferring configured networks over built-in hubs.
    pub fn network_params(&self, name: &str) -> Option<SkaleParams> {
        self.networks
            .iter()
            .find(|params| {
                params.name.eq_ignore_ascii_case(name)
                    || params.chain_name.eq_ignore_ascii_case(name)
            })
            .cloned()
            .or_else(|| SkaleParams::preset(name))
    }

    /// Registered tokens configured for a network name.
    pub fn tokens_for(&self, network_name: &str) -> Vec<Erc20Token> {
        self.tokens
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(network_name))
            .map(|(_, tokens)| tokens.clone())
            .unwrap_or_default()
    }

    /// Build the live state of a network: validated descriptor plus its
    /// registered tokens.
    pub fn resolve_network(&self, name: &str) -> Result<Network> {
        let params = self
            .network_params(name)
            .with_context(|| format!("Unknown network: {name}"))?;
        let tokens = self.tokens_for(&params.name);
        let network = Network::skale(&params)
            .with_context(|| format!("Invalid configuration for network {}", params.name))?;
        Ok(network.with_tokens(tokens))
    }
}

/// Returns the default config file path.
///
/// Resolution order:
/// 1. `./skale-assets.toml` if it exists in current directory
/// 2. `~/.config/skale-assets/skale-assets.toml` (XDG config directory)
pub fn default_config_path() -> PathBuf {
    let local_config = PathBuf::from(CONFIG_FILE_NAME);
    if local_config.exists() {
        return local_config;
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("skale-assets").join(CONFIG_FILE_NAME);
    }

    local_config
}
