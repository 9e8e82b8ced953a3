use serde::{Deserialize, Serialize};

use super::descriptor::{block_explorer_template, ExplorerLink, NetworkDescriptor};
use crate::models::IconRef;

const SKALE_HOME_PAGE: &str = "https://skale.space";
const SKALE_NODE_HOST: &str = "mainnet.skalenodes.com";
const DEFAULT_ICON: &str = "skl.png";
const SKALE_GRADIENT: &str = "#7B3FE4";

/// sFUEL, the gas currency of every SKALE chain.
const CURRENCY_NAME: &str = "SFUEL";
const CURRENCY_NAME_LONG: &str = "Skale FUEL";
const CURRENCY_DECIMALS: u32 = 18;

const COINGECKO_ID: &str = "skale";
const COINGECKO_PLATFORM: &str = "skale";

/// Per-deployment parameters of a SKALE chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkaleParams {
    /// Network identifier, e.g. `SkaleEuropa`
    pub name: String,
    pub name_long: String,
    /// Chain short-name used by the node and explorer hosts
    pub chain_name: String,
    /// `0x`-prefixed hex chain id
    pub chain_id: String,
    /// Icon override; defaults to the SKALE logo
    #[serde(default)]
    pub icon: Option<String>,
}

impl SkaleParams {
    pub fn new(
        name: impl Into<String>,
        name_long: impl Into<String>,
        chain_name: impl Into<String>,
        chain_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            name_long: name_long.into(),
            chain_name: chain_name.into(),
            chain_id: chain_id.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn europa() -> Self {
        Self::new(
            "SkaleEuropa",
            "Europa Liquidity Hub",
            "elated-tan-skat",
            "0x79f99296",
        )
    }

    pub fn calypso() -> Self {
        Self::new(
            "SkaleCalypso",
            "Calypso Innovation Hub",
            "honorable-steel-rasalhague",
            "0x5d456c62",
        )
    }

    pub fn nebula() -> Self {
        Self::new(
            "SkaleNebula",
            "Nebula Gaming Hub",
            "green-giddy-denebola",
            "0x585eb4b1",
        )
    }

    pub fn titan() -> Self {
        Self::new(
            "SkaleTitan",
            "Titan AI Hub",
            "parallel-stormy-spica",
            "0x507aaa2a",
        )
    }

    /// Parameters for every built-in hub.
    pub fn presets() -> Vec<Self> {
        vec![Self::europa(), Self::calypso(), Self::nebula(), Self::titan()]
    }

    /// Look up a built-in hub by network name or chain short-name
    /// (case-insensitive).
    pub fn preset(name: &str) -> Option<Self> {
        Self::presets().into_iter().find(|params| {
            params.name.eq_ignore_ascii_case(name) || params.chain_name.eq_ignore_ascii_case(name)
        })
    }
}

/// Build the descriptor for a SKALE chain.
///
/// Pure: the same parameters always produce the same descriptor.
pub fn build_skale_network(params: &SkaleParams) -> NetworkDescriptor {
    NetworkDescriptor {
        name: params.name.clone(),
        name_long: params.name_long.clone(),
        home_page: SKALE_HOME_PAGE.to_string(),
        block_explorer_tx: block_explorer_template(&params.chain_name, ExplorerLink::Tx),
        block_explorer_addr: block_explorer_template(&params.chain_name, ExplorerLink::Address),
        chain_id: params.chain_id.clone(),
        is_test_network: false,
        currency_name: CURRENCY_NAME.to_string(),
        currency_name_long: CURRENCY_NAME_LONG.to_string(),
        decimals: CURRENCY_DECIMALS,
        node: format!("wss://{SKALE_NODE_HOST}/v1/ws/{}", params.chain_name),
        rpc_url: format!("https://{SKALE_NODE_HOST}/v1/{}", params.chain_name),
        icon: IconRef::new(params.icon.as_deref().unwrap_or(DEFAULT_ICON)),
        gradient: SKALE_GRADIENT.to_string(),
        coingecko_id: COINGECKO_ID.to_string(),
        coingecko_platform: COINGECKO_PLATFORM.to_string(),
        custom_tokens: true,
    }
}
