use serde::{Deserialize, Serialize};

use crate::models::IconRef;

/// Host serving block explorers for every SKALE mainnet chain.
pub const EXPLORER_HOST: &str = "explorer.mainnet.skalenodes.com";

/// Kinds of block-explorer links a network exposes.
///
/// Each kind maps to a fixed URL path segment and placeholder name; new kinds
/// extend this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplorerLink {
    Tx,
    Address,
}

impl ExplorerLink {
    pub const ALL: [ExplorerLink; 2] = [ExplorerLink::Tx, ExplorerLink::Address];

    pub const fn path(self) -> &'static str {
        match self {
            ExplorerLink::Tx => "tx",
            ExplorerLink::Address => "address",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            ExplorerLink::Tx => "txHash",
            ExplorerLink::Address => "address",
        }
    }

    /// The literal marker substituted in templates, e.g. `[[txHash]]`.
    pub fn marker(self) -> String {
        format!("[[{}]]", self.placeholder())
    }
}

/// Build the explorer URL template for a chain, e.g.
/// `https://elated-tan-skat.explorer.mainnet.skalenodes.com/tx/[[txHash]]`.
pub fn block_explorer_template(chain_name: &str, link: ExplorerLink) -> String {
    format!(
        "https://{chain_name}.{EXPLORER_HOST}/{}/{}",
        link.path(),
        link.marker()
    )
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("network {network}: decimal precision must be greater than zero")]
    ZeroDecimals { network: String },
    #[error("network {network}: {link} explorer template must contain exactly one [[{placeholder}]] placeholder, got {template:?}")]
    BadExplorerTemplate {
        network: String,
        link: &'static str,
        placeholder: &'static str,
        template: String,
    },
    #[error("network {network}: chain id must be 0x-prefixed hex, got {chain_id:?}")]
    InvalidChainId { network: String, chain_id: String },
}

/// Immutable configuration of one network.
///
/// Built once (see [`super::build_skale_network`]) and shared read-only by
/// every aggregation against the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    pub name: String,
    pub name_long: String,
    pub home_page: String,
    pub block_explorer_tx: String,
    pub block_explorer_addr: String,
    pub chain_id: String,
    pub is_test_network: bool,
    pub currency_name: String,
    pub currency_name_long: String,
    pub decimals: u32,
    /// Websocket node endpoint
    pub node: String,
    /// HTTP JSON-RPC endpoint
    pub rpc_url: String,
    pub icon: IconRef,
    pub gradient: String,
    pub coingecko_id: String,
    pub coingecko_platform: String,
    /// Whether users may add their own tokens on this network
    pub custom_tokens: bool,
}

impl NetworkDescriptor {
    /// Check the descriptor's invariants.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.decimals == 0 {
            return Err(DescriptorError::ZeroDecimals {
                network: self.name.clone(),
            });
        }

        if !is_hex_chain_id(&self.chain_id) {
            return Err(DescriptorError::InvalidChainId {
                network: self.name.clone(),
                chain_id: self.chain_id.clone(),
            });
        }

        for link in ExplorerLink::ALL {
            let template = self.explorer_template(link);
            if !has_single_placeholder(template, link) {
                return Err(DescriptorError::BadExplorerTemplate {
                    network: self.name.clone(),
                    link: link.path(),
                    placeholder: link.placeholder(),
                    template: template.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn explorer_template(&self, link: ExplorerLink) -> &str {
        match link {
            ExplorerLink::Tx => &self.block_explorer_tx,
            ExplorerLink::Address => &self.block_explorer_addr,
        }
    }

    /// Explorer URL for a transaction hash.
    pub fn tx_url(&self, tx_hash: &str) -> String {
        self.explorer_url(ExplorerLink::Tx, tx_hash)
    }

    /// Explorer URL for an account or contract address.
    pub fn address_url(&self, address: &str) -> String {
        self.explorer_url(ExplorerLink::Address, address)
    }

    fn explorer_url(&self, link: ExplorerLink, value: &str) -> String {
        self.explorer_template(link).replace(&link.marker(), value)
    }
}

fn has_single_placeholder(template: &str, link: ExplorerLink) -> bool {
    template.matches("[[").count() == 1 && template.matches(&link.marker()).count() == 1
}

fn is_hex_chain_id(chain_id: &str) -> bool {
    chain_id
        .strip_prefix("0x")
        .is_some_and(|hex| !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}
