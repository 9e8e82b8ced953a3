mod builder;
mod descriptor;
mod registry;

use std::sync::Arc;

pub use builder::{build_skale_network, SkaleParams};
pub use descriptor::{
    block_explorer_template, DescriptorError, ExplorerLink, NetworkDescriptor, EXPLORER_HOST,
};
pub use registry::custom_tokens_for_chain;

use crate::models::Erc20Token;

/// A network's live state: its static descriptor plus the tokens currently
/// registered against it, in display order.
#[derive(Debug, Clone)]
pub struct Network {
    pub descriptor: Arc<NetworkDescriptor>,
    pub tokens: Vec<Erc20Token>,
}

impl Network {
    pub fn new(descriptor: Arc<NetworkDescriptor>) -> Self {
        Self {
            descriptor,
            tokens: Vec::new(),
        }
    }

    /// Build and validate a SKALE network from its parameters.
    pub fn skale(params: &SkaleParams) -> Result<Self, DescriptorError> {
        let descriptor = build_skale_network(params);
        descriptor.validate()?;
        Ok(Self::new(Arc::new(descriptor)))
    }

    pub fn with_tokens(mut self, tokens: Vec<Erc20Token>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn with_token(mut self, token: Erc20Token) -> Self {
        self.tokens.push(token);
        self
    }
}
