//! Static per-chain custom tokens.

use crate::models::CustomTokenDescriptor;

const CALYPSO_TOKENS: &[CustomTokenDescriptor] = &[CustomTokenDescriptor {
    name: "Europa ETH",
    symbol: "ETH",
    icon: "",
    address: "0x59ab97Ee239e02112652587F9Ef86CB6F762983b",
    decimals: 18,
}];

/// Custom tokens registered for a chain id. Unknown chains have none.
///
/// Chain ids compare case-insensitively (`0x5D456C62` matches `0x5d456c62`).
pub fn custom_tokens_for_chain(chain_id: &str) -> &'static [CustomTokenDescriptor] {
    match chain_id.to_ascii_lowercase().as_str() {
        "0x5d456c62" => CALYPSO_TOKENS,
        _ => &[],
    }
}
