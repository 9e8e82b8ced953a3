use std::time::Duration;

use anyhow::Result;
use skale_assets::config::Config;
use skale_assets::network::SkaleParams;
use tempfile::TempDir;

#[test]
fn every_preset_resolves_to_a_valid_network() -> Result<()> {
    let config = Config::default();
    for params in SkaleParams::presets() {
        let network = config.resolve_network(&params.name)?;
        let descriptor = &network.descriptor;

        assert_eq!(descriptor.chain_id, params.chain_id);
        assert_eq!(descriptor.currency_name, "SFUEL");
        assert_eq!(descriptor.decimals, 18);
        assert!(descriptor.custom_tokens);
        assert_eq!(
            descriptor.node,
            format!("wss://mainnet.skalenodes.com/v1/ws/{}", params.chain_name)
        );
        assert!(network.tokens.is_empty());
    }
    Ok(())
}

#[test]
fn explorer_urls_from_resolved_network() -> Result<()> {
    let network = Config::default().resolve_network("SkaleNebula")?;

    assert_eq!(
        network.descriptor.tx_url("0xabc"),
        "https://green-giddy-denebola.explorer.mainnet.skalenodes.com/tx/0xabc"
    );
    assert_eq!(
        network.descriptor.address_url("0xdef"),
        "https://green-giddy-denebola.explorer.mainnet.skalenodes.com/address/0xdef"
    );
    Ok(())
}

#[test]
fn config_file_adds_network_and_tokens() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("skale-assets.toml");
    std::fs::write(
        &path,
        r#"
[rpc]
timeout = "3s"

[[networks]]
name = "SkaleChaos"
name_long = "Chaos Testnet"
chain_name = "staging-fast-active-bellatrix"
chain_id = "0x50877ed6"

[[tokens.SkaleChaos]]
name = "Test Token"
symbol = "TST"
icon = "tst.svg"
contract = "0x0000000000000000000000000000000000000001"
decimals = 6

[[tokens.SkaleChaos]]
name = "Other Token"
symbol = "OTH"
contract = "0x0000000000000000000000000000000000000002"
decimals = 18
"#,
    )?;

    let config = Config::load_or_default(&path)?;
    assert_eq!(config.rpc.timeout, Duration::from_secs(3));

    let network = config.resolve_network("staging-fast-active-bellatrix")?;
    assert_eq!(network.descriptor.name, "SkaleChaos");
    assert_eq!(network.descriptor.name_long, "Chaos Testnet");
    assert_eq!(
        network.descriptor.rpc_url,
        "https://mainnet.skalenodes.com/v1/staging-fast-active-bellatrix"
    );

    let symbols: Vec<_> = network.tokens.iter().map(|t| t.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["TST", "OTH"]);
    assert_eq!(network.tokens[0].icon.as_str(), "tst.svg");
    assert!(network.tokens[1].icon.is_empty());

    Ok(())
}

#[test]
fn malformed_token_entry_is_a_parse_error() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("skale-assets.toml");
    std::fs::write(
        &path,
        r#"
[[tokens.SkaleEuropa]]
name = "No Decimals"
symbol = "NOD"
contract = "0x0000000000000000000000000000000000000001"
"#,
    )?;

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    Ok(())
}
