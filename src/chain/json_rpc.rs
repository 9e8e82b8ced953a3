use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::ChainBalanceSource;
use crate::units::hex_quantity_to_decimal;

/// `balanceOf(address)` function selector.
const BALANCE_OF_SELECTOR: &str = "0x70a08231";

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// Balance source speaking Ethereum JSON-RPC over HTTP.
pub struct JsonRpcBalanceSource {
    client: reqwest::Client,
    url: String,
    timeout: Option<Duration>,
    next_id: AtomicU64,
}

impl JsonRpcBalanceSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            timeout: None,
            next_id: AtomicU64::new(1),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call(&self, method: &str, params: Value) -> Result<String> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        debug!(url = %self.url, method, id = request.id, "json-rpc call");

        let mut builder = self.client.post(&self.url).json(&request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("RPC request {method} to {} failed", self.url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("RPC {method} failed with status {status}: {body}");
        }

        let body: RpcResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to parse RPC {method} response"))?;

        if let Some(error) = body.error {
            bail!("RPC {method} error {}: {}", error.code, error.message);
        }

        let result = body
            .result
            .ok_or_else(|| anyhow!("RPC {method} response has no result"))?;
        let quantity = result
            .as_str()
            .ok_or_else(|| anyhow!("RPC {method} result is not a string: {result}"))?;

        hex_quantity_to_decimal(quantity)
            .with_context(|| format!("RPC {method} returned an invalid quantity"))
    }
}

/// ABI-encode `balanceOf(owner)`.
fn balance_of_calldata(owner: &str) -> Result<String> {
    let hex = owner
        .strip_prefix("0x")
        .or_else(|| owner.strip_prefix("0X"))
        .unwrap_or(owner);
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        bail!("not an EVM address: {owner:?}");
    }
    Ok(format!(
        "{BALANCE_OF_SELECTOR}{:0>64}",
        hex.to_ascii_lowercase()
    ))
}

#[async_trait::async_trait]
impl ChainBalanceSource for JsonRpcBalanceSource {
    async fn get_balance(&self, address: &str) -> Result<String> {
        self.call("eth_getBalance", json!([address, "latest"])).await
    }

    async fn get_token_balance(&self, contract: &str, address: &str) -> Result<String> {
        let data = balance_of_calldata(address)?;
        self.call("eth_call", json!([{ "to": contract, "data": data }, "latest"]))
            .await
    }

    fn name(&self) -> &str {
        "json-rpc"
    }
}
