use alloy::primitives::Address;
use serde_json::Value;

use declaration_board_core::{PortError, WalletPort};

use crate::AdapterConfig;

/// EIP-1193 error code for a request the user declined.
pub const USER_REJECTED_CODE: i64 = 4001;
/// EIP-1193 error code for an account or method the user has not authorized.
pub const UNAUTHORIZED_CODE: i64 = 4100;

/// Wallet port backed by an EIP-1193 provider reached through a JSON-RPC proxy.
#[derive(Debug, Clone)]
pub struct Eip1193Adapter {
    mode: ProviderMode,
}

#[derive(Debug, Clone)]
enum ProviderMode {
    /// No provider in this environment.
    Absent,
    Disabled(String),
    Proxy(ProxyRuntime),
}

#[derive(Debug, Clone)]
struct ProxyRuntime {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl Default for Eip1193Adapter {
    fn default() -> Self {
        Self::with_config(AdapterConfig::from_env())
    }
}

impl Eip1193Adapter {
    pub fn with_config(config: AdapterConfig) -> Self {
        let mode = match config.eip1193_proxy_url {
            Some(base_url) => {
                let timeout = std::time::Duration::from_millis(config.http_timeout_ms);
                match reqwest::blocking::Client::builder()
                    .timeout(timeout)
                    .build()
                {
                    Ok(client) => ProviderMode::Proxy(ProxyRuntime { base_url, client }),
                    Err(e) => ProviderMode::Disabled(format!(
                        "failed to initialize EIP-1193 proxy client: {e}"
                    )),
                }
            }
            None => ProviderMode::Absent,
        };
        Self { mode }
    }

    pub fn absent() -> Self {
        Self {
            mode: ProviderMode::Absent,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.mode, ProviderMode::Proxy(_))
    }

    fn proxy_call(&self, method: &str, params: Value) -> Result<Value, PortError> {
        let proxy = match &self.mode {
            ProviderMode::Proxy(proxy) => proxy,
            ProviderMode::Disabled(reason) => return Err(PortError::Transport(reason.clone())),
            ProviderMode::Absent => {
                return Err(PortError::Unavailable(
                    "no EIP-1193 provider detected".to_owned(),
                ))
            }
        };

        let payload = serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let response = proxy
            .client
            .post(&proxy.base_url)
            .json(&payload)
            .send()
            .map_err(|e| PortError::Transport(format!("eip1193 proxy request failed: {e}")))?;
        let status = response.status();
        let body: Value = response
            .json()
            .map_err(|e| PortError::Transport(format!("eip1193 proxy json decode failed: {e}")))?;
        if let Some(err) = body.get("error").filter(|e| !e.is_null()) {
            return Err(rpc_error(method, err));
        }
        if !status.is_success() {
            return Err(PortError::Transport(format!(
                "eip1193 proxy status {}: {}",
                status, body
            )));
        }
        body.get("result")
            .cloned()
            .ok_or_else(|| PortError::Transport("eip1193 proxy missing result".to_owned()))
    }
}

impl WalletPort for Eip1193Adapter {
    fn request_accounts(&self, prompt: bool) -> Result<Vec<Address>, PortError> {
        let method = accounts_method(prompt);
        let result = self.proxy_call(method, serde_json::json!([]))?;
        parse_accounts(method, &result)
    }
}

pub fn accounts_method(prompt: bool) -> &'static str {
    if prompt {
        "eth_requestAccounts"
    } else {
        "eth_accounts"
    }
}

fn parse_accounts(method: &str, result: &Value) -> Result<Vec<Address>, PortError> {
    let arr = result
        .as_array()
        .ok_or_else(|| PortError::Transport(format!("{method}: array expected")))?;
    let mut accounts = Vec::with_capacity(arr.len());
    for item in arr {
        let raw = item
            .as_str()
            .ok_or_else(|| PortError::Transport(format!("{method}: string expected")))?;
        let parsed: Address = raw
            .parse()
            .map_err(|e| PortError::Validation(format!("invalid account address: {e}")))?;
        accounts.push(parsed);
    }
    Ok(accounts)
}

fn rpc_error(method: &str, err: &Value) -> PortError {
    let code = err.get("code").and_then(Value::as_i64);
    let message = err
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| err.to_string());
    match code {
        Some(USER_REJECTED_CODE) | Some(UNAUTHORIZED_CODE) => PortError::UserRejected(message),
        _ => PortError::Transport(format!("{method} returned error: {message}")),
    }
}
