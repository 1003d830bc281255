use declaration_board_core::{BoardConfig, LoadOrdering};

pub const ENV_API_URL: &str = "DECLARATION_API_URL";
pub const ENV_EIP1193_PROXY_URL: &str = "DECLARATION_EIP1193_PROXY_URL";
pub const ENV_HTTP_TIMEOUT_MS: &str = "DECLARATION_HTTP_TIMEOUT_MS";
pub const ENV_EXPLORER_TX_URL: &str = "DECLARATION_EXPLORER_TX_URL";
pub const ENV_RELOAD_DELAY_MS: &str = "DECLARATION_RELOAD_DELAY_MS";
pub const ENV_STRICT_LOAD_ORDER: &str = "DECLARATION_STRICT_LOAD_ORDER";

#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// Base URL of the site serving `/api/signatures`. `None` selects the in-memory store.
    pub api_base_url: Option<String>,
    pub signatures_path: String,
    /// JSON-RPC endpoint forwarding to an EIP-1193 wallet. `None` means no wallet.
    pub eip1193_proxy_url: Option<String>,
    pub http_timeout_ms: u64,
    pub explorer_tx_url: String,
    pub reload_delay_ms: u64,
    pub strict_load_order: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        let board = BoardConfig::default();
        Self {
            api_base_url: None,
            signatures_path: "/api/signatures".to_owned(),
            eip1193_proxy_url: None,
            http_timeout_ms: 15_000,
            explorer_tx_url: board.explorer_tx_url,
            reload_delay_ms: board.reload_delay_ms,
            strict_load_order: false,
        }
    }
}

impl AdapterConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            api_base_url: get(ENV_API_URL),
            eip1193_proxy_url: get(ENV_EIP1193_PROXY_URL),
            http_timeout_ms: parse_or(
                ENV_HTTP_TIMEOUT_MS,
                get(ENV_HTTP_TIMEOUT_MS),
                defaults.http_timeout_ms,
            ),
            explorer_tx_url: get(ENV_EXPLORER_TX_URL).unwrap_or(defaults.explorer_tx_url),
            reload_delay_ms: parse_or(
                ENV_RELOAD_DELAY_MS,
                get(ENV_RELOAD_DELAY_MS),
                defaults.reload_delay_ms,
            ),
            strict_load_order: get(ENV_STRICT_LOAD_ORDER)
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.strict_load_order),
            signatures_path: defaults.signatures_path,
        }
    }

    pub fn board_config(&self) -> BoardConfig {
        BoardConfig {
            reload_delay_ms: self.reload_delay_ms,
            explorer_tx_url: self.explorer_tx_url.clone(),
            load_ordering: if self.strict_load_order {
                LoadOrdering::LatestIssuedWins
            } else {
                LoadOrdering::LastResolvedWins
            },
            ..BoardConfig::default()
        }
    }

    pub fn signatures_url(&self) -> Option<String> {
        self.api_base_url.as_ref().map(|base| {
            format!(
                "{}/{}",
                base.trim_end_matches('/'),
                self.signatures_path.trim_start_matches('/')
            )
        })
    }
}

fn parse_or(key: &str, raw: Option<String>, default: u64) -> u64 {
    match raw {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!(key, value = %raw, error = %e, "ignoring unparsable setting");
            default
        }),
        None => default,
    }
}
