use std::fmt;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use declaration_board_core::{
    rfc3339_from_millis, ClockPort, CreateResponse, ListResponse, NewSignature, PortError,
    Signature, SignatureStorePort,
};

use crate::{AdapterConfig, SystemClockAdapter};

type SharedClock = Arc<dyn ClockPort + Send + Sync>;

#[derive(Debug, Clone)]
pub struct SignatureStoreAdapter {
    mode: StoreMode,
}

#[derive(Debug, Clone)]
enum StoreMode {
    Disabled(String),
    InMemory(MemoryRuntime),
    Http(HttpRuntime),
}

#[derive(Clone)]
struct MemoryRuntime {
    state: Arc<Mutex<MemoryState>>,
    clock: SharedClock,
}

impl fmt::Debug for MemoryRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryRuntime")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
struct HttpRuntime {
    url: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Default)]
struct MemoryState {
    next_id: u64,
    /// Most recent first.
    signatures: Vec<Signature>,
}

impl Default for SignatureStoreAdapter {
    fn default() -> Self {
        Self::with_config(AdapterConfig::from_env())
    }
}

impl SignatureStoreAdapter {
    pub fn with_config(config: AdapterConfig) -> Self {
        let Some(url) = config.signatures_url() else {
            tracing::info!("no signature API configured, using in-memory store");
            return Self::in_memory();
        };

        let timeout = std::time::Duration::from_millis(config.http_timeout_ms);
        let mode = match reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
        {
            Ok(client) => StoreMode::Http(HttpRuntime { url, client }),
            Err(e) => StoreMode::Disabled(format!("failed to initialize signature client: {e}")),
        };
        Self { mode }
    }

    pub fn in_memory() -> Self {
        Self::in_memory_with_clock(SystemClockAdapter)
    }

    /// In-memory store stamping records with `clock`.
    pub fn in_memory_with_clock<C>(clock: C) -> Self
    where
        C: ClockPort + Send + Sync + 'static,
    {
        Self {
            mode: StoreMode::InMemory(MemoryRuntime {
                state: Arc::new(Mutex::new(MemoryState::default())),
                clock: Arc::new(clock),
            }),
        }
    }

    pub fn is_in_memory(&self) -> bool {
        matches!(self.mode, StoreMode::InMemory(_))
    }

    fn memory(&self) -> Option<&MemoryRuntime> {
        match &self.mode {
            StoreMode::InMemory(runtime) => Some(runtime),
            _ => None,
        }
    }

    fn http(&self) -> Result<&HttpRuntime, PortError> {
        match &self.mode {
            StoreMode::Http(runtime) => Ok(runtime),
            StoreMode::Disabled(reason) => Err(PortError::Transport(reason.clone())),
            StoreMode::InMemory(_) => Err(PortError::NotImplemented(
                "signature store http runtime not enabled",
            )),
        }
    }
}

impl SignatureStorePort for SignatureStoreAdapter {
    fn list_signatures(&self) -> Result<Vec<Signature>, PortError> {
        if let Some(memory) = self.memory() {
            return Ok(memory.lock()?.signatures.clone());
        }

        let runtime = self.http()?;
        let response = runtime
            .client
            .get(&runtime.url)
            .send()
            .map_err(|e| PortError::Transport(format!("signature list request failed: {e}")))?;
        let status = response.status();
        let body: ListResponse = decode(response, "signature list")?;
        if !body.ok {
            tracing::debug!(%status, "signature list not ok");
            return Err(PortError::Store(body.error));
        }
        Ok(body.signatures.unwrap_or_default())
    }

    fn create_signature(&self, signature: &NewSignature) -> Result<(), PortError> {
        if let Some(memory) = self.memory() {
            let name = signature.name.trim();
            if name.is_empty() {
                return Err(PortError::Store(Some("name is required".to_owned())));
            }
            let now = memory.clock.now_ms()?;
            let timestamp = i64::try_from(now)
                .ok()
                .and_then(rfc3339_from_millis)
                .ok_or_else(|| PortError::Validation(format!("clock out of range: {now}")))?;
            let mut state = memory.lock()?;
            let id = format!("sig-{}", state.next_id);
            state.next_id = state.next_id.saturating_add(1);
            let record = Signature {
                id,
                name: name.to_owned(),
                message: signature.message.clone(),
                timestamp,
                signer_wallet: signature.signer_wallet.clone(),
                tx_hash: None,
            };
            state.signatures.insert(0, record);
            return Ok(());
        }

        let runtime = self.http()?;
        let response = runtime
            .client
            .post(&runtime.url)
            .json(signature)
            .send()
            .map_err(|e| PortError::Transport(format!("signature create request failed: {e}")))?;
        let status = response.status();
        let body: CreateResponse = decode(response, "signature create")?;
        if !body.ok {
            tracing::debug!(%status, "signature create not ok");
            return Err(PortError::Store(body.error));
        }
        Ok(())
    }
}

impl MemoryRuntime {
    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, PortError> {
        self.state
            .lock()
            .map_err(|e| PortError::Transport(format!("store lock poisoned: {e}")))
    }
}

/// The store answers with a JSON envelope on success and on failure alike.
fn decode<T: DeserializeOwned>(
    response: reqwest::blocking::Response,
    what: &str,
) -> Result<T, PortError> {
    let status = response.status();
    let text = response
        .text()
        .map_err(|e| PortError::Transport(format!("{what} body read failed: {e}")))?;
    serde_json::from_str(&text).map_err(|e| {
        PortError::Transport(format!("{what} json decode failed (status {status}): {e}"))
    })
}
