use alloy::primitives::Address;
use thiserror::Error;

use crate::domain::{NewSignature, Signature};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("port not implemented: {0}")]
    NotImplemented(&'static str),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("wallet unavailable: {0}")]
    Unavailable(String),
    #[error("request rejected by user: {0}")]
    UserRejected(String),
    #[error("store rejected request: {}", .0.as_deref().unwrap_or("no reason given"))]
    Store(Option<String>),
    #[error("conflict: {0}")]
    Conflict(String),
}

/// Remote persistence for signatures.
pub trait SignatureStorePort {
    fn list_signatures(&self) -> Result<Vec<Signature>, PortError>;
    fn create_signature(&self, signature: &NewSignature) -> Result<(), PortError>;
}

/// Optional wallet capability. `prompt = false` must never ask the user.
pub trait WalletPort {
    fn request_accounts(&self, prompt: bool) -> Result<Vec<Address>, PortError>;
}

pub trait ClockPort {
    fn now_ms(&self) -> Result<u64, PortError>;
}
