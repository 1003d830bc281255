use alloy::primitives::Address;
use chrono::{DateTime, SecondsFormat};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimestampMs(pub u64);

impl TimestampMs {
    pub fn saturating_add_ms(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}

/// A persisted endorsement as returned by the signature store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// RFC 3339 text. Stores that send epoch milliseconds are normalized on decode.
    #[serde(deserialize_with = "timestamp_text")]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_wallet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
}

/// RFC 3339 with millisecond precision, the form records are stamped with.
pub fn rfc3339_from_millis(ms: i64) -> Option<String> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn timestamp_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Text(String),
        EpochMs(i64),
    }

    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Text(text) => Ok(text),
        RawTimestamp::EpochMs(ms) => rfc3339_from_millis(ms)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {ms}"))),
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSignature {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_wallet: Option<String>,
}

impl NewSignature {
    /// Trims the draft fields. Returns `None` when the name is blank.
    pub fn from_draft(draft: &SignatureDraft, wallet: Option<Address>) -> Option<Self> {
        let name = draft.name.trim();
        if name.is_empty() {
            return None;
        }
        let message = draft.message.trim();
        Some(Self {
            name: name.to_owned(),
            message: (!message.is_empty()).then(|| message.to_owned()),
            signer_wallet: wallet.map(|a| a.to_checksum(None)),
        })
    }
}

/// In-progress submission held by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureDraft {
    pub name: String,
    pub message: String,
}

impl SignatureDraft {
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.message.clear();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalletState {
    pub connected: bool,
    pub address: Option<Address>,
}

impl WalletState {
    pub fn adopt(&mut self, address: Address) {
        self.connected = true;
        self.address = Some(address);
    }

    /// Address to attach to a submission, if connected.
    pub fn signer(&self) -> Option<Address> {
        if self.connected {
            self.address
        } else {
            None
        }
    }
}

/// `GET` list endpoint envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signatures: Option<Vec<Signature>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `POST` create endpoint envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A user-facing notice emitted by the board. The shell decides how to show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}
