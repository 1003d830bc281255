//! Display rules for the board, kept free of any UI toolkit.

use alloy::primitives::Address;
use chrono::DateTime;

use crate::config::BoardConfig;
use crate::domain::Signature;
use crate::state_machine::ListStatus;

pub const EMPTY_TITLE: &str = "No signatures yet.";
pub const EMPTY_SUBTITLE: &str = "Be the first to sign!";
pub const NO_WALLET_NOTICE: &str = "No wallet detected. You can still sign without a wallet.";
pub const SUBMIT_SUCCESS_NOTICE: &str =
    "Your signature has been recorded on-chain. Thank you for signing the Declaration!";
pub const SUBMIT_TRANSPORT_NOTICE: &str = "Error submitting signature";
pub const SUBMIT_FALLBACK_REASON: &str = "Failed to submit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView<'a> {
    Loading { placeholder_rows: usize },
    Empty,
    Populated {
        visible: &'a [Signature],
        /// Signatures beyond the display cap.
        overflow: usize,
    },
}

pub fn list_view<'a>(
    status: ListStatus,
    signatures: &'a [Signature],
    config: &BoardConfig,
) -> ListView<'a> {
    match status {
        ListStatus::Loading => ListView::Loading {
            placeholder_rows: config.placeholder_rows,
        },
        _ if signatures.is_empty() => ListView::Empty,
        _ => {
            let shown = signatures.len().min(config.display_cap);
            ListView::Populated {
                visible: &signatures[..shown],
                overflow: signatures.len() - shown,
            }
        }
    }
}

pub fn signatory_label(count: usize) -> &'static str {
    if count == 1 {
        "Signatory"
    } else {
        "Signatories"
    }
}

pub fn overflow_text(overflow: usize) -> String {
    format!("+ {overflow} more signatories")
}

pub fn submit_label(submitting: bool) -> &'static str {
    if submitting {
        "Signing..."
    } else {
        "Reclaim Your Voice"
    }
}

/// `0x1234...abcd`
pub fn short_address(address: &Address) -> String {
    let full = address.to_checksum(None);
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}

pub fn connected_badge(address: &Address) -> String {
    format!("✓ Wallet: {}", short_address(address))
}

/// First eight characters of a stored wallet string.
pub fn wallet_prefix(wallet: &str) -> String {
    let prefix: String = wallet.chars().take(8).collect();
    format!("{prefix}...")
}

/// Calendar date of an RFC 3339 timestamp; the raw text when it does not parse.
pub fn display_date(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => timestamp.to_owned(),
    }
}

pub fn verify_url(explorer_tx_url: &str, tx_hash: &str) -> String {
    format!("{}/{}", explorer_tx_url.trim_end_matches('/'), tx_hash)
}

pub fn quoted_message(message: &str) -> String {
    format!("\"{message}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(i: usize) -> Signature {
        Signature {
            id: format!("sig-{i}"),
            name: format!("Signer {i}"),
            message: None,
            timestamp: "2025-01-01T00:00:00Z".to_owned(),
            signer_wallet: None,
            tx_hash: None,
        }
    }

    #[test]
    fn label_is_singular_only_at_one() {
        assert_eq!(signatory_label(0), "Signatories");
        assert_eq!(signatory_label(1), "Signatory");
        assert_eq!(signatory_label(2), "Signatories");
    }

    #[test]
    fn populated_view_caps_and_counts_overflow() {
        let sigs: Vec<_> = (0..13).map(sig).collect();
        let cfg = BoardConfig::default();
        match list_view(ListStatus::Populated, &sigs, &cfg) {
            ListView::Populated { visible, overflow } => {
                assert_eq!(visible.len(), 10);
                assert_eq!(visible[0].id, "sig-0");
                assert_eq!(overflow, 3);
            }
            other => panic!("unexpected view {other:?}"),
        }
        assert_eq!(overflow_text(3), "+ 3 more signatories");
    }

    #[test]
    fn exactly_cap_has_no_overflow() {
        let sigs: Vec<_> = (0..10).map(sig).collect();
        let view = list_view(ListStatus::Populated, &sigs, &BoardConfig::default());
        assert!(matches!(view, ListView::Populated { overflow: 0, .. }));
    }

    #[test]
    fn loading_shows_placeholders_and_empty_list_shows_empty_state() {
        let cfg = BoardConfig::default();
        assert_eq!(
            list_view(ListStatus::Loading, &[], &cfg),
            ListView::Loading {
                placeholder_rows: 4
            }
        );
        assert_eq!(list_view(ListStatus::Empty, &[], &cfg), ListView::Empty);
    }

    #[test]
    fn short_address_keeps_head_and_tail() {
        let addr: Address = "0x1000000000000000000000000000000000000abc"
            .parse()
            .expect("address");
        let short = short_address(&addr);
        assert!(short.starts_with("0x1000"));
        assert!(short.to_lowercase().ends_with("0abc"));
        assert_eq!(short.len(), 6 + 3 + 4);
    }

    #[test]
    fn wallet_prefix_is_char_safe() {
        assert_eq!(wallet_prefix("0xabcdef0123"), "0xabcdef...");
        assert_eq!(wallet_prefix("äöü"), "äöü...");
    }

    #[test]
    fn display_date_falls_back_to_raw_text() {
        assert_eq!(display_date("2025-03-04T10:11:12.000Z"), "2025-03-04");
        assert_eq!(display_date("yesterday"), "yesterday");
    }

    #[test]
    fn verify_url_joins_without_double_slash() {
        assert_eq!(
            verify_url("https://explorer.arkiv.network/tx/", "0xabc"),
            "https://explorer.arkiv.network/tx/0xabc"
        );
    }
}
