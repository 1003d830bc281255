pub mod board;
pub mod config;
pub mod domain;
pub mod ports;
pub mod presentation;
pub mod state_machine;

pub use board::{
    BoardCommand, CommandResult, LoadOutcome, LoadTicket, RejectReason, SignatureBoard,
    SubmitOutcome, SubmitTicket, WalletOutcome, WalletTicket,
};
pub use config::{BoardConfig, LoadOrdering};
pub use domain::{
    CreateResponse, ListResponse, NewSignature, Notice, NoticeKind, Signature, SignatureDraft,
    TimestampMs, WalletState, rfc3339_from_millis,
};
pub use ports::{ClockPort, PortError, SignatureStorePort, WalletPort};
pub use presentation::ListView;
pub use state_machine::{
    list_transition, submit_transition, ListAction, ListStatus, SubmitAction, SubmitStatus,
};
