use alloy::primitives::Address;

use crate::config::{BoardConfig, LoadOrdering};
use crate::domain::{
    NewSignature, Notice, Signature, SignatureDraft, TimestampMs, WalletState,
};
use crate::ports::{ClockPort, PortError, SignatureStorePort, WalletPort};
use crate::presentation::{
    self, ListView, NO_WALLET_NOTICE, SUBMIT_FALLBACK_REASON, SUBMIT_SUCCESS_NOTICE,
    SUBMIT_TRANSPORT_NOTICE,
};
use crate::state_machine::{
    list_transition, submit_transition, ListAction, ListStatus, SubmitAction, SubmitStatus,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardCommand {
    /// Initial load plus non-prompting wallet detection.
    Mount,
    LoadSignatures,
    DetectWallet,
    ConnectWallet,
    Submit,
    /// Runs every delayed reload that has come due.
    Tick,
    Unmount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Replaced { count: usize },
    Failed,
    /// Response belonged to an unmounted board or was older than the list shown.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    BlankName,
    InFlight,
    /// The board is not mounted, so nothing may reach the store.
    NotMounted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(RejectReason),
    Accepted { reload_at: TimestampMs },
    Failed,
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletOutcome {
    Connected(Address),
    NoAccounts,
    Unavailable,
    Failed,
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    sequence: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    generation: u64,
    pub request: NewSignature,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalletTicket {
    generation: u64,
    pub prompt: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CommandResult {
    pub loads: Vec<LoadOutcome>,
    pub submit: Option<SubmitOutcome>,
    pub wallet: Option<WalletOutcome>,
    pub notices: Vec<Notice>,
}

/// Local state of one board. Only the board mutates it, always by full replacement
/// of the list.
#[derive(Debug, Clone)]
struct BoardState {
    signatures: Vec<Signature>,
    list_status: ListStatus,
    submit_status: SubmitStatus,
    draft: SignatureDraft,
    wallet: WalletState,
    mounted: bool,
    generation: u64,
    next_load_seq: u64,
    last_applied_seq: Option<u64>,
    pending_reloads: Vec<TimestampMs>,
    notices: Vec<Notice>,
}

impl BoardState {
    fn new() -> Self {
        Self {
            signatures: Vec::new(),
            list_status: ListStatus::Loading,
            submit_status: SubmitStatus::Idle,
            draft: SignatureDraft::default(),
            wallet: WalletState::default(),
            mounted: false,
            generation: 0,
            next_load_seq: 0,
            last_applied_seq: None,
            pending_reloads: Vec::new(),
            notices: Vec::new(),
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        self.mounted && self.generation == generation
    }
}

pub struct SignatureBoard<S, W, C>
where
    S: SignatureStorePort,
    W: WalletPort,
    C: ClockPort,
{
    pub store: S,
    pub wallet: W,
    pub clock: C,
    config: BoardConfig,
    state: BoardState,
}

impl<S, W, C> SignatureBoard<S, W, C>
where
    S: SignatureStorePort,
    W: WalletPort,
    C: ClockPort,
{
    pub fn new(store: S, wallet: W, clock: C, config: BoardConfig) -> Self {
        Self {
            store,
            wallet,
            clock,
            config,
            state: BoardState::new(),
        }
    }

    pub fn handle(&mut self, command: BoardCommand) -> Result<CommandResult, PortError> {
        let mut result = CommandResult::default();
        if !self.state.mounted && !matches!(command, BoardCommand::Mount | BoardCommand::Unmount) {
            tracing::debug!(?command, "ignoring command on unmounted board");
            if command == BoardCommand::Submit {
                result.submit = Some(SubmitOutcome::Rejected(RejectReason::NotMounted));
            }
            return Ok(result);
        }
        match command {
            BoardCommand::Mount => {
                self.mount();
                result.loads.push(self.load_now());
                result.wallet = Some(self.wallet_now(false));
            }
            BoardCommand::LoadSignatures => {
                result.loads.push(self.load_now());
            }
            BoardCommand::DetectWallet => {
                result.wallet = Some(self.wallet_now(false));
            }
            BoardCommand::ConnectWallet => {
                result.wallet = Some(self.wallet_now(true));
            }
            BoardCommand::Submit => {
                let outcome = match self.begin_submit() {
                    Ok(ticket) => {
                        let response = self.store.create_signature(&ticket.request);
                        self.finish_submit(ticket, response)
                    }
                    Err(reason) => SubmitOutcome::Rejected(reason),
                };
                result.submit = Some(outcome);
            }
            BoardCommand::Tick => {
                let now = TimestampMs(self.clock.now_ms()?);
                for _ in 0..self.take_due_reloads(now) {
                    result.loads.push(self.load_now());
                }
            }
            BoardCommand::Unmount => self.unmount(),
        }
        result.notices = self.take_notices();
        Ok(result)
    }

    fn load_now(&mut self) -> LoadOutcome {
        let ticket = self.begin_load();
        let response = self.store.list_signatures();
        self.finish_load(ticket, response)
    }

    fn wallet_now(&mut self, prompt: bool) -> WalletOutcome {
        let ticket = self.begin_wallet(prompt);
        let response = self.wallet.request_accounts(prompt);
        self.finish_wallet(ticket, response)
    }

    /// Starts a new mount lifetime. A remount begins again from the loading view.
    pub fn mount(&mut self) {
        if self.state.mounted {
            return;
        }
        self.state.generation = self.state.generation.saturating_add(1);
        self.state.mounted = true;
        self.state.list_status = ListStatus::Loading;
        self.state.signatures.clear();
        self.state.last_applied_seq = None;
        self.state.submit_status = SubmitStatus::Idle;
        tracing::debug!(generation = self.state.generation, "signature board mounted");
    }

    /// Ends the mount lifetime; responses still in flight are discarded on arrival.
    pub fn unmount(&mut self) {
        if !self.state.mounted {
            return;
        }
        self.state.mounted = false;
        self.state.generation = self.state.generation.saturating_add(1);
        self.state.pending_reloads.clear();
        tracing::debug!("signature board unmounted");
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        let sequence = self.state.next_load_seq;
        self.state.next_load_seq = self.state.next_load_seq.saturating_add(1);
        LoadTicket {
            generation: self.state.generation,
            sequence,
        }
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        response: Result<Vec<Signature>, PortError>,
    ) -> LoadOutcome {
        if !self.state.is_current(ticket.generation) {
            tracing::debug!(sequence = ticket.sequence, "dropping load response for stale board");
            return LoadOutcome::Discarded;
        }

        match response {
            Ok(signatures) => {
                if self.config.load_ordering == LoadOrdering::LatestIssuedWins
                    && self
                        .state
                        .last_applied_seq
                        .is_some_and(|last| ticket.sequence < last)
                {
                    tracing::debug!(
                        sequence = ticket.sequence,
                        "dropping out-of-order load response"
                    );
                    return LoadOutcome::Discarded;
                }
                let count = signatures.len();
                self.state.signatures = signatures;
                self.state.last_applied_seq = Some(ticket.sequence);
                self.resolve_list();
                tracing::debug!(count, "signature list replaced");
                LoadOutcome::Replaced { count }
            }
            Err(e) => {
                tracing::warn!(error = %e, "error loading signatures");
                self.resolve_list();
                LoadOutcome::Failed
            }
        }
    }

    fn resolve_list(&mut self) {
        let (next, reason) = list_transition(
            self.state.list_status,
            ListAction::Resolved {
                len: self.state.signatures.len(),
            },
        );
        tracing::trace!(from = ?self.state.list_status, to = ?next, reason);
        self.state.list_status = next;
    }

    pub fn begin_wallet(&mut self, prompt: bool) -> WalletTicket {
        WalletTicket {
            generation: self.state.generation,
            prompt,
        }
    }

    pub fn finish_wallet(
        &mut self,
        ticket: WalletTicket,
        response: Result<Vec<Address>, PortError>,
    ) -> WalletOutcome {
        if !self.state.is_current(ticket.generation) {
            return WalletOutcome::Discarded;
        }

        match response {
            Ok(accounts) => match accounts.first() {
                Some(address) => {
                    self.state.wallet.adopt(*address);
                    tracing::info!(address = %address, prompt = ticket.prompt, "wallet connected");
                    WalletOutcome::Connected(*address)
                }
                None => WalletOutcome::NoAccounts,
            },
            Err(PortError::Unavailable(reason)) => {
                if ticket.prompt {
                    self.state.notices.push(Notice::info(NO_WALLET_NOTICE));
                }
                tracing::debug!(reason = %reason, "no wallet capability");
                WalletOutcome::Unavailable
            }
            Err(e) => {
                if ticket.prompt {
                    tracing::warn!(error = %e, "error connecting wallet");
                } else {
                    tracing::warn!(error = %e, "error checking wallet");
                }
                WalletOutcome::Failed
            }
        }
    }

    /// Validates the draft and moves to `Submitting`. The draft is left untouched.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, RejectReason> {
        if !self.state.mounted {
            return Err(RejectReason::NotMounted);
        }
        if self.state.submit_status == SubmitStatus::Submitting {
            return Err(RejectReason::InFlight);
        }
        let request = NewSignature::from_draft(&self.state.draft, self.state.wallet.signer())
            .ok_or(RejectReason::BlankName)?;
        let (next, _) = submit_transition(self.state.submit_status, SubmitAction::Start)
            .map_err(|_| RejectReason::InFlight)?;
        self.state.submit_status = next;
        Ok(SubmitTicket {
            generation: self.state.generation,
            request,
        })
    }

    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        response: Result<(), PortError>,
    ) -> SubmitOutcome {
        if !self.state.is_current(ticket.generation) {
            return SubmitOutcome::Discarded;
        }

        let action = if response.is_ok() {
            SubmitAction::Succeed
        } else {
            SubmitAction::Fail
        };
        match submit_transition(self.state.submit_status, action) {
            Ok((next, _)) => self.state.submit_status = next,
            Err(e) => {
                tracing::warn!(error = %e, "submit response without a submission in flight");
                return SubmitOutcome::Discarded;
            }
        }

        match response {
            Ok(()) => {
                self.state.draft.clear();
                self.state.notices.push(Notice::success(SUBMIT_SUCCESS_NOTICE));
                let now = self.clock.now_ms().unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "clock unavailable, reloading on next tick");
                    0
                });
                let reload_at = TimestampMs(now).saturating_add_ms(self.config.reload_delay_ms);
                self.state.pending_reloads.push(reload_at);
                tracing::info!(name = %ticket.request.name, "signature recorded");
                SubmitOutcome::Accepted { reload_at }
            }
            Err(PortError::Store(reason)) => {
                let reason = reason.unwrap_or_else(|| SUBMIT_FALLBACK_REASON.to_owned());
                tracing::warn!(reason = %reason, "store rejected signature");
                self.state.notices.push(Notice::error(format!("Error: {reason}")));
                SubmitOutcome::Failed
            }
            Err(e) => {
                tracing::warn!(error = %e, "error submitting signature");
                self.state.notices.push(Notice::error(SUBMIT_TRANSPORT_NOTICE));
                SubmitOutcome::Failed
            }
        }
    }

    /// Removes and counts the delayed reloads due at `now`.
    pub fn take_due_reloads(&mut self, now: TimestampMs) -> usize {
        let before = self.state.pending_reloads.len();
        self.state.pending_reloads.retain(|at| *at > now);
        before - self.state.pending_reloads.len()
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.state.notices)
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn signatures(&self) -> &[Signature] {
        &self.state.signatures
    }

    pub fn count(&self) -> usize {
        self.state.signatures.len()
    }

    pub fn list_status(&self) -> ListStatus {
        self.state.list_status
    }

    pub fn list_view(&self) -> ListView<'_> {
        presentation::list_view(self.state.list_status, &self.state.signatures, &self.config)
    }

    pub fn draft(&self) -> &SignatureDraft {
        &self.state.draft
    }

    pub fn draft_mut(&mut self) -> &mut SignatureDraft {
        &mut self.state.draft
    }

    pub fn wallet_state(&self) -> WalletState {
        self.state.wallet
    }

    pub fn is_mounted(&self) -> bool {
        self.state.mounted
    }

    pub fn is_submitting(&self) -> bool {
        self.state.submit_status == SubmitStatus::Submitting
    }

    /// Mirrors the guard in `begin_submit`, for disabling the submit control.
    pub fn can_submit(&self) -> bool {
        self.state.mounted && !self.is_submitting() && self.state.draft.has_name()
    }

    pub fn pending_reloads(&self) -> usize {
        self.state.pending_reloads.len()
    }
}
