//! Bridge between the egui shell and the board crates.
//! Port calls run off the UI thread; their results are applied on the next frame.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy::primitives::Address;
use eyre::{Result, WrapErr};

use declaration_board_adapters::{
    AdapterConfig, Eip1193Adapter, SignatureStoreAdapter, SystemClockAdapter,
};
use declaration_board_core::{
    ClockPort, LoadTicket, Notice, PortError, RejectReason, Signature, SignatureBoard,
    SignatureStorePort, SubmitTicket, TimestampMs, WalletPort, WalletTicket,
};

pub type Board = SignatureBoard<SignatureStoreAdapter, Eip1193Adapter, SystemClockAdapter>;

/// How often to wake up while a delayed reload is pending.
const RELOAD_POLL_INTERVAL: Duration = Duration::from_millis(250);

enum Completion {
    Load(LoadTicket, Result<Vec<Signature>, PortError>),
    Submit(SubmitTicket, Result<(), PortError>),
    Wallet(WalletTicket, Result<Vec<Address>, PortError>),
}

type Mailbox = Arc<Mutex<Vec<Completion>>>;

/// Acquire mutex lock, recovering from poisoned state if necessary.
macro_rules! lock_or_recover {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("mailbox mutex was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    };
}

pub struct BoardBridge {
    board: Board,
    runtime: Option<tokio::runtime::Runtime>,
    mailbox: Mailbox,
    in_flight: usize,
}

impl BoardBridge {
    pub fn new(config: &AdapterConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("board-io")
            .enable_all()
            .build()
            .wrap_err("failed to start background runtime")?;

        let store = SignatureStoreAdapter::with_config(config.clone());
        if store.is_in_memory() {
            tracing::warn!("signatures are kept in memory and vanish on exit");
        }
        let wallet = Eip1193Adapter::with_config(config.clone());
        let board = SignatureBoard::new(store, wallet, SystemClockAdapter, config.board_config());

        Ok(Self {
            board,
            runtime: Some(runtime),
            mailbox: Arc::new(Mutex::new(Vec::new())),
            in_flight: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn mount(&mut self, ctx: &egui::Context) {
        self.board.mount();
        self.refresh(ctx);
        self.request_wallet(ctx, false);
    }

    pub fn refresh(&mut self, ctx: &egui::Context) {
        if !self.board.is_mounted() {
            return;
        }
        let ticket = self.board.begin_load();
        let store = self.board.store.clone();
        self.spawn(ctx, move || {
            let response = store.list_signatures();
            Completion::Load(ticket, response)
        });
    }

    pub fn connect_wallet(&mut self, ctx: &egui::Context) {
        self.request_wallet(ctx, true);
    }

    fn request_wallet(&mut self, ctx: &egui::Context, prompt: bool) {
        if !self.board.is_mounted() {
            return;
        }
        let ticket = self.board.begin_wallet(prompt);
        let wallet = self.board.wallet.clone();
        self.spawn(ctx, move || {
            let response = wallet.request_accounts(prompt);
            Completion::Wallet(ticket, response)
        });
    }

    pub fn submit(&mut self, ctx: &egui::Context) -> Result<(), RejectReason> {
        let ticket = self.board.begin_submit()?;
        let store = self.board.store.clone();
        self.spawn(ctx, move || {
            let response = store.create_signature(&ticket.request);
            Completion::Submit(ticket, response)
        });
        Ok(())
    }

    /// Applies finished port calls, fires due reloads and returns new notices.
    pub fn poll(&mut self, ctx: &egui::Context) -> Vec<Notice> {
        let completions = std::mem::take(&mut *lock_or_recover!(self.mailbox));
        for completion in completions {
            self.in_flight = self.in_flight.saturating_sub(1);
            match completion {
                Completion::Load(ticket, response) => {
                    self.board.finish_load(ticket, response);
                }
                Completion::Submit(ticket, response) => {
                    self.board.finish_submit(ticket, response);
                }
                Completion::Wallet(ticket, response) => {
                    self.board.finish_wallet(ticket, response);
                }
            }
        }

        if self.board.pending_reloads() > 0 {
            match self.board.clock.now_ms() {
                Ok(now) => {
                    for _ in 0..self.board.take_due_reloads(TimestampMs(now)) {
                        self.refresh(ctx);
                    }
                }
                Err(e) => tracing::warn!(error = %e, "clock unavailable"),
            }
            ctx.request_repaint_after(RELOAD_POLL_INTERVAL);
        }

        self.board.take_notices()
    }

    fn spawn<F>(&mut self, ctx: &egui::Context, job: F)
    where
        F: FnOnce() -> Completion + Send + 'static,
    {
        let Some(runtime) = self.runtime.as_ref() else {
            tracing::warn!("background runtime stopped, dropping port call");
            return;
        };
        self.in_flight += 1;
        let mailbox = Arc::clone(&self.mailbox);
        let ctx = ctx.clone();
        runtime.spawn_blocking(move || {
            let completion = job();
            lock_or_recover!(mailbox).push(completion);
            ctx.request_repaint();
        });
    }
}

impl Drop for BoardBridge {
    fn drop(&mut self) {
        self.board.unmount();
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
