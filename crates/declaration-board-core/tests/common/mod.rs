#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use alloy::primitives::Address;

use declaration_board_core::{
    BoardConfig, BoardCommand, ClockPort, NewSignature, PortError, Signature, SignatureBoard,
    SignatureStorePort, WalletPort,
};

/// Store double that records calls. Queued list responses are served first;
/// once the queue is empty it lists what was created, newest first.
#[derive(Debug, Default, Clone)]
pub struct FakeStore {
    inner: Rc<FakeStoreInner>,
}

#[derive(Debug, Default)]
pub struct FakeStoreInner {
    pub list_calls: Cell<usize>,
    pub create_attempts: Cell<usize>,
    pub created: RefCell<Vec<NewSignature>>,
    pub list_responses: RefCell<VecDeque<Result<Vec<Signature>, PortError>>>,
    pub create_responses: RefCell<VecDeque<Result<(), PortError>>>,
}

impl FakeStore {
    pub fn list_calls(&self) -> usize {
        self.inner.list_calls.get()
    }

    pub fn create_calls(&self) -> usize {
        self.inner.create_attempts.get()
    }

    pub fn created(&self) -> Vec<NewSignature> {
        self.inner.created.borrow().clone()
    }

    pub fn queue_list(&self, response: Result<Vec<Signature>, PortError>) {
        self.inner.list_responses.borrow_mut().push_back(response);
    }

    pub fn queue_create(&self, response: Result<(), PortError>) {
        self.inner.create_responses.borrow_mut().push_back(response);
    }
}

impl SignatureStorePort for FakeStore {
    fn list_signatures(&self) -> Result<Vec<Signature>, PortError> {
        self.inner.list_calls.set(self.inner.list_calls.get() + 1);
        if let Some(queued) = self.inner.list_responses.borrow_mut().pop_front() {
            return queued;
        }
        let created = self.inner.created.borrow();
        Ok(created
            .iter()
            .enumerate()
            .rev()
            .map(|(i, s)| Signature {
                id: format!("sig-{i}"),
                name: s.name.clone(),
                message: s.message.clone(),
                timestamp: "2025-06-01T12:00:00Z".to_owned(),
                signer_wallet: s.signer_wallet.clone(),
                tx_hash: Some(format!("0x{i:064x}")),
            })
            .collect())
    }

    fn create_signature(&self, signature: &NewSignature) -> Result<(), PortError> {
        let response = self
            .inner
            .create_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(()));
        self.inner
            .create_attempts
            .set(self.inner.create_attempts.get() + 1);
        if response.is_ok() {
            self.inner.created.borrow_mut().push(signature.clone());
        }
        response
    }
}

#[derive(Debug, Clone)]
pub enum FakeWallet {
    Absent,
    Accounts {
        authorized: Vec<Address>,
        on_prompt: Vec<Address>,
        prompts: Rc<Cell<usize>>,
    },
    Failing(PortError),
}

impl FakeWallet {
    pub fn authorized(accounts: Vec<Address>) -> Self {
        Self::Accounts {
            authorized: accounts.clone(),
            on_prompt: accounts,
            prompts: Rc::new(Cell::new(0)),
        }
    }

    pub fn needs_prompt(accounts: Vec<Address>) -> Self {
        Self::Accounts {
            authorized: Vec::new(),
            on_prompt: accounts,
            prompts: Rc::new(Cell::new(0)),
        }
    }

    pub fn prompts(&self) -> usize {
        match self {
            Self::Accounts { prompts, .. } => prompts.get(),
            _ => 0,
        }
    }
}

impl WalletPort for FakeWallet {
    fn request_accounts(&self, prompt: bool) -> Result<Vec<Address>, PortError> {
        match self {
            Self::Absent => Err(PortError::Unavailable("no provider".to_owned())),
            Self::Failing(e) => Err(e.clone()),
            Self::Accounts {
                authorized,
                on_prompt,
                prompts,
            } => {
                if prompt {
                    prompts.set(prompts.get() + 1);
                    Ok(on_prompt.clone())
                } else {
                    Ok(authorized.clone())
                }
            }
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct TestClock {
    now: Rc<Cell<u64>>,
}

impl TestClock {
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl ClockPort for TestClock {
    fn now_ms(&self) -> Result<u64, PortError> {
        Ok(self.now.get() + 1_739_750_400_000)
    }
}

pub type TestBoard = SignatureBoard<FakeStore, FakeWallet, TestClock>;

pub fn new_board(wallet: FakeWallet) -> (TestBoard, FakeStore, TestClock) {
    let store = FakeStore::default();
    let clock = TestClock::default();
    let board = SignatureBoard::new(
        store.clone(),
        wallet,
        clock.clone(),
        BoardConfig::default(),
    );
    (board, store, clock)
}

pub fn mounted_board(wallet: FakeWallet) -> (TestBoard, FakeStore, TestClock) {
    let (mut board, store, clock) = new_board(wallet);
    board.handle(BoardCommand::Mount).expect("mount");
    (board, store, clock)
}

pub fn account(seed: u8) -> Address {
    Address::repeat_byte(seed)
}

pub fn signature(i: usize) -> Signature {
    Signature {
        id: format!("fixture-{i}"),
        name: format!("Signer {i}"),
        message: None,
        timestamp: "2025-01-01T00:00:00Z".to_owned(),
        signer_wallet: None,
        tx_hash: None,
    }
}
