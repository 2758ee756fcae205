//! Shared test doubles for the donation flow.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, TxHash, B256};
use alloy::rpc::types::TransactionRequest;

use donation_client::flow::NotificationSink;
use donation_client::provider::{ProviderError, ProviderResult, ReceiptStatus, WalletProvider};

/// Deterministic test addresses and hashes.
pub fn addr(n: u8) -> Address {
    Address::repeat_byte(n)
}

pub fn hash(n: u8) -> TxHash {
    B256::repeat_byte(n)
}

/// Scripted outcome of a `request_accounts` prompt.
pub enum AccountScript {
    Accounts(Vec<Address>),
    Reject,
    Unavailable,
}

/// Scripted outcome of a `send_transaction` call.
pub enum SendOutcome {
    Accept(TxHash),
    Reject,
    Fail(String),
}

/// Scripted wallet provider recording every interaction.
pub struct FakeProvider {
    /// Provider entirely absent (no injected wallet).
    absent: bool,
    authorized: Mutex<Vec<Address>>,
    request_script: Mutex<AccountScript>,
    send_script: Mutex<VecDeque<SendOutcome>>,
    receipts: Mutex<HashMap<TxHash, ReceiptStatus>>,
    /// Every transaction handed to `send_transaction`, in order.
    pub sent: Mutex<Vec<TransactionRequest>>,
    pub send_calls: AtomicUsize,
    pub request_calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            absent: false,
            authorized: Mutex::new(Vec::new()),
            request_script: Mutex::new(AccountScript::Accounts(vec![addr(0xAA)])),
            send_script: Mutex::new(VecDeque::new()),
            receipts: Mutex::new(HashMap::new()),
            sent: Mutex::new(Vec::new()),
            send_calls: AtomicUsize::new(0),
            request_calls: AtomicUsize::new(0),
        }
    }

    /// No wallet capability present at all.
    pub fn absent() -> Self {
        Self {
            absent: true,
            ..Self::new()
        }
    }

    pub fn with_authorized(self, account: Address) -> Self {
        self.authorized.lock().unwrap().push(account);
        self
    }

    pub fn script_request(&self, script: AccountScript) {
        *self.request_script.lock().unwrap() = script;
    }

    /// Queue a successful submission that later mines with `status`.
    pub fn script_send_mined(&self, tx_hash: TxHash, status: ReceiptStatus) {
        self.send_script
            .lock()
            .unwrap()
            .push_back(SendOutcome::Accept(tx_hash));
        self.receipts.lock().unwrap().insert(tx_hash, status);
    }

    pub fn script_send(&self, outcome: SendOutcome) {
        self.send_script.lock().unwrap().push_back(outcome);
    }

    pub fn send_count(&self) -> usize {
        self.send_calls.load(Ordering::SeqCst)
    }

    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl WalletProvider for FakeProvider {
    async fn authorized_accounts(&self) -> ProviderResult<Vec<Address>> {
        if self.absent {
            return Err(ProviderError::Unavailable);
        }
        Ok(self.authorized.lock().unwrap().clone())
    }

    async fn request_accounts(&self) -> ProviderResult<Vec<Address>> {
        self.request_calls.fetch_add(1, Ordering::SeqCst);
        if self.absent {
            return Err(ProviderError::Unavailable);
        }
        match &*self.request_script.lock().unwrap() {
            AccountScript::Accounts(accounts) => Ok(accounts.clone()),
            AccountScript::Reject => Err(ProviderError::Rejected),
            AccountScript::Unavailable => Err(ProviderError::Unavailable),
        }
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> ProviderResult<TxHash> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        if self.absent {
            return Err(ProviderError::Unavailable);
        }
        self.sent.lock().unwrap().push(tx);
        match self.send_script.lock().unwrap().pop_front() {
            Some(SendOutcome::Accept(tx_hash)) => Ok(tx_hash),
            Some(SendOutcome::Reject) => Err(ProviderError::Rejected),
            Some(SendOutcome::Fail(message)) => Err(ProviderError::Rpc(message)),
            None => Err(ProviderError::Rpc("no scripted send outcome".to_string())),
        }
    }

    async fn transaction_receipt(&self, tx_hash: TxHash) -> ProviderResult<Option<ReceiptStatus>> {
        Ok(self.receipts.lock().unwrap().get(&tx_hash).copied())
    }
}

/// Notification severity recorded by the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Sink capturing every notification for assertions.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> Vec<(Severity, String)> {
        self.events.lock().unwrap().clone()
    }

    fn of(&self, severity: Severity) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn successes(&self) -> Vec<String> {
        self.of(Severity::Success)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.of(Severity::Warning)
    }

    pub fn errors(&self) -> Vec<String> {
        self.of(Severity::Error)
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl NotificationSink for RecordingSink {
    fn success(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push((Severity::Success, message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push((Severity::Warning, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push((Severity::Error, message.to_string()));
    }
}
