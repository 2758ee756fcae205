//! Transaction orchestration state machine.
//!
//! # Responsibilities
//! - Sequence wallet connection, allowance approval, and fund transfer
//! - Own the UI-relevant context (account, approval status, busy flags,
//!   amount text) and mediate every side effect
//! - Catch every flow error at the action boundary and translate it into a
//!   single notification
//!
//! # States
//! ```text
//! Disconnected
//!     → Connected(NotApproved)   on silent reconnect or user connect
//!     → Connected(Approving)     while the allowance is in flight
//!     → Connected(Approved)      once the allowance is mined
//!     → Connected(Donating)      while a donation is in flight
//!     → Connected(Approved)      after each donation, success or revert
//! ```
//! The `Approving`/`Donating` sub-states double as mutexes: the action that
//! would re-trigger the same request is a no-op while in them. There is no
//! terminal state; the machine lives for the session.

use std::sync::Arc;

use alloy::primitives::Address;
use serde::Serialize;

use crate::flow::allowance::{AllowanceRequest, ApprovalState, TokenAllowanceManager};
use crate::flow::donation::{DonationRequest, DonationSubmitter};
use crate::flow::error::{FlowError, FlowResult};
use crate::flow::gateway::WalletGateway;
use crate::flow::notify::NotificationSink;
use crate::flow::FlowConfig;
use crate::provider::WalletProvider;

const MSG_CONNECTED: &str = "Wallet is connected";
const MSG_NO_WALLET: &str = "Make sure you have a wallet extension connected";
const MSG_APPROVED: &str = "USDC approved successfully";
const MSG_DONATED: &str = "Donation sent successfully";

/// Sub-state while a wallet is connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotApproved,
    Approving,
    Approved,
    Donating,
}

/// Overall flow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Disconnected,
    Connected(Phase),
}

/// Snapshot of UI-relevant state for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct FlowView {
    /// Connected account, if any.
    pub account: Option<Address>,
    /// Allowance confirmed for this session.
    pub approved: bool,
    /// Allowance request in flight.
    pub approving: bool,
    /// Donation in flight.
    pub donating: bool,
    /// Current free-text donation amount.
    pub amount: String,
}

/// The user-facing flow: composes gateway, allowance manager, and submitter.
pub struct TransactionOrchestrator<P, N> {
    gateway: WalletGateway<P>,
    allowance: TokenAllowanceManager<P>,
    submitter: DonationSubmitter<P>,
    notifier: N,
    allowance_request: AllowanceRequest,
    donation_contract: Address,
    state: FlowState,
    account: Option<Address>,
    amount: String,
}

impl<P: WalletProvider, N: NotificationSink> TransactionOrchestrator<P, N> {
    pub fn new(provider: Arc<P>, config: FlowConfig, notifier: N) -> Self {
        let allowance_request = AllowanceRequest {
            token: config.token,
            spender: config.donation_contract,
            amount: config.allowance_amount,
        };

        Self {
            gateway: WalletGateway::new(provider.clone()),
            allowance: TokenAllowanceManager::new(provider.clone(), config.poll_interval),
            submitter: DonationSubmitter::new(provider, &config.donation_tx, config.token_decimals),
            notifier,
            allowance_request,
            donation_contract: config.donation_contract,
            state: FlowState::Disconnected,
            account: None,
            amount: String::new(),
        }
    }

    /// Current machine state.
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Connected account, set on connect and never cleared.
    pub fn account(&self) -> Option<Address> {
        self.account
    }

    /// Replace the free-text donation amount from UI input.
    pub fn set_amount(&mut self, amount: &str) {
        self.amount = amount.to_string();
    }

    /// Snapshot for the presentation layer.
    pub fn view(&self) -> FlowView {
        FlowView {
            account: self.account,
            approved: self.allowance.state() == ApprovalState::Confirmed,
            approving: self.state == FlowState::Connected(Phase::Approving),
            donating: self.state == FlowState::Connected(Phase::Donating),
            amount: self.amount.clone(),
        }
    }

    /// On load: attempt silent reconnection without prompting.
    pub async fn on_load(&mut self) {
        match self.gateway.detect_existing_connection().await {
            Some(account) => {
                self.account = Some(account);
                self.state = FlowState::Connected(Phase::NotApproved);
                self.notifier.success(MSG_CONNECTED);
            }
            None => {
                self.notifier.warn(MSG_NO_WALLET);
            }
        }
    }

    /// User-initiated connect.
    pub async fn connect(&mut self) {
        if self.state != FlowState::Disconnected {
            return;
        }

        match self.gateway.request_connection().await {
            Ok(account) => {
                tracing::info!(account = %account, "Wallet connected");
                self.account = Some(account);
                self.state = FlowState::Connected(Phase::NotApproved);
            }
            Err(FlowError::ProviderUnavailable) => {
                self.notifier.warn(MSG_NO_WALLET);
            }
            Err(e) => self.report(e),
        }
    }

    /// User-initiated approve. Valid only from `Connected(NotApproved)`.
    pub async fn approve(&mut self) {
        if self.state != FlowState::Connected(Phase::NotApproved) {
            tracing::debug!(state = ?self.state, "Ignoring approve action");
            return;
        }
        self.state = FlowState::Connected(Phase::Approving);

        match self.run_approval().await {
            Ok(()) => {
                self.state = FlowState::Connected(Phase::Approved);
                self.notifier.success(MSG_APPROVED);
            }
            Err(e) => {
                self.state = FlowState::Connected(Phase::NotApproved);
                self.report(e);
            }
        }
    }

    async fn run_approval(&mut self) -> FlowResult<()> {
        let hash = self.allowance.approve(&self.allowance_request).await?;
        self.allowance.await_confirmation(hash).await
    }

    /// User-initiated donate. Valid only from `Connected(Approved)`.
    pub async fn donate(&mut self) {
        if self.state != FlowState::Connected(Phase::Approved) {
            tracing::debug!(state = ?self.state, "Ignoring donate action");
            return;
        }
        // The state gate above implies this; the submitter is never reached
        // without a confirmed allowance.
        debug_assert_eq!(self.allowance.state(), ApprovalState::Confirmed);

        self.state = FlowState::Connected(Phase::Donating);

        let request = DonationRequest {
            amount: self.amount.clone(),
            recipient: self.donation_contract,
        };

        let outcome = self.run_donation(&request).await;
        // Success and revert both end the busy state; the allowance survives.
        self.state = FlowState::Connected(Phase::Approved);

        match outcome {
            Ok(()) => self.notifier.success(MSG_DONATED),
            Err(e) => self.report(e),
        }
    }

    async fn run_donation(&mut self, request: &DonationRequest) -> FlowResult<()> {
        let hash = self.submitter.submit(request).await?;
        self.submitter.await_confirmation(hash).await
    }

    /// Surface a flow error: rejections abandon silently, everything else
    /// becomes an error notification.
    fn report(&self, error: FlowError) {
        if error.is_rejection() {
            tracing::debug!(error = %error, "Attempt abandoned by user");
        } else {
            self.notifier.error(&error.to_string());
        }
    }
}
