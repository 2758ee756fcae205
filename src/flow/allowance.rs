//! Token allowance management.
//!
//! # Responsibilities
//! - Submit the fixed-amount ERC-20 `approve` granting the donation contract
//!   its spending allowance
//! - Await mining of the approval transaction
//! - Own the `ApprovalState` transition:
//!   NotRequested → Pending (on submit) → Confirmed (on mine), rolling back
//!   to NotRequested on any failure so the user may retry

use std::sync::Arc;
use std::time::Duration;

use alloy::network::TransactionBuilder;
use alloy::primitives::utils::parse_units;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::config::AllowanceConfig;
use crate::flow::error::{FlowError, FlowResult};
use crate::provider::{wait_for_receipt, ReceiptStatus, WalletProvider};

sol! {
    /// ERC-20 allowance grant.
    function approve(address spender, uint256 amount) external returns (bool);
}

/// Spending allowance status, gating the donation UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalState {
    NotRequested,
    Pending,
    Confirmed,
}

/// Immutable allowance parameters, constructed once per session.
#[derive(Debug, Clone)]
pub struct AllowanceRequest {
    /// ERC-20 token contract holding the balance.
    pub token: Address,
    /// Contract authorized to draw against the allowance.
    pub spender: Address,
    /// Allowance in minor units.
    pub amount: U256,
}

impl AllowanceRequest {
    /// Build the fixed allowance from configuration (1000 whole tokens at
    /// six decimals by default), independent of any donation amount.
    pub fn from_config(
        token: Address,
        spender: Address,
        config: &AllowanceConfig,
    ) -> FlowResult<Self> {
        let amount = parse_units(&config.whole_tokens.to_string(), config.token_decimals)
            .map_err(|e| FlowError::SubmissionFailed(format!("allowance amount: {e}")))?
            .get_absolute();

        Ok(Self {
            token,
            spender,
            amount,
        })
    }
}

/// Requests and tracks the spending allowance.
#[derive(Debug)]
pub struct TokenAllowanceManager<P> {
    provider: Arc<P>,
    state: ApprovalState,
    poll_interval: Duration,
}

impl<P: WalletProvider> TokenAllowanceManager<P> {
    pub fn new(provider: Arc<P>, poll_interval: Duration) -> Self {
        Self {
            provider,
            state: ApprovalState::NotRequested,
            poll_interval,
        }
    }

    /// Current approval state.
    pub fn state(&self) -> ApprovalState {
        self.state
    }

    /// Sign and submit the allowance-granting transaction.
    pub async fn approve(&mut self, request: &AllowanceRequest) -> FlowResult<TxHash> {
        let calldata = approveCall {
            spender: request.spender,
            amount: request.amount,
        }
        .abi_encode();

        let tx = TransactionRequest::default()
            .with_to(request.token)
            .with_input(Bytes::from(calldata));

        match self.provider.send_transaction(tx).await {
            Ok(hash) => {
                self.state = ApprovalState::Pending;
                tracing::info!(tx_hash = %hash, token = %request.token, "Allowance submitted");
                Ok(hash)
            }
            Err(e) => {
                self.state = ApprovalState::NotRequested;
                Err(FlowError::from_submission(e))
            }
        }
    }

    /// Await mining of a submitted allowance transaction.
    pub async fn await_confirmation(&mut self, hash: TxHash) -> FlowResult<()> {
        match wait_for_receipt(self.provider.as_ref(), hash, self.poll_interval).await {
            Ok(ReceiptStatus::Success { block_number }) => {
                self.state = ApprovalState::Confirmed;
                tracing::info!(tx_hash = %hash, block_number, "Allowance confirmed");
                Ok(())
            }
            Ok(ReceiptStatus::Reverted) => {
                self.state = ApprovalState::NotRequested;
                Err(FlowError::TransactionReverted)
            }
            Err(e) => {
                self.state = ApprovalState::NotRequested;
                Err(FlowError::SubmissionFailed(e.to_string()))
            }
        }
    }
}
