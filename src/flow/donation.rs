//! Donation submission.
//!
//! # Responsibilities
//! - Parse the user's free-text amount into minor units, rejecting bad input
//!   before any network call
//! - Submit the `Fund` call with the fixed gas-limit ceiling
//! - Await mining of the donation transaction
//!
//! Each user action is a single attempt; no retries are performed here.

use std::sync::Arc;
use std::time::Duration;

use alloy::network::TransactionBuilder;
use alloy::primitives::utils::parse_units;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::config::DonationTxConfig;
use crate::flow::error::{FlowError, FlowResult};
use crate::provider::{wait_for_receipt, ReceiptStatus, WalletProvider};

sol! {
    /// Donation contract entry point.
    function Fund(uint256 amount) external;
}

/// A single donation attempt, built fresh from current UI input.
#[derive(Debug, Clone)]
pub struct DonationRequest {
    /// User-supplied amount, unvalidated free text until submission.
    pub amount: String,
    /// The donation contract to call.
    pub recipient: Address,
}

/// Parse a free-text amount into minor units at the given decimal precision.
///
/// Rejects empty, non-numeric, negative, and zero amounts.
pub fn parse_donation_amount(raw: &str, decimals: u8) -> FlowResult<U256> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FlowError::InvalidAmount("amount is empty".to_string()));
    }

    let parsed = parse_units(trimmed, decimals)
        .map_err(|_| FlowError::InvalidAmount(format!("'{trimmed}' is not a valid amount")))?;

    if parsed.is_negative() {
        return Err(FlowError::InvalidAmount(
            "amount must be positive".to_string(),
        ));
    }

    let units = parsed.get_absolute();
    if units.is_zero() {
        return Err(FlowError::InvalidAmount(
            "amount must be greater than zero".to_string(),
        ));
    }

    Ok(units)
}

/// Submits donation transactions and tracks their lifecycle.
#[derive(Debug)]
pub struct DonationSubmitter<P> {
    provider: Arc<P>,
    gas_limit: u64,
    token_decimals: u8,
    poll_interval: Duration,
}

impl<P: WalletProvider> DonationSubmitter<P> {
    pub fn new(provider: Arc<P>, config: &DonationTxConfig, token_decimals: u8) -> Self {
        Self {
            provider,
            gas_limit: config.gas_limit,
            token_decimals,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        }
    }

    /// Validate the amount, then sign and submit the donation call.
    ///
    /// Validation happens before any network call; `InvalidAmount` leaves no
    /// trace on the wire.
    pub async fn submit(&mut self, request: &DonationRequest) -> FlowResult<TxHash> {
        let amount = parse_donation_amount(&request.amount, self.token_decimals)?;

        let calldata = FundCall { amount }.abi_encode();
        let tx = TransactionRequest::default()
            .with_to(request.recipient)
            .with_input(Bytes::from(calldata))
            .with_gas_limit(self.gas_limit);

        match self.provider.send_transaction(tx).await {
            Ok(hash) => {
                tracing::info!(tx_hash = %hash, amount = %request.amount, "Donation submitted");
                Ok(hash)
            }
            Err(e) => Err(FlowError::from_submission(e)),
        }
    }

    /// Await mining of a submitted donation transaction.
    pub async fn await_confirmation(&self, hash: TxHash) -> FlowResult<()> {
        match wait_for_receipt(self.provider.as_ref(), hash, self.poll_interval).await {
            Ok(ReceiptStatus::Success { block_number }) => {
                tracing::info!(tx_hash = %hash, block_number, "Donation confirmed");
                Ok(())
            }
            Ok(ReceiptStatus::Reverted) => Err(FlowError::TransactionReverted),
            Err(e) => Err(FlowError::SubmissionFailed(e.to_string())),
        }
    }
}
