//! Wallet provider abstraction.
//!
//! # Data Flow
//! ```text
//! flow layer (gateway / allowance / donation)
//!     → WalletProvider trait (account discovery, submission, receipts)
//!         → rpc.rs (alloy HTTP provider + local signer)
//!         → tests/common (scripted fake)
//! ```
//!
//! # Design Decisions
//! - The injected wallet capability is a trait parameter, never an ambient
//!   global, so a fake provider substitutes under test
//! - Receipt polling lives here so both managers share one confirmation loop
//! - No cancellation once a transaction is submitted; polling runs until the
//!   ledger resolves the transaction or the provider call errors out

pub mod rpc;
pub mod types;

use std::time::Duration;

use alloy::primitives::{Address, TxHash};
use alloy::rpc::types::TransactionRequest;
use tokio::time::interval;

pub use rpc::{RpcWalletProvider, SIGNING_KEY_ENV_VAR};
pub use types::{ProviderError, ProviderResult, ReceiptStatus};

/// The wallet capability consumed by the donation flow.
///
/// Mirrors the surface of an injected browser wallet: account discovery
/// without prompting, user-prompted authorization, transaction signing and
/// submission, and receipt lookup.
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    /// Accounts already authorized for this session, without prompting.
    async fn authorized_accounts(&self) -> ProviderResult<Vec<Address>>;

    /// Prompt the user to authorize accounts.
    async fn request_accounts(&self) -> ProviderResult<Vec<Address>>;

    /// Sign and submit a transaction, returning its hash once it enters the
    /// pending pool.
    async fn send_transaction(&self, tx: TransactionRequest) -> ProviderResult<TxHash>;

    /// Look up the receipt for a submitted transaction. `None` while pending.
    async fn transaction_receipt(&self, hash: TxHash) -> ProviderResult<Option<ReceiptStatus>>;
}

/// Poll for a transaction receipt until the ledger resolves it.
///
/// Blocks indefinitely; finality has no client-side deadline.
pub async fn wait_for_receipt<P: WalletProvider>(
    provider: &P,
    hash: TxHash,
    poll_interval: Duration,
) -> ProviderResult<ReceiptStatus> {
    let mut ticker = interval(poll_interval);

    loop {
        ticker.tick().await;

        match provider.transaction_receipt(hash).await? {
            Some(status) => return Ok(status),
            None => {
                tracing::debug!(tx_hash = %hash, "transaction pending");
            }
        }
    }
}
