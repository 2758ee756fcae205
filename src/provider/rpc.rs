//! JSON-RPC wallet provider with a local signer.
//!
//! # Responsibilities
//! - Connect to a JSON-RPC endpoint
//! - Sign and submit transactions with a key loaded from the environment
//! - Handle timeouts and network errors gracefully
//!
//! # Security
//! - The private key is loaded ONLY from an environment variable
//! - Keys are never logged or serialized

use std::sync::Arc;
use std::time::Duration;

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use tokio::time::timeout;

use crate::config::RpcConfig;
use crate::provider::types::{ProviderError, ProviderResult, ReceiptStatus};
use crate::provider::WalletProvider;

/// Environment variable name for the signing key.
pub const SIGNING_KEY_ENV_VAR: &str = "DONATE_PRIVATE_KEY";

/// Wallet provider backed by an alloy HTTP provider.
///
/// When `DONATE_PRIVATE_KEY` is unset the provider still answers read-only
/// calls but reports no authorized account, which the flow layer surfaces as
/// the missing-wallet case.
#[derive(Clone)]
pub struct RpcWalletProvider {
    provider: Arc<dyn Provider + Send + Sync>,
    /// Signer address, present only when a key was loaded.
    account: Option<Address>,
    chain_id: u64,
    timeout_duration: Duration,
}

impl RpcWalletProvider {
    /// Create a provider from configuration, loading the signing key from
    /// `DONATE_PRIVATE_KEY` if set.
    pub fn new(config: &RpcConfig) -> ProviderResult<Self> {
        let url: url::Url = config.url.parse().map_err(|e| {
            ProviderError::Rpc(format!("Invalid RPC URL '{}': {}", config.url, e))
        })?;

        let signer = match std::env::var(SIGNING_KEY_ENV_VAR) {
            Ok(raw) => Some(parse_signing_key(&raw)?),
            Err(_) => None,
        };

        let (provider, account): (Arc<dyn Provider + Send + Sync>, Option<Address>) = match signer
        {
            Some(signer) => {
                let address = signer.address();
                let wallet = EthereumWallet::from(signer);
                let provider =
                    Arc::new(ProviderBuilder::new().wallet(wallet).connect_http(url));
                (provider, Some(address))
            }
            None => {
                tracing::warn!(
                    env_var = SIGNING_KEY_ENV_VAR,
                    "No signing key in environment; wallet capability absent"
                );
                (Arc::new(ProviderBuilder::new().connect_http(url)), None)
            }
        };

        if let Some(address) = account {
            tracing::info!(
                rpc_url = %config.url,
                chain_id = config.chain_id,
                address = %address,
                "Wallet provider initialized"
            );
        }

        Ok(Self {
            provider,
            account,
            chain_id: config.chain_id,
            timeout_duration: Duration::from_secs(config.timeout_secs),
        })
    }

    fn rpc_timeout_error(&self) -> ProviderError {
        ProviderError::Rpc(format!(
            "RPC timeout after {} seconds",
            self.timeout_duration.as_secs()
        ))
    }
}

fn parse_signing_key(raw: &str) -> ProviderResult<PrivateKeySigner> {
    // Strip 0x prefix if present
    let key_hex = raw.trim();
    let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);

    key_hex
        .parse()
        .map_err(|e| ProviderError::Rpc(format!("Invalid private key format: {}", e)))
}

impl WalletProvider for RpcWalletProvider {
    async fn authorized_accounts(&self) -> ProviderResult<Vec<Address>> {
        Ok(self.account.into_iter().collect())
    }

    async fn request_accounts(&self) -> ProviderResult<Vec<Address>> {
        // A local signer has no authorization prompt; its presence is the
        // authorization.
        match self.account {
            Some(address) => Ok(vec![address]),
            None => Err(ProviderError::Unavailable),
        }
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> ProviderResult<TxHash> {
        let Some(from) = self.account else {
            return Err(ProviderError::Unavailable);
        };
        let tx = tx.with_from(from).with_chain_id(self.chain_id);

        let fut = self.provider.send_transaction(tx);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(pending)) => Ok(*pending.tx_hash()),
            Ok(Err(e)) => Err(ProviderError::Rpc(e.to_string())),
            Err(_) => Err(self.rpc_timeout_error()),
        }
    }

    async fn transaction_receipt(&self, hash: TxHash) -> ProviderResult<Option<ReceiptStatus>> {
        let fut = self.provider.get_transaction_receipt(hash);
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(Some(receipt))) => {
                let status = if receipt.status() {
                    ReceiptStatus::Success {
                        block_number: receipt.block_number.unwrap_or_default(),
                    }
                } else {
                    ReceiptStatus::Reverted
                };
                Ok(Some(status))
            }
            Ok(Ok(None)) => Ok(None),
            Ok(Err(e)) => Err(ProviderError::Rpc(e.to_string())),
            Err(_) => Err(self.rpc_timeout_error()),
        }
    }
}

impl std::fmt::Debug for RpcWalletProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcWalletProvider")
            .field("account", &self.account)
            .field("chain_id", &self.chain_id)
            .field("timeout", &self.timeout_duration)
            .finish()
    }
}
