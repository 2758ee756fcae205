//! Wallet gateway.
//!
//! Thin adapter over the injected wallet provider for account discovery and
//! connection. Returns values for the orchestrator to store; mutates no
//! shared state itself.

use std::sync::Arc;

use alloy::primitives::Address;

use crate::flow::error::{FlowError, FlowResult};
use crate::provider::{ProviderError, WalletProvider};

/// Account discovery and connection over an injected provider.
#[derive(Debug, Clone)]
pub struct WalletGateway<P> {
    provider: Arc<P>,
}

impl<P: WalletProvider> WalletGateway<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Query for an already-authorized account without prompting the user.
    ///
    /// Fails silently: provider absence or errors log a warning and yield
    /// `None`.
    pub async fn detect_existing_connection(&self) -> Option<Address> {
        match self.provider.authorized_accounts().await {
            Ok(accounts) => accounts.first().copied(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not query authorized accounts");
                None
            }
        }
    }

    /// Prompt the user for authorization and return the first account.
    pub async fn request_connection(&self) -> FlowResult<Address> {
        let accounts = self
            .provider
            .request_accounts()
            .await
            .map_err(|e| match e {
                ProviderError::Unavailable => FlowError::ProviderUnavailable,
                ProviderError::Rejected => FlowError::UserRejected,
                ProviderError::Rpc(message) => FlowError::SubmissionFailed(message),
            })?;

        // Authorization that yields no account is treated as a decline.
        accounts.first().copied().ok_or(FlowError::UserRejected)
    }
}
