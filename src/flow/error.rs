//! Flow-level error taxonomy.
//!
//! Every action boundary (connect / approve / donate) catches these and
//! translates them into a single surfaced notification; none are fatal to
//! the orchestrator.

use thiserror::Error;

use crate::provider::ProviderError;

/// Errors surfaced by the donation flow.
#[derive(Debug, Error)]
pub enum FlowError {
    /// No wallet capability present. User-facing instruction, not retried.
    #[error("no wallet provider detected; connect a wallet extension or set a signing key")]
    ProviderUnavailable,

    /// User declined the connection prompt. Abandons the attempt.
    #[error("connection request rejected by user")]
    UserRejected,

    /// User declined the signature prompt. Abandons the attempt.
    #[error("signature request rejected by user")]
    SigningRejected,

    /// Network or provider error during submission, with the provider's
    /// message. No automatic retry.
    #[error("transaction submission failed: {0}")]
    SubmissionFailed(String),

    /// Transaction was accepted but failed on-chain.
    #[error("transaction reverted on-chain")]
    TransactionReverted,

    /// Local validation failure, raised before any network call.
    #[error("invalid donation amount: {0}")]
    InvalidAmount(String),
}

impl FlowError {
    /// Translate a provider error from a signing/submission call.
    pub(crate) fn from_submission(err: ProviderError) -> Self {
        match err {
            ProviderError::Unavailable => FlowError::ProviderUnavailable,
            ProviderError::Rejected => FlowError::SigningRejected,
            ProviderError::Rpc(message) => FlowError::SubmissionFailed(message),
        }
    }

    /// True for the user-declined variants that abandon an attempt silently.
    pub fn is_rejection(&self) -> bool {
        matches!(self, FlowError::UserRejected | FlowError::SigningRejected)
    }
}

/// Result type for flow operations.
pub type FlowResult<T> = Result<T, FlowError>;
