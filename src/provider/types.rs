//! Provider-level types and error definitions.

use thiserror::Error;

/// Errors reported by a wallet provider implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No wallet capability is present (no signer, no injected provider).
    #[error("no wallet provider available")]
    Unavailable,

    /// The user declined an authorization or signature prompt.
    #[error("request rejected by user")]
    Rejected,

    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Outcome of a mined transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptStatus {
    /// Transaction executed successfully.
    Success { block_number: u64 },
    /// Transaction was mined but reverted by contract logic.
    Reverted,
}
