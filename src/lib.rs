//! USDC donation client library.
//!
//! Connects a wallet, grants the donation contract a fixed USDC spending
//! allowance, and submits donation transactions. The core is the
//! [`flow::TransactionOrchestrator`] state machine; [`provider`] supplies the
//! wallet capability it runs against.

pub mod config;
pub mod flow;
pub mod provider;

pub use config::ClientConfig;
pub use flow::{FlowConfig, FlowState, TransactionOrchestrator};
pub use provider::{RpcWalletProvider, WalletProvider};
