//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Defaults reproduce the fixed constants of the donation flow: the Goerli
//! USDC and donation contract addresses, the 1000-token allowance at six
//! decimals, and the 300000 gas-limit ceiling on donation calls.

use serde::{Deserialize, Serialize};

/// Root configuration for the donation client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// JSON-RPC endpoint settings.
    pub rpc: RpcConfig,

    /// Fixed contract addresses consumed by the flow.
    pub contracts: ContractsConfig,

    /// Fixed spending allowance granted to the donation contract.
    pub allowance: AllowanceConfig,

    /// Donation transaction settings.
    pub donation: DonationTxConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// JSON-RPC endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// JSON-RPC endpoint URL.
    pub url: String,

    /// Chain ID (e.g., 5 for Goerli, 31337 for local Anvil).
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8545".to_string(),
            chain_id: 5,
            timeout_secs: 10,
        }
    }
}

/// Contract addresses the flow talks to.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractsConfig {
    /// ERC-20 token contract granting allowances (USDC).
    pub token_address: String,

    /// Donation contract authorized as spender and called via `Fund`.
    pub donation_address: String,
}

impl Default for ContractsConfig {
    fn default() -> Self {
        Self {
            token_address: "0x07865c6E87B9F70255377e024ace6630C1Eaa37F".to_string(),
            donation_address: "0x1A4816A6559f63E253407938C61271EdE76C9687".to_string(),
        }
    }
}

/// Fixed allowance granted to the donation contract on approve.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AllowanceConfig {
    /// Whole tokens to approve, independent of the donation amount.
    pub whole_tokens: u64,

    /// Token decimal places (6 for USDC).
    pub token_decimals: u8,
}

impl Default for AllowanceConfig {
    fn default() -> Self {
        Self {
            whole_tokens: 1000,
            token_decimals: 6,
        }
    }
}

/// Donation transaction settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DonationTxConfig {
    /// Gas-limit ceiling for the donation call.
    pub gas_limit: u64,

    /// Receipt polling interval while awaiting confirmation, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for DonationTxConfig {
    fn default() -> Self {
        Self {
            gas_limit: 300_000,
            poll_interval_ms: 2000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
