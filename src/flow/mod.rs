//! The donation flow.
//!
//! # Data Flow
//! ```text
//! user action (connect / approve / donate)
//!     → orchestrator.rs (state machine, owns UI context)
//!         → gateway.rs    (account discovery & connection)
//!         → allowance.rs  (ERC-20 approve + ApprovalState)
//!         → donation.rs   (Fund call + amount validation)
//!     → notify.rs (one notification per action outcome)
//! ```
//!
//! # Design Decisions
//! - Single-threaded and event-driven: each action is awaited to completion;
//!   the Approving/Donating sub-states are the only concurrency guard needed
//! - Errors never escape an action boundary; the machine always returns to a
//!   stable, re-attemptable state

pub mod allowance;
pub mod donation;
pub mod error;
pub mod gateway;
pub mod notify;
pub mod orchestrator;

use std::time::Duration;

use alloy::primitives::{Address, U256};

use crate::config::{ClientConfig, ConfigError, DonationTxConfig};
use crate::config::validation::{validate_config, ValidationError};

pub use allowance::{AllowanceRequest, ApprovalState, TokenAllowanceManager};
pub use donation::{parse_donation_amount, DonationRequest, DonationSubmitter};
pub use error::{FlowError, FlowResult};
pub use gateway::WalletGateway;
pub use notify::{NotificationSink, TracingSink};
pub use orchestrator::{FlowState, FlowView, Phase, TransactionOrchestrator};

/// Typed flow parameters derived from a validated [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// ERC-20 token contract.
    pub token: Address,
    /// Donation contract, both allowance spender and `Fund` recipient.
    pub donation_contract: Address,
    /// Fixed allowance in minor units.
    pub allowance_amount: U256,
    /// Token decimal places.
    pub token_decimals: u8,
    /// Donation transaction settings (gas limit, poll interval).
    pub donation_tx: DonationTxConfig,
    /// Receipt polling interval.
    pub poll_interval: Duration,
}

impl FlowConfig {
    /// Derive typed flow parameters, re-running semantic validation so the
    /// addresses are guaranteed to parse.
    pub fn from_client_config(config: &ClientConfig) -> Result<Self, ConfigError> {
        validate_config(config).map_err(ConfigError::Validation)?;

        let token: Address = config
            .contracts
            .token_address
            .parse()
            .map_err(|_| invalid_address("token", &config.contracts.token_address))?;
        let donation_contract: Address = config
            .contracts
            .donation_address
            .parse()
            .map_err(|_| invalid_address("donation contract", &config.contracts.donation_address))?;

        // validate_config has already proven the allowance fits U256.
        let allowance_amount =
            AllowanceRequest::from_config(token, donation_contract, &config.allowance)
                .map(|request| request.amount)
                .map_err(|e| {
                    ConfigError::Validation(vec![ValidationError::AllowanceOverflow {
                        reason: e.to_string(),
                    }])
                })?;

        Ok(Self {
            token,
            donation_contract,
            allowance_amount,
            token_decimals: config.allowance.token_decimals,
            donation_tx: config.donation.clone(),
            poll_interval: Duration::from_millis(config.donation.poll_interval_ms),
        })
    }
}

fn invalid_address(field: &'static str, value: &str) -> ConfigError {
    ConfigError::Validation(vec![ValidationError::InvalidAddress {
        field,
        value: value.to_string(),
    }])
}
