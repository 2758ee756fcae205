//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check addresses and URLs actually parse
//! - Validate value ranges (gas limit > 0, decimals within U256 range)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::Address;
use thiserror::Error;

use crate::config::schema::ClientConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid RPC URL '{url}': {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("invalid {field} address '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    ZeroValue { field: &'static str },

    #[error("token_decimals {0} exceeds the maximum of 77")]
    DecimalsOutOfRange(u8),

    #[error("allowance does not fit the token's numeric range: {reason}")]
    AllowanceOverflow { reason: String },
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.rpc.url.parse::<url::Url>() {
        errors.push(ValidationError::InvalidRpcUrl {
            url: config.rpc.url.clone(),
            reason: e.to_string(),
        });
    }

    if config.contracts.token_address.parse::<Address>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "token",
            value: config.contracts.token_address.clone(),
        });
    }
    if config.contracts.donation_address.parse::<Address>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "donation contract",
            value: config.contracts.donation_address.clone(),
        });
    }

    if config.allowance.whole_tokens == 0 {
        errors.push(ValidationError::ZeroValue {
            field: "allowance.whole_tokens",
        });
    }
    // parse_units rejects anything above 77 decimal places (U256 overflow).
    if config.allowance.token_decimals > 77 {
        errors.push(ValidationError::DecimalsOutOfRange(
            config.allowance.token_decimals,
        ));
    } else if let Err(e) = alloy::primitives::utils::parse_units(
        &config.allowance.whole_tokens.to_string(),
        config.allowance.token_decimals,
    ) {
        errors.push(ValidationError::AllowanceOverflow {
            reason: e.to_string(),
        });
    }

    if config.donation.gas_limit == 0 {
        errors.push(ValidationError::ZeroValue {
            field: "donation.gas_limit",
        });
    }
    if config.donation.poll_interval_ms == 0 {
        errors.push(ValidationError::ZeroValue {
            field: "donation.poll_interval_ms",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
