//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated, immutable)
//!     → handed to provider + flow at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a session uses exactly one config
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    AllowanceConfig, ClientConfig, ContractsConfig, DonationTxConfig, ObservabilityConfig,
    RpcConfig,
};
