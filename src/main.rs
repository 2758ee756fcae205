//! USDC donation client CLI.
//!
//! Drives the orchestration flow end to end against a JSON-RPC endpoint:
//! silent reconnect on startup, connect on demand, allowance approval, and
//! donation submission. The signing key comes from `DONATE_PRIVATE_KEY`.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use donation_client::config::{load_config, ClientConfig};
use donation_client::flow::{FlowConfig, FlowState, TracingSink, TransactionOrchestrator};
use donation_client::provider::RpcWalletProvider;

#[derive(Parser)]
#[command(name = "donate")]
#[command(about = "USDC donation client", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "donate.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show connection status and current flow state
    Status,
    /// Grant the donation contract its USDC allowance
    Approve,
    /// Approve if needed, then send a donation
    Donate {
        /// Donation amount in whole tokens (free text, validated on submit)
        amount: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "donation_client=info,donate=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = if cli.config.exists() {
        load_config(&cli.config)?
    } else {
        tracing::warn!(path = %cli.config.display(), "Config file not found, using defaults");
        ClientConfig::default()
    };

    tracing::info!(
        rpc_url = %config.rpc.url,
        chain_id = config.rpc.chain_id,
        token = %config.contracts.token_address,
        donation_contract = %config.contracts.donation_address,
        "Configuration loaded"
    );

    let provider = Arc::new(RpcWalletProvider::new(&config.rpc)?);
    let flow_config = FlowConfig::from_client_config(&config)?;
    let mut orchestrator = TransactionOrchestrator::new(provider, flow_config, TracingSink);

    // Attempt silent reconnection first, as the page-load path does.
    orchestrator.on_load().await;

    match cli.command {
        Commands::Status => {
            println!("{}", serde_json::to_string_pretty(&orchestrator.view())?);
        }
        Commands::Approve => {
            ensure_connected(&mut orchestrator).await?;
            orchestrator.approve().await;
        }
        Commands::Donate { amount } => {
            ensure_connected(&mut orchestrator).await?;
            if !orchestrator.view().approved {
                orchestrator.approve().await;
            }
            if orchestrator.view().approved {
                orchestrator.set_amount(&amount);
                orchestrator.donate().await;
            } else {
                tracing::error!("Allowance not confirmed; donation not attempted");
            }
        }
    }

    Ok(())
}

async fn ensure_connected<N>(
    orchestrator: &mut TransactionOrchestrator<RpcWalletProvider, N>,
) -> Result<(), Box<dyn std::error::Error>>
where
    N: donation_client::flow::NotificationSink,
{
    if orchestrator.state() == FlowState::Disconnected {
        orchestrator.connect().await;
    }
    if orchestrator.state() == FlowState::Disconnected {
        return Err("wallet not connected".into());
    }
    Ok(())
}
