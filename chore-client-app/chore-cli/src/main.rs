use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use chore_core::services::DashboardSettings;
use chore_infrastructure::LedgerStore;
use chore_shared::config::AppConfig;

mod commands;

use commands::{Command, Ledger};

#[derive(Parser, Debug)]
#[command(
    name = "chore-cli",
    version,
    about = "Shared chore ledger - balances and next-doer suggestions"
)]
struct Args {
    /// Ledger snapshot file (defaults to ledger.snapshot_path from config)
    #[arg(long, global = true)]
    snapshot: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let _guard = chore_shared::telemetry::init_telemetry(&config.log);

    info!("{} starting ({})", config.app.name, config.app.env);

    let snapshot_path = args
        .snapshot
        .unwrap_or_else(|| PathBuf::from(&config.ledger.snapshot_path));
    let store = Arc::new(
        LedgerStore::open(&snapshot_path)
            .await
            .with_context(|| format!("Failed to open ledger at {}", snapshot_path.display()))?,
    );

    let ledger = Ledger::new(store, DashboardSettings::from(&config.ledger));
    let output = match ledger.run(args.command).await {
        Ok(output) => output,
        Err(e) => {
            error!("Command failed: {:#}", e);
            return Err(e);
        }
    };

    println!("{}", output);
    Ok(())
}
