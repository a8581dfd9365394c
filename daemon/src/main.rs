//! florin daemon — entry point for running the economy ledger.
//!
//! Loads the configuration, replays the ledger log, and reports the
//! economy's indicators. Request dispatch is an external collaborator and
//! lives outside this binary.

mod config;

use anyhow::Context;
use clap::Parser;
use config::EconomyConfig;
use florin_ledger::Economy;
use florin_store::FileLog;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "florin-daemon", about = "florin economy ledger daemon")]
struct Cli {
    /// Path of the ledger log file.
    /// When a config file is provided, defaults to the file's value.
    #[arg(long, env = "FLORIN_LEDGER_PATH")]
    ledger_path: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "FLORIN_LOG_LEVEL")]
    log_level: String,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    florin_utils::init_tracing(&cli.log_level);

    let file_config = if let Some(ref config_path) = cli.config {
        match EconomyConfig::from_toml_file(config_path) {
            Ok(cfg) => {
                tracing::info!("loaded config from {}", config_path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("failed to load config file: {e}, using CLI defaults");
                None
            }
        }
    } else {
        None
    };

    let mut config = file_config.unwrap_or_default();
    if let Some(ledger_path) = cli.ledger_path {
        config.ledger_path = ledger_path;
    }

    if let Some(parent) = config.ledger_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data directory {}", parent.display()))?;
    }

    tracing::info!("loading ledger from {}", config.ledger_path.display());
    let log = FileLog::open(&config.ledger_path).context("failed to open ledger log")?;
    let economy = Economy::open(log, config.params.clone(), florin_utils::random_event_id)
        .context("failed to load ledger")?;

    let summary = economy.summary();
    tracing::info!("user count     {}", summary.user_count);
    tracing::info!("economy size   {}", summary.total_supply);
    tracing::info!("circulating    {} per user", summary.circulating_per_user);
    tracing::info!("target         {} per user", summary.target_per_user);
    tracing::info!("fee percentage {}", (summary.fee_rate * 100.0) as u64);
    tracing::info!("stipend size   {}", summary.stipend);

    tracing::info!("ledger verified — economy is consistent");
    Ok(())
}
