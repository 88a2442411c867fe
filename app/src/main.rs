// In app/src/main.rs

use anyhow::{Context, Result};
use app_config::Settings;
use clap::{Parser, Subcommand};
use core_types::Pair;
use engine::TradingTask;
use ledger::{CsvLedgerStore, Ledger};
use market_data::{QuoteClient, TrendHistory};
use notifier::{NoopNotifier, Notifier, TelegramNotifier};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::prelude::*;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "A single-pair MACD crossover trading bot.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs the polling trade loop until interrupted.
    Run,

    /// Runs exactly one decision cycle and exits. Suited to cron-style
    /// scheduling where every invocation is one polling tick.
    Tick,

    /// Prints the latest balance ledger entry.
    Status,
}

// --- Main Application Entry Point ---

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = app_config::load_settings().context("Failed to load configuration")?;
    init_tracing(&settings.app.log_level);

    tracing::info!(environment = %settings.app.environment, "Starting Meridian application");

    // Match on the parsed command and call the appropriate handler.
    match cli.command {
        Commands::Run => {
            let poll_interval = Duration::from_secs(settings.market_data.poll_interval_secs);
            let mut task = build_task(&settings)?;
            task.run(poll_interval).await
        }
        Commands::Tick => {
            let mut task = build_task(&settings)?;
            let outcome = task.run_cycle().await?;
            tracing::info!(?outcome, "Decision cycle complete.");
            Ok(())
        }
        Commands::Status => print_status(&settings),
    }
}

/// Wires the settings into a ready-to-run trading task.
fn build_task(settings: &Settings) -> Result<TradingTask<CsvLedgerStore>> {
    ensure_parent_dir(&settings.ledger.path)?;
    ensure_parent_dir(&settings.market_data.history_path)?;

    let pair = Pair {
        from: settings.market_data.from_currency.clone(),
        to: settings.market_data.to_currency.clone(),
    };
    let quotes = QuoteClient::new(&settings.market_data);
    let history = TrendHistory::new(&settings.market_data.history_path);
    let ledger = Ledger::new(
        CsvLedgerStore::new(&settings.ledger.path),
        settings.ledger.starting_eur_balance,
    );

    let notifier: Box<dyn Notifier> = if settings.telegram.enabled {
        Box::new(TelegramNotifier::new(&settings.telegram))
    } else {
        tracing::warn!("Telegram notifications are disabled. Using the no-op notifier.");
        Box::new(NoopNotifier)
    };

    Ok(TradingTask::new(
        pair,
        settings.trade.clone(),
        quotes,
        history,
        ledger,
        notifier,
    ))
}

fn print_status(settings: &Settings) -> Result<()> {
    ensure_parent_dir(&settings.ledger.path)?;
    let mut ledger = Ledger::new(
        CsvLedgerStore::new(&settings.ledger.path),
        settings.ledger.starting_eur_balance,
    );
    let entry = ledger.latest()?;

    println!("Last refreshed:    {}", entry.timestamp);
    println!("Transaction:       {}", entry.transaction);
    println!("EUR balance:       {}", entry.eur_balance);
    println!("Asset balance:     {}", entry.asset_balance);
    println!("Asset value (EUR): {}", entry.asset_value_eur);
    println!("Exchange rate:     {}", entry.exchange_rate);
    println!("Profit (EUR):      {}", entry.profit_eur);
    Ok(())
}

fn ensure_parent_dir(path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}

fn init_tracing(log_level: &str) {
    let level = log_level.parse().unwrap_or(tracing::Level::INFO);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_filter(tracing_subscriber::filter::Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();
}
