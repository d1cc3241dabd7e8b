//! CLI Command Handlers
//!
//! Implementation of all CLI commands for the Conveyor adapter.

use std::path::{Path, PathBuf};

use alloy_primitives::Address;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::adapters::conveyor::{get_tx, ConveyorClient};
use crate::config::{client_config, load_config, Config};
use crate::domain::{parse_amount, NormalizedQuote, QuoteOptions, CHAINS, NATIVE};

/// Conveyor - swap aggregator adapter for EVM chains
#[derive(Parser, Debug)]
#[command(
    name = "conveyor",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Conveyor swap aggregator adapter for EVM chains",
    long_about = "Fetches swap quotes from the Conveyor API for Ethereum, BSC, Polygon, \
                  Optimism, Arbitrum, Avalanche and Fantom, and prints the ready-to-sign \
                  transaction. Use the zero address for the chain's native coin."
)]
pub struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true, default_value = "config/conveyor.toml")]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported chains with their endpoints and router contracts
    Chains,

    /// Get a normalized quote for a token swap
    Quote(QuoteCmd),

    /// Print the transaction for a quoted swap, ready for an external signer
    Tx(QuoteCmd),
}

/// Swap to quote
#[derive(Args, Debug, Clone)]
pub struct QuoteCmd {
    /// Chain key (ethereum, bsc, polygon, optimism, arbitrum, avax, fantom)
    #[arg(value_name = "CHAIN")]
    pub chain: String,

    /// Input token address (0x0000000000000000000000000000000000000000 for native)
    #[arg(value_name = "TOKEN_IN")]
    pub token_in: Address,

    /// Output token address (0x0000000000000000000000000000000000000000 for native)
    #[arg(value_name = "TOKEN_OUT")]
    pub token_out: Address,

    /// Amount in the token's smallest unit (decimal or 0x hex)
    #[arg(value_name = "AMOUNT")]
    pub amount: String,

    /// Sender address used to personalize the quote
    #[arg(long, value_name = "ADDRESS")]
    pub from: Option<Address>,

    /// Slippage tolerance in percent (e.g. 0.5)
    #[arg(long, value_name = "PCT")]
    pub slippage: Option<Decimal>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Load the config file if present; a missing file means built-in defaults
pub fn load_settings(path: &Path) -> Result<Option<Config>> {
    let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).to_string());

    if !expanded.exists() {
        tracing::debug!(path = %expanded.display(), "No config file, using defaults");
        return Ok(None);
    }

    let config = load_config(&expanded)
        .with_context(|| format!("Failed to load configuration from {}", expanded.display()))?;
    Ok(Some(config))
}

/// Execute the parsed command
pub async fn execute(app: CliApp, settings: Option<Config>) -> Result<()> {
    match app.command {
        Command::Chains => chains_command(settings.as_ref()),
        Command::Quote(cmd) => quote_command(cmd, settings.as_ref()).await,
        Command::Tx(cmd) => tx_command(cmd, settings.as_ref()).await,
    }
}

fn chains_command(settings: Option<&Config>) -> Result<()> {
    let base_url = client_config(settings)?.api_base_url;

    println!("{:<10} {:>8}  {:<44} {}", "CHAIN", "ID", "ROUTER", "ENDPOINT");
    for cfg in CHAINS {
        println!(
            "{:<10} {:>8}  {:<44} {}",
            cfg.chain.key(),
            cfg.chain_id,
            cfg.router.to_string(),
            cfg.endpoint(&base_url)
        );
    }
    println!("\nNative token sentinel: {}", NATIVE);
    Ok(())
}

async fn fetch_quote(cmd: &QuoteCmd, settings: Option<&Config>) -> Result<NormalizedQuote> {
    let client = ConveyorClient::with_config(client_config(settings)?)
        .context("Failed to create Conveyor client")?;

    let amount = parse_amount(&cmd.amount).map_err(anyhow::Error::msg)?;
    let mut opts = QuoteOptions::new();
    if let Some(user) = cmd.from.or_else(|| settings.and_then(|s| s.quote.user_address)) {
        opts = opts.with_user(user);
    }
    if let Some(pct) = cmd.slippage {
        opts = opts.with_slippage(pct);
    }

    client
        .get_quote(&cmd.chain, cmd.token_in, cmd.token_out, amount, &opts)
        .await
        .context("Failed to get quote")
}

async fn quote_command(cmd: QuoteCmd, settings: Option<&Config>) -> Result<()> {
    let quote = fetch_quote(&cmd, settings).await?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    println!("Chain:          {}", quote.chain);
    println!("Amount in:      {}", quote.amount_in);
    println!("Amount out:     {}", quote.amount_returned);
    println!("Estimated gas:  {}", quote.estimated_gas);
    println!("Approve:        {}", quote.token_approval_address);
    Ok(())
}

async fn tx_command(cmd: QuoteCmd, settings: Option<&Config>) -> Result<()> {
    let quote = fetch_quote(&cmd, settings).await?;
    let tx = get_tx(&quote).context("Quote carries no transaction")?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(tx)?);
        return Ok(());
    }

    println!("to:        {}", tx.to);
    println!("value:     {}", tx.value);
    println!("gasLimit:  {}", tx.gas_limit);
    println!("data:      {}", tx.data);
    Ok(())
}
