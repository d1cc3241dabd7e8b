//! CLI Adapter
//!
//! Command-line interface for the Conveyor adapter.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{load_settings, CliApp, Command, QuoteCmd};

use anyhow::Result;

use crate::config::Config;

/// Initialize the CLI application
pub fn init() -> CliApp {
    use clap::Parser;
    CliApp::parse()
}

/// Execute the CLI command
pub async fn execute(app: CliApp, settings: Option<Config>) -> Result<()> {
    commands::execute(app, settings).await
}
