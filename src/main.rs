//! Conveyor - swap aggregator adapter CLI
//!
//! Quotes swaps through the Conveyor API and prints the resulting transaction.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use conveyor_adapter::adapters::cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (CONVEYOR_API_URL and friends)
    dotenvy::dotenv().ok();

    let app = cli::init();
    let settings = cli::load_settings(&app.config)?;

    let configured_level = settings.as_ref().map(|s| s.logging.level.as_str());
    init_logging(app.verbose, app.debug, configured_level)?;

    cli::execute(app, settings).await
}

fn init_logging(verbose: bool, debug: bool, configured_level: Option<&str>) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else if let Some(level) = configured_level {
        EnvFilter::new(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt().with_env_filter(filter).init();
    Ok(())
}
