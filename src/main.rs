//! Assistant Bot - Main entry point
//!
//! Runs the interactive contact manager on stdin/stdout. Logs go to stderr.

use anyhow::Result;
use assistant_bot::{run_repl, AddressBook, CommandHandler, Config, ContactService};
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // An invalid LOG_LEVEL only affects logging, so fall back to defaults
    let (config, config_error) = Config::from_env_or_default();

    // Initialize logging (stderr only so stdout carries just the conversation)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match config_error {
        Some(e) => warn!("Ignoring invalid configuration, using defaults: {}", e),
        None => info!("Configuration loaded successfully"),
    }
    info!("Starting assistant bot with log level: {}", config.log_level);

    let mut handler = CommandHandler::new(ContactService::new(AddressBook::new()));
    let stdin = BufReader::new(tokio::io::stdin());

    run_repl(stdin, tokio::io::stdout(), &mut handler).await?;

    info!("Assistant bot shutdown complete");
    Ok(())
}
