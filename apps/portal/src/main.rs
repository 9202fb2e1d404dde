use std::process::ExitCode;
use std::sync::Arc;

use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod console;

use clap::Parser;
use commands::Cli;
use console::ConsolePage;
use shared_config::PortalConfig;
use shared_utils::FileSessionStore;

#[tokio::main]
async fn main() -> ExitCode {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing; stdout carries rendered fragments
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = PortalConfig::from_env();
    info!("Using clinic backend at {}", config.api_base_url);

    let store = Arc::new(FileSessionStore::new(&config.session_file));

    match commands::run(cli.command, &config, Arc::new(ConsolePage), store).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
