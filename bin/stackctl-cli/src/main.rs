mod app;
mod cli;
mod cli_command;
mod state;

use clap::Parser;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
    info!("Starting stackctl");

    match app::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => e.report(),
    }
}
