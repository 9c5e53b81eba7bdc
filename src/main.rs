//! stats-gateway: portfolio stats HTTP/WebSocket server

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use portfolio_stats::server::builder::{load_config, run_server};
use portfolio_stats::utils::logging::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "stats-gateway", version, about = portfolio_stats::DESCRIPTION)]
struct Cli {
    /// YAML configuration file; missing files fall back to defaults
    #[arg(short, long, env = "STATS_CONFIG", default_value = "config/stats.yaml")]
    config: PathBuf,
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli.config)
        .await
        .with_context(|| format!("loading {}", cli.config.display()))?;
    init_tracing(&config.logging).context("initializing logging")?;

    let build = portfolio_stats::build_info();
    info!(
        "{} v{} ({}, built {}, {})",
        portfolio_stats::NAME,
        build.version,
        build.git_hash,
        build.build_time,
        build.rust_version
    );

    run_server(config).await.context("server stopped")?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // {:#} keeps the context chain on one line
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
