use clap::Parser;
use tracing::info;

use telly_core::TellyConfig;
use telly_feed::HttpFeed;
use telly_notify::DesktopNotifier;
use telly_schedule::TickEngine;

/// Personal TV schedule watcher with desktop alerts.
#[derive(Debug, Parser)]
#[command(name = "telly", version, about)]
struct Args {
    /// Account identifier used to build the personal feed URL.
    account: String,
    /// Personal feed secret token.
    token: String,
    /// Path to telly.toml (defaults to ~/.telly/telly.toml).
    #[arg(long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing positional arguments end here with a usage error, before
    // anything else starts.
    let args = Args::parse();

    let config = TellyConfig::load(args.config.as_deref())?;
    init_tracing(config.log.path.as_deref())?;

    info!(version = env!("CARGO_PKG_VERSION"), "starting telly");

    let feed = HttpFeed::new(&config.feed, args.account, args.token)?;
    let engine = TickEngine::new(&config, feed.clone(), feed, DesktopNotifier);

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let engine_task = tokio::spawn(engine.run(shutdown_rx));

    tokio::signal::ctrl_c().await?;
    info!("interrupt received, terminating");

    let _ = shutdown_tx.send(true);
    engine_task.await?;
    Ok(())
}

/// Log to the configured file when set, stderr otherwise. `RUST_LOG`
/// overrides the default `info` filter.
fn init_tracing(log_path: Option<&str>) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());

    match log_path {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
    Ok(())
}
