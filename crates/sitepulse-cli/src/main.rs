//! sitepulse — transition-gated HTTP uptime monitor.
//!
//! One invocation runs one monitoring cycle: probe every configured
//! site, compare against the stored baseline, post a Discord alert for
//! each meaningful transition, rewrite the status file. Scheduling is
//! the operator's business (cron, a systemd timer, a CI job).
//!
//! # Usage
//!
//! ```text
//! sitepulse check --config sites.json --state status_cache.json
//! ```
//!
//! The webhook target comes from `DISCORD_WEBHOOK_URL` (environment or
//! `.env` file); when absent, alerts are logged and dropped instead of
//! failing the run.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use sitepulse_monitor::HttpProber;
use sitepulse_notify::DiscordNotifier;
use sitepulse_state::StatusStore;

#[derive(Parser)]
#[command(name = "sitepulse", about = "Transition-gated HTTP uptime monitor")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one monitoring cycle over the configured sites.
    Check {
        /// Path to the site list (JSON array of name/url/expectedStatus).
        #[arg(long, default_value = "sites.json")]
        config: PathBuf,

        /// Path to the status cache file.
        #[arg(long, default_value = "status_cache.json")]
        state: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A .env file is optional; real environment variables win.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check { config, state } => run_check(config, state).await,
    }
}

async fn run_check(config: PathBuf, state: PathBuf) -> anyhow::Result<()> {
    // The site list is the one fatal input: without it there is nothing
    // to probe. Everything after this point degrades instead of failing.
    let sites = pulse_core::load_sites(&config)?;

    let mut store = StatusStore::load(&state);
    let prober = HttpProber::new()?;
    let notifier = DiscordNotifier::new(std::env::var("DISCORD_WEBHOOK_URL").ok());

    let summary = sitepulse_monitor::run_cycle(&sites, &prober, &mut store, &notifier).await;

    info!(
        sites = summary.sites_checked,
        notifications = summary.notifications_sent,
        "cycle finished"
    );
    Ok(())
}
