//! `pupbowl-tui`: terminal roster manager for a Puppy Bowl cohort.
//!
//! Browse the roster, expand a player's details, add and remove players.
//! All network work runs in a bridge task that owns the synchronizer; the
//! UI loop only exchanges actions with it.
//!
//! Logs go to a file (default `/tmp/pupbowl-tui.log`) so they never
//! corrupt the terminal.

mod action;
mod app;
mod bridge;
mod component;
mod event;
mod screens;
mod theme;
mod tui;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use pupbowl_core::{RosterConfig, Synchronizer};

use crate::app::App;
use crate::bridge::{ChannelView, run_bridge};

/// Terminal UI for browsing and editing a Puppy Bowl roster.
#[derive(Parser, Debug)]
#[command(name = "pupbowl-tui", version, about)]
struct Cli {
    /// Config profile to use
    #[arg(short = 'p', long, env = "PUPBOWL_PROFILE")]
    profile: Option<String>,

    /// Roster service origin (e.g., https://fsa-puppy-bowl.herokuapp.com)
    #[arg(long, env = "PUPBOWL_ORIGIN")]
    origin: Option<String>,

    /// Cohort whose roster to manage
    #[arg(long, env = "PUPBOWL_COHORT")]
    cohort: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(short = 'k', long, env = "PUPBOWL_INSECURE")]
    insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "PUPBOWL_TIMEOUT")]
    timeout: Option<u64>,

    /// Log file path
    #[arg(long, default_value = "/tmp/pupbowl-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-based tracing. Nothing may reach stdout or stderr while the
/// terminal is in raw mode. Hold the guard until exit so logs flush.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "pupbowl_tui={log_level},pupbowl_core={log_level},pupbowl_api={log_level}"
        ))
    });

    let log_dir = cli
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(std::path::Path::new("."));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("pupbowl-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

/// Flags win over the selected profile, which wins over built-in defaults.
fn roster_config(cli: &Cli) -> Result<(String, RosterConfig)> {
    let config = pupbowl_config::load_config_or_default();
    let (name, mut profile) = config.resolve_profile(cli.profile.as_deref())?;

    if let Some(ref origin) = cli.origin {
        profile.origin.clone_from(origin);
    }
    if let Some(ref cohort) = cli.cohort {
        profile.cohort.clone_from(cohort);
    }
    if cli.timeout.is_some() {
        profile.timeout = cli.timeout;
    }
    if cli.insecure {
        profile.insecure = Some(true);
    }

    let roster = pupbowl_config::profile_to_roster_config(&profile, &config.defaults)?;
    Ok((name, roster))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tui::install_hooks()?;
    let _log_guard = setup_tracing(&cli);

    let (profile, config) = roster_config(&cli)?;
    info!(
        profile = %profile,
        origin = %config.origin,
        cohort = %config.cohort,
        "starting pupbowl-tui"
    );

    let client = config.connect()?;
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let (intent_tx, intent_rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();

    let roster = Synchronizer::new(client, ChannelView::new(action_tx.clone()));
    let bridge = tokio::spawn(run_bridge(
        roster,
        intent_rx,
        action_tx.clone(),
        cancel.clone(),
    ));

    let source = format!("{} · {}", config.cohort, config.origin);
    let mut app = App::new(source, action_tx, action_rx, intent_tx);
    let outcome = app.run().await;

    cancel.cancel();
    let _ = bridge.await;
    outcome
}
