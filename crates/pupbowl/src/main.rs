mod cli;
mod commands;
mod config;
mod error;
mod output;
mod view;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pupbowl_core::Synchronizer;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::view::CaptureView;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    init_tracing(cli.global.verbose);

    // Dispatch and handle errors with proper exit codes
    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need the roster service
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "pupbowl", &mut std::io::stdout());
            Ok(())
        }

        // All other commands go through a synchronizer
        cmd => {
            let cfg = config::load_config_or_default();
            let settings = config::resolve(&cli.global, &cfg)?;
            let client = settings.roster.connect()?;
            let mut roster = Synchronizer::new(client, CaptureView::default());

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &mut roster, &settings, &cli.global).await
        }
    }
}
