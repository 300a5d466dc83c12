//! Clap derive structures for the `pupbowl` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// pupbowl -- kubectl-style CLI for a Puppy Bowl roster
#[derive(Debug, Parser)]
#[command(
    name = "pupbowl",
    version,
    about = "Manage a Puppy Bowl roster from the command line",
    long_about = "List, inspect, add, and remove players in a Puppy Bowl cohort.\n\n\
        Every change is sent to the roster service first; the local view is\n\
        always re-read from the service afterwards.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Roster profile to use
    #[arg(long, short = 'p', env = "PUPBOWL_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Roster service origin (overrides profile)
    #[arg(long, env = "PUPBOWL_ORIGIN", global = true)]
    pub origin: Option<String>,

    /// Cohort identifier (overrides profile)
    #[arg(long, env = "PUPBOWL_COHORT", global = true)]
    pub cohort: Option<String>,

    /// Output format [default: table]
    #[arg(long, short = 'o', env = "PUPBOWL_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "PUPBOWL_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (no timeout unless set)
    #[arg(long, env = "PUPBOWL_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every player in the cohort
    #[command(alias = "ls")]
    List,

    /// Show one player's details
    #[command(alias = "get")]
    Show {
        /// Player id
        id: String,
    },

    /// Add a player to the roster
    #[command(alias = "create")]
    Add(AddArgs),

    /// Remove a player from the roster
    #[command(alias = "rm", alias = "delete")]
    Remove {
        /// Player id
        id: String,
    },

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Add ──────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Player name (required, must not be blank)
    #[arg(long, short = 'n')]
    pub name: String,

    /// Breed
    #[arg(long, short = 'b')]
    pub breed: Option<String>,

    /// Roster status, usually "field" or "bench"
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// Requested player id (ignored: the service assigns ids)
    #[arg(long, hide = true)]
    pub player_id: Option<String>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or extend the config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
