//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors
//! with actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use pupbowl_config::ConfigError;
use pupbowl_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const VALIDATION: i32 = 6;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the roster service at {url}")]
    #[diagnostic(
        code(pupbowl::connection_failed),
        help(
            "{reason}\n\
             Check the origin with: pupbowl config show\n\
             Override it with --origin, or use --insecure (-k) for self-signed certificates."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("Player '{identifier}' not found")]
    #[diagnostic(
        code(pupbowl::not_found),
        help("Run: pupbowl list to see the current roster")
    )]
    NotFound { identifier: String },

    // ── Remote ───────────────────────────────────────────────────────
    #[error("Roster service error: {message}")]
    #[diagnostic(code(pupbowl::api_error))]
    ApiError { message: String },

    #[error("Roster service sent a response that could not be read: {message}")]
    #[diagnostic(
        code(pupbowl::decode),
        help("Re-run with -vv to log the request, and check the cohort id.")
    )]
    Decode { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(pupbowl::validation))]
    Validation { field: String, reason: String },

    #[error("Player rejected by the roster service (HTTP {status}): {reason}")]
    #[diagnostic(
        code(pupbowl::rejected),
        help("Check the name, breed, status, and image URL and try again.")
    )]
    Rejected { status: u16, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(pupbowl::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: pupbowl config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(pupbowl::config),
        help("Config file: {path}")
    )]
    Config { message: String, path: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(pupbowl::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {message}")]
    #[diagnostic(code(pupbowl::serialization))]
    Serialization { message: String },
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::Rejected { .. } => exit_code::VALIDATION,
            Self::ProfileNotFound { .. } | Self::NonInteractiveRequiresYes { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Transport { url, reason } => CliError::ConnectionFailed { url, reason },

            CoreError::NotFound { id } => CliError::NotFound { identifier: id },

            CoreError::Http { status, message } => CliError::ApiError {
                message: message.map_or_else(
                    || format!("HTTP {status}"),
                    |m| format!("HTTP {status}: {m}"),
                ),
            },

            CoreError::Api { message } => CliError::ApiError { message },

            CoreError::Decode { message } => CliError::Decode { message },

            CoreError::Validation {
                message,
                status: Some(status),
            } => CliError::Rejected {
                status,
                reason: message,
            },

            CoreError::Validation {
                message,
                status: None,
            } => CliError::Validation {
                field: "player".into(),
                reason: message,
            },

            CoreError::Config { message } => CliError::Validation {
                field: "roster".into(),
                reason: message,
            },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::UnknownProfile { name, available } => {
                CliError::ProfileNotFound { name, available }
            }
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
                path: pupbowl_config::config_path().display().to_string(),
            },
        }
    }
}
