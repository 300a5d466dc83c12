// ── Core error types ──
//
// User-facing errors from pupbowl-core. Front ends never match on raw
// reqwest errors or envelope shapes; the `From<pupbowl_api::Error>` impl
// folds transport-layer failures into the roster's error taxonomy.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot reach roster service at {url}: {reason}")]
    Transport { url: String, reason: String },

    // ── Remote errors ────────────────────────────────────────────────
    #[error("Roster service returned HTTP {status}{}", message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Http { status: u16, message: Option<String> },

    #[error("Roster service reported an error: {message}")]
    Api { message: String },

    #[error("Player not found: {id}")]
    NotFound { id: String },

    #[error("Malformed response from roster service: {message}")]
    Decode { message: String },

    // ── Input errors ─────────────────────────────────────────────────
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        /// HTTP status when the service rejected the draft; `None` for
        /// local checks that never reached the network.
        status: Option<u16>,
    },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// Local validation failure (never reached the network).
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            status: None,
        }
    }

    /// Short label for the failure class, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Http { .. } => "http",
            Self::Api { .. } => "api",
            Self::NotFound { .. } => "not_found",
            Self::Decode { .. } => "decode",
            Self::Validation { .. } => "validation",
            Self::Config { .. } => "config",
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<pupbowl_api::Error> for CoreError {
    fn from(err: pupbowl_api::Error) -> Self {
        use pupbowl_api::Error as Api;

        match err {
            Api::Transport(ref e) => {
                let url = e
                    .url()
                    .map_or_else(|| "<unknown>".into(), ToString::to_string);
                if let Some(status) = e.status() {
                    CoreError::Http {
                        status: status.as_u16(),
                        message: None,
                    }
                } else if e.is_decode() {
                    CoreError::Decode {
                        message: e.to_string(),
                    }
                } else if e.is_timeout() {
                    CoreError::Transport {
                        url,
                        reason: "request timed out".into(),
                    }
                } else {
                    CoreError::Transport {
                        url,
                        reason: e.to_string(),
                    }
                }
            }
            Api::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            Api::Tls(reason) => CoreError::Transport {
                url: String::new(),
                reason: format!("TLS error: {reason}"),
            },
            Api::Http { status, message } => CoreError::Http { status, message },
            Api::NotFound { id, .. } => CoreError::NotFound { id },
            Api::Rejected { status, message } => CoreError::Validation {
                message,
                status: Some(status),
            },
            Api::Api { message, .. } => CoreError::Api { message },
            Api::Deserialization { message, body: _ } => CoreError::Decode { message },
        }
    }
}
