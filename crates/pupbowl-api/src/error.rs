use thiserror::Error;

/// Top-level error type for the `pupbowl-api` crate.
///
/// Covers every failure mode of the players collection API: transport,
/// HTTP status, envelope-level failures, and body decoding.
/// `pupbowl-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing or construction error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup error while building the HTTP client.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── HTTP ────────────────────────────────────────────────────────
    /// Non-2xx response from the collection endpoint.
    #[error("HTTP {status}{}", message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Http { status: u16, message: Option<String> },

    /// The service reports that the requested player does not exist.
    #[error("Player {id} not found (HTTP {status})")]
    NotFound { id: String, status: u16 },

    /// The service rejected a draft (HTTP 400 / 422).
    #[error("Player rejected by service (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    // ── Envelope ────────────────────────────────────────────────────
    /// A 2xx response whose envelope carried `success: false`.
    #[error("API error: {message}")]
    Api {
        name: Option<String>,
        message: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } | Self::Http { status: 404, .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { name, .. } => name.as_deref() == Some("NotFoundError"),
            _ => false,
        }
    }

    /// Returns `true` if this is a transient error worth a fresh attempt.
    ///
    /// Nothing in this crate retries; callers surface the hint to the user.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. }
            | Self::NotFound { status, .. }
            | Self::Rejected { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
