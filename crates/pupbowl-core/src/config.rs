// ── Runtime roster configuration ──
//
// Describes *where* the players collection lives and how to reach it.
// Never touches disk: the CLI/TUI resolve a profile and hand this in.

use std::time::Duration;

use pupbowl_api::{RosterClient, TlsMode, TransportConfig};
use url::Url;

use crate::error::CoreError;

/// Service origin used when no profile or flag names one.
pub const DEFAULT_ORIGIN: &str = "https://fsa-puppy-bowl.herokuapp.com";

/// Cohort used when no profile or flag names one.
pub const DEFAULT_COHORT: &str = "2308-ACC-ET-WEB-PT-A";

/// Connection settings for one cohort's players collection.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub origin: Url,
    pub cohort: String,
    /// Per-request timeout. `None` means requests may hang indefinitely.
    pub timeout: Option<Duration>,
    pub tls: TlsMode,
}

impl RosterConfig {
    pub fn new(origin: Url, cohort: impl Into<String>) -> Self {
        Self {
            origin,
            cohort: cohort.into(),
            timeout: None,
            tls: TlsMode::System,
        }
    }

    /// Parse `origin` and build a config, rejecting empty cohorts.
    pub fn parse(origin: &str, cohort: &str) -> Result<Self, CoreError> {
        let origin = Url::parse(origin).map_err(|e| CoreError::Config {
            message: format!("invalid origin '{origin}': {e}"),
        })?;
        if !matches!(origin.scheme(), "http" | "https") {
            return Err(CoreError::Config {
                message: format!("origin must be http or https, got '{}'", origin.scheme()),
            });
        }
        let cohort = cohort.trim();
        if cohort.is_empty() {
            return Err(CoreError::Config {
                message: "cohort must not be empty".into(),
            });
        }
        Ok(Self::new(origin, cohort))
    }

    /// Transport settings derived from this config.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: self.tls,
            timeout: self.timeout,
        }
    }

    /// Build a `RosterClient` for this cohort.
    pub fn connect(&self) -> Result<RosterClient, CoreError> {
        Ok(RosterClient::new(&self.origin, &self.cohort, &self.transport())?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cfg = RosterConfig::parse(DEFAULT_ORIGIN, DEFAULT_COHORT).unwrap();
        assert_eq!(cfg.cohort, DEFAULT_COHORT);
        assert!(cfg.timeout.is_none());
        assert_eq!(cfg.tls, TlsMode::System);

        let client = cfg.connect().unwrap();
        assert_eq!(
            client.collection_url().as_str(),
            "https://fsa-puppy-bowl.herokuapp.com/api/2308-ACC-ET-WEB-PT-A/players"
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            RosterConfig::parse("not a url", "c").unwrap_err(),
            CoreError::Config { .. }
        ));
        assert!(RosterConfig::parse("ftp://host", "c").is_err());
        assert!(RosterConfig::parse("https://host", "   ").is_err());
    }
}
