//! Shared configuration for the pupbowl CLI and TUI.
//!
//! TOML profiles naming an origin and cohort, layered with environment
//! overrides, and translation to `pupbowl_core::RosterConfig`. Both
//! binaries depend on this crate; the CLI adds flag-aware wrappers on top.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use pupbowl_core::{DEFAULT_COHORT, DEFAULT_ORIGIN, RosterConfig, TlsMode};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found (available: {available})")]
    UnknownProfile { name: String, available: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named roster profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Request timeout in seconds. Absent means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: None,
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

/// A named roster profile: one cohort on one service origin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// Service origin (e.g., "https://fsa-puppy-bowl.herokuapp.com").
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Cohort identifier scoping the players collection.
    #[serde(default = "default_cohort")]
    pub cohort: String,

    /// Override timeout (seconds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    /// Accept invalid TLS certificates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            cohort: default_cohort(),
            timeout: None,
            insecure: None,
        }
    }
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.into()
}
fn default_cohort() -> String {
    DEFAULT_COHORT.into()
}

impl Config {
    /// Name of the profile to use when none is requested explicitly.
    pub fn default_profile_name(&self) -> &str {
        self.default_profile.as_deref().unwrap_or("default")
    }

    /// Resolve a profile by name, or the default profile when `name` is `None`.
    ///
    /// An explicitly named profile must exist. The default profile falls
    /// back to built-in settings when the file does not define it.
    pub fn resolve_profile(&self, name: Option<&str>) -> Result<(String, Profile), ConfigError> {
        match name {
            Some(name) => self
                .profiles
                .get(name)
                .cloned()
                .map(|p| (name.to_owned(), p))
                .ok_or_else(|| ConfigError::UnknownProfile {
                    name: name.to_owned(),
                    available: self.profile_names(),
                }),
            None => {
                let name = self.default_profile_name();
                let profile = self.profiles.get(name).cloned().unwrap_or_default();
                Ok((name.to_owned(), profile))
            }
        }
    }

    fn profile_names(&self) -> String {
        if self.profiles.is_empty() {
            "none".into()
        } else {
            self.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "pupbowl", "pupbowl").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("pupbowl");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load Config from `path`, layered over defaults and under `PUPBOWL_*` env.
///
/// A missing file is not an error. Nested keys use a double underscore,
/// e.g. `PUPBOWL_DEFAULTS__OUTPUT=json`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("PUPBOWL_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist or is invalid.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

/// Serialize config to TOML and write it to `path`, creating parent dirs.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Profile → RosterConfig ──────────────────────────────────────────

/// Build a `RosterConfig` from a profile, with `defaults` filling gaps.
///
/// The profile's timeout wins over the global default; neither set means
/// requests never time out.
pub fn profile_to_roster_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<RosterConfig, ConfigError> {
    let mut cfg = RosterConfig::parse(&profile.origin, &profile.cohort).map_err(|e| {
        ConfigError::Validation {
            field: "profile".into(),
            reason: e.to_string(),
        }
    })?;

    cfg.timeout = profile
        .timeout
        .or(defaults.timeout)
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    if profile.insecure.unwrap_or(false) {
        cfg.tls = TlsMode::DangerAcceptInvalid;
    }

    Ok(cfg)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Config {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "default".into(),
            Profile {
                cohort: "2308-ACC-ET-WEB-PT-A".into(),
                ..Profile::default()
            },
        );
        cfg.profiles.insert(
            "local".into(),
            Profile {
                origin: "http://localhost:8080".into(),
                cohort: "dev".into(),
                timeout: Some(5),
                insecure: Some(true),
            },
        );
        cfg
    }

    #[test]
    fn save_then_load_preserves_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = sample();
        save_config_to(&cfg, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();

        assert_eq!(loaded.profiles, cfg.profiles);
        assert_eq!(loaded.default_profile_name(), "default");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.profiles.is_empty());
        assert_eq!(loaded.defaults.output, "table");

        let (name, profile) = loaded.resolve_profile(None).unwrap();
        assert_eq!(name, "default");
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn partial_profile_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "default_profile = \"mine\"\n\n[profiles.mine]\ncohort = \"2401-FTB\"\n",
        )
        .unwrap();

        let loaded = load_config_from(&path).unwrap();
        let (name, profile) = loaded.resolve_profile(None).unwrap();
        assert_eq!(name, "mine");
        assert_eq!(profile.cohort, "2401-FTB");
        assert_eq!(profile.origin, DEFAULT_ORIGIN);
    }

    #[test]
    fn unknown_named_profile_is_an_error() {
        let err = sample().resolve_profile(Some("prod")).unwrap_err();
        assert!(err.to_string().contains("default, local"));
    }

    #[test]
    fn roster_config_from_profile() {
        let cfg = sample();
        let local = &cfg.profiles["local"];
        let roster = profile_to_roster_config(local, &cfg.defaults).unwrap();
        assert_eq!(roster.origin.as_str(), "http://localhost:8080/");
        assert_eq!(roster.cohort, "dev");
        assert_eq!(roster.timeout, Some(Duration::from_secs(5)));
        assert_eq!(roster.tls, TlsMode::DangerAcceptInvalid);

        let default = &cfg.profiles["default"];
        let roster = profile_to_roster_config(default, &cfg.defaults).unwrap();
        assert!(roster.timeout.is_none());
        assert_eq!(roster.tls, TlsMode::System);
    }

    #[test]
    fn invalid_origin_is_a_validation_error() {
        let profile = Profile {
            origin: "::nope::".into(),
            ..Profile::default()
        };
        let err = profile_to_roster_config(&profile, &Defaults::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { .. }));
    }
}
