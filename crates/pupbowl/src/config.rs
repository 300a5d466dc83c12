//! CLI-side configuration: overlays global flags on a resolved profile and
//! translates the result into `pupbowl_core::RosterConfig`.
//!
//! Core never sees these types; it receives a pre-built `RosterConfig`.

use clap::ValueEnum;

use pupbowl_config::{Config, Profile, profile_to_roster_config};
use pupbowl_core::RosterConfig;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

pub use pupbowl_config::{config_path, load_config_or_default, save_config};

/// Everything a roster command needs, resolved from flags > env > profile.
#[derive(Debug)]
pub struct Settings {
    pub profile_name: String,
    pub roster: RosterConfig,
    pub output: OutputFormat,
    pub color: ColorMode,
}

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .unwrap_or_else(|| config.default_profile_name().to_owned())
}

/// Output format: flag/env first, then `defaults.output`, then table.
pub fn output_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    global
        .output
        .or_else(|| OutputFormat::from_str(&config.defaults.output, true).ok())
        .unwrap_or(OutputFormat::Table)
}

/// Color mode: flag first, then `defaults.color`, then auto.
pub fn color_mode(global: &GlobalOpts, config: &Config) -> ColorMode {
    global
        .color
        .or_else(|| ColorMode::from_str(&config.defaults.color, true).ok())
        .unwrap_or(ColorMode::Auto)
}

/// Translate the active profile + global flags into `Settings`.
///
/// This is the single boundary where CLI config types cross into core types.
pub fn resolve(global: &GlobalOpts, config: &Config) -> Result<Settings, CliError> {
    let (profile_name, profile) = config.resolve_profile(global.profile.as_deref())?;
    let roster = roster_config(global, &profile, config)?;

    tracing::debug!(
        profile = %profile_name,
        origin = %roster.origin,
        cohort = %roster.cohort,
        "resolved roster settings"
    );

    Ok(Settings {
        profile_name,
        roster,
        output: output_format(global, config),
        color: color_mode(global, config),
    })
}

fn roster_config(
    global: &GlobalOpts,
    profile: &Profile,
    config: &Config,
) -> Result<RosterConfig, CliError> {
    // Flags (and their env vars) win over the profile field by field.
    let mut overlay = profile.clone();
    if let Some(ref origin) = global.origin {
        overlay.origin.clone_from(origin);
    }
    if let Some(ref cohort) = global.cohort {
        overlay.cohort.clone_from(cohort);
    }
    if global.timeout.is_some() {
        overlay.timeout = global.timeout;
    }
    if global.insecure {
        overlay.insecure = Some(true);
    }

    let roster = profile_to_roster_config(&overlay, &config.defaults)?;
    Ok(roster)
}
