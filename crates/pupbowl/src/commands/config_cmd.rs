//! Config subcommand handlers.

use clap::ValueEnum;
use dialoguer::Input;
use serde::Serialize;

use pupbowl_config::{Config, Profile};
use pupbowl_core::{DEFAULT_COHORT, DEFAULT_ORIGIN, RosterConfig};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

// ── Helpers ─────────────────────────────────────────────────────────

/// The settings a roster command would run with right now.
#[derive(Serialize)]
struct ResolvedConfig {
    path: String,
    profile: String,
    origin: String,
    cohort: String,
    collection: String,
    timeout_secs: Option<u64>,
    insecure: bool,
    output: String,
}

fn detail(r: &ResolvedConfig) -> String {
    [
        format!("Config file: {}", r.path),
        format!("Profile:     {}", r.profile),
        format!("Origin:      {}", r.origin),
        format!("Cohort:      {}", r.cohort),
        format!("Collection:  {}", r.collection),
        format!(
            "Timeout:     {}",
            r.timeout_secs.map_or_else(|| "none".into(), |t| format!("{t}s"))
        ),
        format!("Insecure:    {}", r.insecure),
        format!("Output:      {}", r.output),
    ]
    .join("\n")
}

fn save_config(cfg: &Config) -> Result<(), CliError> {
    config::save_config(cfg)?;
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("pupbowl configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            let origin: String = Input::new()
                .with_prompt("Roster service origin")
                .default(DEFAULT_ORIGIN.into())
                .interact_text()
                .map_err(prompt_err)?;

            let cohort: String = Input::new()
                .with_prompt("Cohort id")
                .default(DEFAULT_COHORT.into())
                .interact_text()
                .map_err(prompt_err)?;

            // Reject what would fail later, before anything is written.
            RosterConfig::parse(&origin, &cohort).map_err(|e| CliError::Validation {
                field: "profile".into(),
                reason: e.to_string(),
            })?;

            let mut cfg = config::load_config_or_default();
            cfg.profiles.insert(
                profile_name.clone(),
                Profile {
                    origin,
                    cohort: cohort.trim().to_owned(),
                    ..Profile::default()
                },
            );
            cfg.default_profile = Some(profile_name.clone());
            save_config(&cfg)?;

            eprintln!("\nConfiguration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: pupbowl list");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default();
            let settings = config::resolve(global, &cfg)?;
            let roster = &settings.roster;
            let collection = roster.connect()?.collection_url().to_string();

            let resolved = ResolvedConfig {
                path: config::config_path().display().to_string(),
                profile: settings.profile_name.clone(),
                origin: roster.origin.to_string(),
                cohort: roster.cohort.clone(),
                collection,
                timeout_secs: roster.timeout.map(|t| t.as_secs()),
                insecure: roster.tls == pupbowl_core::TlsMode::DangerAcceptInvalid,
                output: settings
                    .output
                    .to_possible_value()
                    .map(|v| v.get_name().to_owned())
                    .unwrap_or_default(),
            };
            let out = output::render_single(settings.output, &resolved, detail, |r| {
                r.collection.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        // ── Profiles ────────────────────────────────────────────────
        ConfigCommand::Profiles => {
            let cfg = config::load_config_or_default();
            let active = config::active_profile_name(global, &cfg);
            if cfg.profiles.is_empty() {
                eprintln!("No profiles configured. Run: pupbowl config init");
            } else {
                for name in cfg.profiles.keys() {
                    let marker = if *name == active { " *" } else { "" };
                    println!("{name}{marker}");
                }
            }
            Ok(())
        }

        // ── Use <name> ─────────────────────────────────────────────
        ConfigCommand::Use { name } => {
            let mut cfg = config::load_config_or_default();

            // Fails with the list of available profiles when unknown.
            cfg.resolve_profile(Some(&name))?;

            cfg.default_profile = Some(name.clone());
            save_config(&cfg)?;
            eprintln!("Default profile set to '{name}'");
            Ok(())
        }
    }
}
