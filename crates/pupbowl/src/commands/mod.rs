//! Command dispatch: bridges CLI args -> synchronizer calls -> output formatting.

pub mod config_cmd;
pub mod players;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::config::Settings;
use crate::error::CliError;

use self::players::Roster;

/// Dispatch a roster-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    roster: &mut Roster,
    settings: &Settings,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::List => players::list(roster, settings, global).await,
        Command::Show { id } => players::show(roster, &id, settings, global).await,
        Command::Add(args) => players::add(roster, args, global).await,
        Command::Remove { id } => players::remove(roster, &id, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
