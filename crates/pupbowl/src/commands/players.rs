//! Player command handlers.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::Tabled;

use pupbowl_core::{
    Deletion, Player, PlayerDetails, PlayerForm, PlayerId, RosterClient, Synchronizer,
};

use crate::cli::{AddArgs, GlobalOpts};
use crate::config::Settings;
use crate::error::CliError;
use crate::output;
use crate::view::CaptureView;

use super::util;

pub type Roster = Synchronizer<RosterClient, CaptureView>;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PlayerRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Breed")]
    breed: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Added")]
    added: String,
}

impl PlayerRow {
    fn new(p: &Player, color: bool) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name.clone(),
            breed: util::or_dash(p.breed.as_deref()).to_owned(),
            status: output::status_label(p.status.as_ref(), color),
            added: p
                .created_at
                .map_or_else(|| "-".into(), |t| t.format("%Y-%m-%d").to_string()),
        }
    }
}

/// A fetched player's details, keyed by the id that was asked for.
#[derive(Serialize)]
struct PlayerRecord<'a> {
    id: &'a PlayerId,
    #[serde(flatten)]
    details: &'a PlayerDetails,
}

fn timestamp(t: Option<DateTime<Utc>>) -> String {
    t.map_or_else(|| "-".into(), |t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

fn detail(record: &PlayerRecord<'_>, color: bool) -> String {
    let d = record.details;
    [
        format!("ID:      {}", record.id),
        format!("Name:    {}", d.name),
        format!("Breed:   {}", util::or_dash(d.breed.as_deref())),
        format!("Status:  {}", output::status_label(d.status.as_ref(), color)),
        format!("Image:   {}", util::or_dash(d.image_url.as_deref())),
        format!("Created: {}", timestamp(d.created_at)),
        format!("Updated: {}", timestamp(d.updated_at)),
    ]
    .join("\n")
}

// ── Handlers ────────────────────────────────────────────────────────

pub async fn list(
    roster: &mut Roster,
    settings: &Settings,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    roster.refresh().await?;
    tracing::debug!(rendered = roster.view().items().len(), "roster listed");

    let color = output::should_color(settings.color);
    let out = output::render_list(
        settings.output,
        roster.state().players(),
        |p| PlayerRow::new(p, color),
        |p| p.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn show(
    roster: &mut Roster,
    id: &str,
    settings: &Settings,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let id = PlayerId::from(id);
    let panel = roster.show_details(&id).await?;
    let Some(details) = panel.details() else {
        // A fresh synchronizer starts collapsed, so a fetch always expands.
        return Err(CliError::NotFound {
            identifier: id.to_string(),
        });
    };

    let color = output::should_color(settings.color);
    let record = PlayerRecord {
        id: &id,
        details,
    };
    let out = output::render_single(
        settings.output,
        &record,
        |r| detail(r, color),
        |r| r.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn add(roster: &mut Roster, args: AddArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let form = PlayerForm {
        name: args.name,
        breed: args.breed.unwrap_or_default(),
        status: args.status.unwrap_or_default(),
        image_url: args.image_url.unwrap_or_default(),
        player_id: args.player_id,
    };

    let created = roster.handle_create(&form).await;

    // A reset form means the service accepted the player; a failure after
    // that point came from the follow-up refresh.
    if !roster.view().form_reset() {
        return created.map_err(CliError::from);
    }
    if !global.quiet {
        eprintln!("Player '{}' added", form.name.trim());
        if let Err(e) = created {
            eprintln!("Warning: could not reload the roster: {e}");
        }
    }
    Ok(())
}

pub async fn remove(roster: &mut Roster, id: &str, global: &GlobalOpts) -> Result<(), CliError> {
    if !util::confirm(
        &format!("Remove player '{id}' from the roster?"),
        global.yes,
        "remove",
    )? {
        return Ok(());
    }

    let id = PlayerId::from(id);
    let outcome = roster.handle_delete(&id).await?;
    if !global.quiet {
        match outcome {
            Deletion::Removed => eprintln!("Player '{id}' removed"),
            Deletion::AlreadyAbsent => eprintln!("Player '{id}' was already absent"),
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pupbowl_core::PlayerStatus;

    #[test]
    fn row_fills_blanks_with_dashes() {
        let mut p = Player::new(3_u64, "Biscuit");
        p.status = Some(PlayerStatus::Field);
        let row = PlayerRow::new(&p, false);
        assert_eq!(row.id, "3");
        assert_eq!(row.breed, "-");
        assert_eq!(row.status, "field");
        assert_eq!(row.added, "-");
    }

    #[test]
    fn record_flattens_details() {
        let mut p = Player::new(5_u64, "Rex");
        p.breed = Some("Lab".into());
        let details = PlayerDetails::from(&p);
        let record = PlayerRecord {
            id: &p.id,
            details: &details,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["name"], "Rex");
        assert_eq!(json["breed"], "Lab");

        let text = detail(&record, false);
        assert!(text.contains("Breed:   Lab"));
        assert!(text.contains("Image:   -"));
    }
}
