// ── Player domain types ──

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use strum::EnumString;

use super::PlayerId;

/// Roster status. The service stores free text; `field` and `bench` are
/// the values it uses in practice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlayerStatus {
    Field,
    Bench,
    /// Any other value, preserved verbatim.
    #[strum(default)]
    Other(String),
}

impl PlayerStatus {
    /// Parse a raw status string. Never fails: unknown values land in `Other`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        trimmed
            .parse()
            .unwrap_or_else(|_| Self::Other(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Field => "field",
            Self::Bench => "bench",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PlayerStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The canonical Player type.
///
/// Identity and timestamps are assigned by the service; nothing in this
/// workspace mints ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub breed: Option<String>,
    pub status: Option<PlayerStatus>,
    pub image_url: Option<String>,

    // Server bookkeeping
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,

    // Carried through when present
    pub team_id: Option<u64>,
    pub cohort_id: Option<u64>,
}

impl Player {
    /// Minimal player with only the required fields set.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            breed: None,
            status: None,
            image_url: None,
            created_at: None,
            updated_at: None,
            team_id: None,
            cohort_id: None,
        }
    }
}
