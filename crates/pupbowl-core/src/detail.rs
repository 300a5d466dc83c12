// ── Per-item detail panel ──
//
// Collapsed → (successful fetch) → Expanded → (toggle) → Collapsed.
// A failed fetch leaves the panel where it was.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{Player, PlayerStatus};

/// Fields revealed when an item is expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetails {
    pub name: String,
    pub breed: Option<String>,
    pub status: Option<PlayerStatus>,
    pub image_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Player> for PlayerDetails {
    fn from(p: &Player) -> Self {
        Self {
            name: p.name.clone(),
            breed: p.breed.clone(),
            status: p.status.clone(),
            image_url: p.image_url.clone(),
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailPanel {
    #[default]
    Collapsed,
    Expanded(PlayerDetails),
}

impl DetailPanel {
    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Expanded(_))
    }

    pub fn details(&self) -> Option<&PlayerDetails> {
        match self {
            Self::Expanded(d) => Some(d),
            Self::Collapsed => None,
        }
    }
}
