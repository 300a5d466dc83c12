// ── Add-player form ──
//
// Raw field values as typed by the user. `to_draft` is the single place
// where form input becomes a `NewPlayer`.

use pupbowl_api::NewPlayer;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerForm {
    pub name: String,
    pub breed: String,
    pub status: String,
    pub image_url: String,
    /// Accepted for form compatibility; identity is always assigned by
    /// the service, so any value here is dropped.
    pub player_id: Option<String>,
}

impl PlayerForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Validate and convert into a draft for `POST /players`.
    ///
    /// The only local rule is a non-empty trimmed name. Blank optional
    /// fields are omitted from the draft.
    pub fn to_draft(&self) -> Result<NewPlayer, CoreError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoreError::validation("player name must not be empty"));
        }

        if let Some(id) = self.player_id.as_deref().filter(|s| !s.trim().is_empty()) {
            warn!(player_id = id, "ignoring client-supplied player id");
        }

        Ok(NewPlayer {
            name: name.to_owned(),
            breed: optional(&self.breed),
            status: optional(&self.status),
            image_url: optional(&self.image_url),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
