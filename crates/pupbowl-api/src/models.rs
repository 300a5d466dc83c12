// Players API wire types
//
// Models for the players collection JSON API. Every response is wrapped in
// the `ApiResponse<T>` envelope. Optional fields use `#[serde(default)]`
// because the service omits them freely for drafts created without them.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

// ── Player identifier ────────────────────────────────────────────────

/// Opaque player identifier assigned by the service.
///
/// The service hands out integers, but ids round-trip through text
/// (CLI arguments, config, log lines). A string that parses as an integer
/// is normalized to `Numeric` so `"7"` and `7` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "RawPlayerId")]
pub enum PlayerId {
    Numeric(u64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPlayerId {
    Numeric(u64),
    Text(String),
}

impl From<RawPlayerId> for PlayerId {
    fn from(raw: RawPlayerId) -> Self {
        match raw {
            RawPlayerId::Numeric(n) => Self::Numeric(n),
            RawPlayerId::Text(s) => Self::from(s),
        }
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        let trimmed = s.trim();
        match trimmed.parse::<u64>() {
            Ok(n) => Self::Numeric(n),
            Err(_) => Self::Text(trimmed.to_owned()),
        }
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl From<u64> for PlayerId {
    fn from(n: u64) -> Self {
        Self::Numeric(n)
    }
}

impl FromStr for PlayerId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for PlayerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Numeric(n) => serializer.serialize_u64(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

// ── Response envelope ────────────────────────────────────────────────

/// Players API response envelope.
///
/// ```json
/// { "success": true, "error": null, "data": { ... } }
/// ```
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// Error payload inside the envelope. The service sends either an
/// object with `name`/`message` or a plain string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiErrorBody {
    Detailed {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
    Text(String),
}

impl ApiErrorBody {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Detailed { name, .. } => name.as_deref(),
            Self::Text(_) => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Detailed { message, .. } => message.as_deref(),
            Self::Text(s) => Some(s),
        }
    }
}

/// `data` payload of the list endpoint.
#[derive(Debug, Deserialize)]
pub struct PlayersData {
    #[serde(default)]
    pub players: Vec<ApiPlayer>,
}

/// `data` payload of the single-player endpoints.
///
/// Some deployments return the player record directly under `data`,
/// others nest it under `data.player` (or `data.newPlayer` after a create).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PlayerData {
    Bare(ApiPlayer),
    Wrapped {
        #[serde(default, alias = "newPlayer")]
        player: Option<ApiPlayer>,
    },
}

impl PlayerData {
    pub fn into_player(self) -> Option<ApiPlayer> {
        match self {
            Self::Bare(p) => Some(p),
            Self::Wrapped { player } => player,
        }
    }
}

// ── Player ───────────────────────────────────────────────────────────

/// Player record as stored by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPlayer {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub breed: Option<String>,
    /// `"field"` or `"bench"` in practice; unknown values pass through.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub team_id: Option<u64>,
    #[serde(default)]
    pub cohort_id: Option<u64>,
}

/// Draft sent to `POST /players`. The service assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// The service removed the player.
    Removed,
    /// The service had no such player; the roster is already in the
    /// requested state.
    AlreadyAbsent,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn player_id_normalizes_numeric_strings() {
        assert_eq!(PlayerId::from("42"), PlayerId::Numeric(42));
        assert_eq!(PlayerId::from("rex"), PlayerId::Text("rex".into()));

        let from_str: PlayerId = serde_json::from_value(json!("42")).unwrap();
        let from_num: PlayerId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(from_str, from_num);
        assert_eq!(serde_json::to_value(&from_num).unwrap(), json!(42));
    }

    #[test]
    fn player_id_trims_text_ids() {
        assert_eq!(PlayerId::from(" rex "), PlayerId::from("rex"));
        assert_eq!(PlayerId::from(" 7"), PlayerId::Numeric(7));
    }

    #[test]
    fn player_decodes_with_missing_optionals() {
        let p: ApiPlayer = serde_json::from_value(json!({
            "id": 3,
            "name": "Biscuit",
            "status": "bench",
            "imageUrl": "https://example.com/b.png",
            "teamId": null
        }))
        .unwrap();
        assert_eq!(p.id, PlayerId::Numeric(3));
        assert_eq!(p.breed, None);
        assert_eq!(p.image_url.as_deref(), Some("https://example.com/b.png"));
        assert_eq!(p.team_id, None);
    }

    #[test]
    fn single_player_data_accepts_both_shapes() {
        let bare: PlayerData =
            serde_json::from_value(json!({ "id": 1, "name": "Ace" })).unwrap();
        assert_eq!(bare.into_player().unwrap().name, "Ace");

        let wrapped: PlayerData =
            serde_json::from_value(json!({ "player": { "id": 1, "name": "Ace" } })).unwrap();
        assert_eq!(wrapped.into_player().unwrap().name, "Ace");

        let empty: PlayerData = serde_json::from_value(json!({ "player": null })).unwrap();
        assert!(empty.into_player().is_none());
    }

    #[test]
    fn new_player_skips_absent_fields() {
        let draft = NewPlayer {
            name: "Nova".into(),
            image_url: Some("https://example.com/n.png".into()),
            ..NewPlayer::default()
        };
        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({ "name": "Nova", "imageUrl": "https://example.com/n.png" })
        );
    }

    #[test]
    fn error_body_variants() {
        let detailed: ApiErrorBody =
            serde_json::from_value(json!({ "name": "NotFoundError", "message": "nope" }))
                .unwrap();
        assert_eq!(detailed.name(), Some("NotFoundError"));
        assert_eq!(detailed.message(), Some("nope"));

        let text: ApiErrorBody = serde_json::from_value(json!("bad input")).unwrap();
        assert_eq!(text.name(), None);
        assert_eq!(text.message(), Some("bad input"));
    }
}
