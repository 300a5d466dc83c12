// ── API-to-domain type conversions ──
//
// Bridges raw `pupbowl_api` wire records into `pupbowl_core::model` types.
// Blank strings become `None`, timestamps are parsed into `DateTime<Utc>`,
// and status text is classified.

use chrono::{DateTime, Utc};
use pupbowl_api::ApiPlayer;

use crate::model::{Player, PlayerStatus};

// ── Helpers ────────────────────────────────────────────────────────

/// Drop empty or whitespace-only strings.
fn non_blank(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.trim().is_empty())
}

/// Parse an ISO-8601 timestamp, silently dropping unparseable values.
fn parse_datetime(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

// ── Player ─────────────────────────────────────────────────────────

impl From<ApiPlayer> for Player {
    fn from(p: ApiPlayer) -> Self {
        Self {
            created_at: parse_datetime(p.created_at.as_deref()),
            updated_at: parse_datetime(p.updated_at.as_deref()),
            status: non_blank(p.status).map(|s| PlayerStatus::parse(&s)),
            breed: non_blank(p.breed),
            image_url: non_blank(p.image_url),
            id: p.id,
            name: p.name,
            team_id: p.team_id,
            cohort_id: p.cohort_id,
        }
    }
}
