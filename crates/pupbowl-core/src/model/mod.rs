// ── Roster domain model ──
//
// Canonical representations of roster entities. Consumers (CLI/TUI)
// depend on these, never on the raw `pupbowl_api` wire types.

pub mod player;

pub use player::{Player, PlayerStatus};

// Identity is owned by the service; the API crate's id type is canonical.
pub use pupbowl_api::PlayerId;
