// pupbowl-core: Roster state and view synchronization between pupbowl-api and consumers (CLI/TUI).

pub mod config;
pub mod convert;
pub mod detail;
pub mod error;
pub mod form;
pub mod model;
pub mod remote;
pub mod state;
pub mod synchronizer;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_COHORT, DEFAULT_ORIGIN, RosterConfig};
pub use detail::{DetailPanel, PlayerDetails};
pub use error::CoreError;
pub use form::PlayerForm;
pub use model::{Player, PlayerId, PlayerStatus};
pub use remote::PlayerRemote;
pub use state::RosterState;
pub use synchronizer::Synchronizer;
pub use view::{ItemAction, RosterItem, RosterView};

pub use pupbowl_api::{Deletion, NewPlayer, RosterClient, TlsMode};
