// pupbowl-api: Async Rust client for the Puppy Bowl players collection API

pub mod client;
pub mod error;
pub mod models;
mod players;
pub mod transport;

pub use client::RosterClient;
pub use error::Error;
pub use models::{ApiPlayer, Deletion, NewPlayer, PlayerId};
pub use transport::{TlsMode, TransportConfig};
