//! All possible UI actions. Actions are the sole mechanism for state mutation.

use std::fmt;

use pupbowl_core::{DetailPanel, PlayerForm, PlayerId, RosterItem};

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A toast notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Success,
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Error,
        }
    }

    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            level: NotificationLevel::Info,
        }
    }
}

/// Work for the bridge task, which owns the synchronizer.
///
/// Every variant carries plain values captured when the user acted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Refresh,
    ShowDetails(PlayerId),
    Delete(PlayerId),
    Create(PlayerForm),
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Refresh => f.write_str("refresh"),
            Self::ShowDetails(id) => write!(f, "details {id}"),
            Self::Delete(id) => write!(f, "delete {id}"),
            Self::Create(form) => write!(f, "create {}", form.name.trim()),
        }
    }
}

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── Roster updates (from the bridge) ──────────────────────────
    RosterRendered(Vec<RosterItem>),
    DetailsChanged(PlayerId, DetailPanel),
    FormReset,
    IntentFinished,

    // ── User intents (to the bridge) ──────────────────────────────
    Request(Intent),

    // ── Overlays ──────────────────────────────────────────────────
    ToggleHelp,
    Notify(Notification),
}
