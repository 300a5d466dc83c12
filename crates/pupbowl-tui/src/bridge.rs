//! Roster bridge: runs the synchronizer off the UI loop.
//!
//! The bridge task owns the [`Synchronizer`] and applies [`Intent`]s one at
//! a time, in arrival order. Its view forwards every render as an
//! [`Action`] through the TUI's action channel, so the UI loop never
//! awaits the network.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use pupbowl_core::{
    CoreError, Deletion, DetailPanel, PlayerId, PlayerRemote, RosterItem, RosterView,
    Synchronizer,
};

use crate::action::{Action, Intent, Notification};

/// `RosterView` that turns view updates into actions.
pub struct ChannelView {
    tx: mpsc::UnboundedSender<Action>,
}

impl ChannelView {
    pub fn new(tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { tx }
    }
}

impl RosterView for ChannelView {
    fn render(&mut self, items: &[RosterItem]) {
        let _ = self.tx.send(Action::RosterRendered(items.to_vec()));
    }

    fn details_changed(&mut self, id: &PlayerId, panel: &DetailPanel) {
        let _ = self
            .tx
            .send(Action::DetailsChanged(id.clone(), panel.clone()));
    }

    fn reset_form(&mut self) {
        let _ = self.tx.send(Action::FormReset);
    }
}

/// Run the bridge until cancelled or the intent channel closes.
///
/// An initial refresh runs before the first intent is read.
pub async fn run_bridge<R>(
    mut roster: Synchronizer<R, ChannelView>,
    mut intents: mpsc::UnboundedReceiver<Intent>,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
) where
    R: PlayerRemote,
{
    if let Some(note) = apply(&mut roster, Intent::Refresh).await {
        let _ = action_tx.send(Action::Notify(note));
    }
    let _ = action_tx.send(Action::IntentFinished);

    loop {
        let intent = tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            next = intents.recv() => match next {
                Some(intent) => intent,
                None => break,
            },
        };

        debug!(%intent, "applying intent");
        if let Some(note) = apply(&mut roster, intent).await {
            let _ = action_tx.send(Action::Notify(note));
        }
        let _ = action_tx.send(Action::IntentFinished);
    }

    debug!("roster bridge shut down");
}

/// Apply one intent, returning the notification to show for its outcome.
pub async fn apply<R>(roster: &mut Synchronizer<R, ChannelView>, intent: Intent) -> Option<Notification>
where
    R: PlayerRemote,
{
    match intent {
        Intent::Refresh => roster
            .refresh()
            .await
            .err()
            .map(|e| failure("Refresh failed", &e)),

        Intent::ShowDetails(id) => roster
            .show_details(&id)
            .await
            .err()
            .map(|e| failure("Could not load details", &e)),

        Intent::Delete(id) => {
            let name = roster
                .state()
                .player(&id)
                .map_or_else(|| id.to_string(), |p| p.name.clone());
            match roster.handle_delete(&id).await {
                Ok(Deletion::Removed) => Some(Notification::success(format!("Removed {name}"))),
                Ok(Deletion::AlreadyAbsent) => {
                    Some(Notification::info(format!("{name} was already gone")))
                }
                Err(e) => Some(failure("Delete failed", &e)),
            }
        }

        Intent::Create(form) => match roster.handle_create(&form).await {
            Ok(()) => Some(Notification::success(format!("Added {}", form.name.trim()))),
            Err(e) => Some(failure("Add failed", &e)),
        },
    }
}

fn failure(prefix: &str, err: &CoreError) -> Notification {
    Notification::error(format!("{prefix}: {err}"))
}
