// ── Roster synchronizer ──
//
// Owns the roster state and keeps a `RosterView` consistent with it.
// Every mutation goes to the remote first and is followed by a full
// list-and-render cycle; local state is never edited optimistically.
// Handled failures are logged here and returned so the front end can
// surface a notification.

use chrono::Utc;
use pupbowl_api::Deletion;
use tracing::{debug, info, warn};

use crate::detail::{DetailPanel, PlayerDetails};
use crate::error::CoreError;
use crate::form::PlayerForm;
use crate::model::PlayerId;
use crate::remote::PlayerRemote;
use crate::state::RosterState;
use crate::view::{ItemAction, RosterItem, RosterView};

pub struct Synchronizer<R, V> {
    remote: R,
    view: V,
    state: RosterState,
}

impl<R, V> Synchronizer<R, V>
where
    R: PlayerRemote,
    V: RosterView + Send,
{
    pub fn new(remote: R, view: V) -> Self {
        Self {
            remote,
            view,
            state: RosterState::new(),
        }
    }

    pub fn state(&self) -> &RosterState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    // ── Read cycle ───────────────────────────────────────────────────

    /// Fetch the roster, replace state wholesale, and re-render.
    ///
    /// On failure the previous state and rendering are left untouched.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        match self.remote.list_all().await {
            Ok(players) => {
                debug!(count = players.len(), "roster refreshed");
                self.state.replace(players, Utc::now());
                self.render();
                Ok(())
            }
            Err(e) => {
                warn!(op = "refresh", kind = e.kind(), error = %e, "roster refresh failed");
                Err(e)
            }
        }
    }

    /// Re-render the current state: one item per player, in order.
    pub fn render(&mut self) {
        let items = self.items();
        self.view.render(&items);
    }

    /// Current state as render items.
    pub fn items(&self) -> Vec<RosterItem> {
        self.state
            .players()
            .iter()
            .map(|p| RosterItem::new(p, self.state.panel(&p.id).clone()))
            .collect()
    }

    // ── Item handlers ────────────────────────────────────────────────

    /// Toggle a player's detail panel.
    ///
    /// Expanded collapses without a fetch. Collapsed fetches the player
    /// and expands on success. A failed fetch leaves the panel as it was.
    /// Returns the panel's new state.
    pub async fn show_details(&mut self, id: &PlayerId) -> Result<DetailPanel, CoreError> {
        if self.state.panel(id).is_expanded() {
            let panel = DetailPanel::Collapsed;
            self.state.set_panel(id, panel.clone());
            self.view.details_changed(id, &panel);
            return Ok(panel);
        }

        match self.remote.get_one(id).await {
            Ok(player) => {
                let panel = DetailPanel::Expanded(PlayerDetails::from(&player));
                if !self.state.set_panel(id, panel.clone()) {
                    debug!(%id, "details fetched for player outside the roster");
                }
                self.view.details_changed(id, &panel);
                Ok(panel)
            }
            Err(e) => {
                warn!(op = "show_details", %id, kind = e.kind(), error = %e, "could not load player details");
                Err(e)
            }
        }
    }

    /// Delete a player, then refresh regardless of the outcome.
    ///
    /// A delete failure is returned even if the follow-up refresh
    /// succeeded; otherwise the refresh result is returned.
    pub async fn handle_delete(&mut self, id: &PlayerId) -> Result<Deletion, CoreError> {
        let outcome = self.remote.remove(id).await;
        match &outcome {
            Ok(Deletion::Removed) => info!(%id, "player deleted"),
            Ok(Deletion::AlreadyAbsent) => info!(%id, "player was already absent"),
            Err(e) => warn!(op = "delete", %id, kind = e.kind(), error = %e, "player delete failed"),
        }

        let refreshed = self.refresh().await;
        let deletion = outcome?;
        refreshed?;
        Ok(deletion)
    }

    /// Validate the form, create the player, then reset the form and refresh.
    ///
    /// A blank name never reaches the remote. On any failure the form is
    /// left as typed so the user can correct it.
    pub async fn handle_create(&mut self, form: &PlayerForm) -> Result<(), CoreError> {
        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                warn!(op = "create", error = %e, "player form rejected locally");
                return Err(e);
            }
        };

        if let Err(e) = self.remote.create(&draft).await {
            warn!(op = "create", name = %draft.name, kind = e.kind(), error = %e, "player create failed");
            return Err(e);
        }

        info!(name = %draft.name, "player created");
        self.view.reset_form();
        self.refresh().await
    }

    /// Route an item affordance to its handler.
    pub async fn dispatch(&mut self, action: &ItemAction) -> Result<(), CoreError> {
        match action {
            ItemAction::ShowDetails(id) => self.show_details(id).await.map(|_| ()),
            ItemAction::Delete(id) => self.handle_delete(id).await.map(|_| ()),
        }
    }
}
