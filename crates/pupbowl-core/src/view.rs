// ── View capability ──
//
// The synchronizer renders through `RosterView`; front ends implement it.
// Each rendered item carries its affordances as `ItemAction` values bound
// to the id captured at render time, so a handler can never act on the
// wrong player.

use crate::detail::DetailPanel;
use crate::model::{Player, PlayerId, PlayerStatus};

/// A user intent bound to one rendered item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    ShowDetails(PlayerId),
    Delete(PlayerId),
}

impl ItemAction {
    pub fn id(&self) -> &PlayerId {
        match self {
            Self::ShowDetails(id) | Self::Delete(id) => id,
        }
    }
}

/// One row of the rendered roster.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterItem {
    pub id: PlayerId,
    pub name: String,
    pub breed: Option<String>,
    pub status: Option<PlayerStatus>,
    pub image_url: Option<String>,
    pub panel: DetailPanel,
    pub show_details: ItemAction,
    pub delete: ItemAction,
}

impl RosterItem {
    pub fn new(player: &Player, panel: DetailPanel) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            breed: player.breed.clone(),
            status: player.status.clone(),
            image_url: player.image_url.clone(),
            panel,
            show_details: ItemAction::ShowDetails(player.id.clone()),
            delete: ItemAction::Delete(player.id.clone()),
        }
    }
}

/// Output surface driven by the synchronizer.
pub trait RosterView {
    /// Replace everything shown with `items`, in order.
    fn render(&mut self, items: &[RosterItem]);

    /// One item's detail panel changed without a full re-render.
    fn details_changed(&mut self, id: &PlayerId, panel: &DetailPanel);

    /// A create succeeded; clear the add-player form.
    fn reset_form(&mut self);
}
