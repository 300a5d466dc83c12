// ── Roster state ──
//
// The single in-memory copy of the roster. `players` mirrors the last
// successful list fetch and is only ever replaced wholesale. Detail
// panels are keyed by id and pruned whenever the roster is replaced.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::detail::DetailPanel;
use crate::model::{Player, PlayerId};

static COLLAPSED: DetailPanel = DetailPanel::Collapsed;

#[derive(Debug, Default)]
pub struct RosterState {
    players: Vec<Player>,
    panels: HashMap<PlayerId, DetailPanel>,
    last_refresh: Option<DateTime<Utc>>,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Players in service order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.player(id).is_some()
    }

    /// When the roster was last replaced by a successful fetch.
    pub fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.last_refresh
    }

    /// Replace the roster with a freshly fetched list.
    ///
    /// Panels of players that survived keep their state; the rest are
    /// discarded.
    pub fn replace(&mut self, players: Vec<Player>, fetched_at: DateTime<Utc>) {
        self.panels.retain(|id, _| players.iter().any(|p| &p.id == id));
        self.players = players;
        self.last_refresh = Some(fetched_at);
    }

    /// Detail panel of a player. Players without a recorded panel are collapsed.
    pub fn panel(&self, id: &PlayerId) -> &DetailPanel {
        self.panels.get(id).unwrap_or(&COLLAPSED)
    }

    /// Record a panel state. Ignored for players not in the roster.
    pub(crate) fn set_panel(&mut self, id: &PlayerId, panel: DetailPanel) -> bool {
        if !self.contains(id) {
            return false;
        }
        if panel.is_expanded() {
            self.panels.insert(id.clone(), panel);
        } else {
            self.panels.remove(id);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::PlayerDetails;

    fn roster(ids: &[u64]) -> Vec<Player> {
        ids.iter()
            .map(|&id| Player::new(id, format!("pup-{id}")))
            .collect()
    }

    #[test]
    fn replace_is_wholesale_and_stamps_time() {
        let mut state = RosterState::new();
        assert!(state.last_refresh().is_none());

        let now = Utc::now();
        state.replace(roster(&[1, 2, 3]), now);
        assert_eq!(state.players().len(), 3);
        assert_eq!(state.last_refresh(), Some(now));

        state.replace(roster(&[3]), now);
        assert_eq!(state.players().len(), 1);
        assert_eq!(state.players()[0].id, PlayerId::Numeric(3));
    }

    #[test]
    fn replace_prunes_panels_of_departed_players() {
        let mut state = RosterState::new();
        state.replace(roster(&[1, 2]), Utc::now());

        let one = PlayerId::Numeric(1);
        let two = PlayerId::Numeric(2);
        let expanded = |id: u64| DetailPanel::Expanded(PlayerDetails::from(&Player::new(id, "x")));
        assert!(state.set_panel(&one, expanded(1)));
        assert!(state.set_panel(&two, expanded(2)));

        state.replace(roster(&[2]), Utc::now());
        assert!(!state.panel(&one).is_expanded());
        assert!(state.panel(&two).is_expanded());
    }

    #[test]
    fn panels_for_unknown_players_are_ignored() {
        let mut state = RosterState::new();
        let ghost = PlayerId::Numeric(99);
        let panel = DetailPanel::Expanded(PlayerDetails::from(&Player::new(99_u64, "ghost")));
        assert!(!state.set_panel(&ghost, panel));
        assert!(!state.panel(&ghost).is_expanded());
    }
}
