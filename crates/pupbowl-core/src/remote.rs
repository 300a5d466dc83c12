// ── Remote collection capability ──
//
// The four operations the synchronizer needs from the players
// collection. `RosterClient` is the production implementation; tests
// substitute in-memory fakes.

use std::future::Future;

use pupbowl_api::{Deletion, NewPlayer, RosterClient};

use crate::error::CoreError;
use crate::model::{Player, PlayerId};

pub trait PlayerRemote: Send + Sync {
    /// Fetch the whole roster in service order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Player>, CoreError>> + Send;

    /// Fetch one player. Absence is `CoreError::NotFound`.
    fn get_one(&self, id: &PlayerId) -> impl Future<Output = Result<Player, CoreError>> + Send;

    /// Submit a draft. The stored record is not returned; callers re-list.
    fn create(&self, draft: &NewPlayer) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Delete by id. A missing player is `Deletion::AlreadyAbsent`.
    fn remove(&self, id: &PlayerId) -> impl Future<Output = Result<Deletion, CoreError>> + Send;
}

impl PlayerRemote for RosterClient {
    async fn list_all(&self) -> Result<Vec<Player>, CoreError> {
        let players = self.list_players().await?;
        Ok(players.into_iter().map(Player::from).collect())
    }

    async fn get_one(&self, id: &PlayerId) -> Result<Player, CoreError> {
        Ok(Player::from(self.get_player(id).await?))
    }

    async fn create(&self, draft: &NewPlayer) -> Result<(), CoreError> {
        self.create_player(draft).await?;
        Ok(())
    }

    async fn remove(&self, id: &PlayerId) -> Result<Deletion, CoreError> {
        Ok(self.delete_player(id).await?)
    }
}
