// Player endpoints
//
// List, fetch, create, and delete against the cohort's players collection.

use tracing::{debug, warn};

use crate::client::RosterClient;
use crate::error::Error;
use crate::models::{ApiPlayer, Deletion, NewPlayer, PlayerData, PlayerId, PlayersData};

impl RosterClient {
    /// List every player in the cohort.
    ///
    /// `GET /api/{cohort}/players`
    pub async fn list_players(&self) -> Result<Vec<ApiPlayer>, Error> {
        debug!(cohort = %self.cohort(), "listing players");
        let data: Option<PlayersData> = self.get(self.collection_url().clone()).await?;
        Ok(data.map(|d| d.players).unwrap_or_default())
    }

    /// Fetch a single player.
    ///
    /// `GET /api/{cohort}/players/{id}`. A 404, a `success: false`
    /// envelope, or an empty `data` all map to `Error::NotFound`.
    pub async fn get_player(&self, id: &PlayerId) -> Result<ApiPlayer, Error> {
        let url = self.player_url(id)?;
        debug!(%id, "fetching player");

        let not_found = |status| Error::NotFound {
            id: id.to_string(),
            status,
        };

        match self.get::<PlayerData>(url).await {
            Ok(data) => data
                .and_then(PlayerData::into_player)
                .ok_or_else(|| not_found(200)),
            Err(Error::Http { status: 404, .. }) => Err(not_found(404)),
            Err(Error::Api { .. }) => Err(not_found(200)),
            Err(e) => Err(e),
        }
    }

    /// Create a player from a draft.
    ///
    /// `POST /api/{cohort}/players`. Any 2xx without `success: false` is a
    /// success. The stored record is returned when the body carries one;
    /// an empty body or a `data` without a player yields `None`.
    pub async fn create_player(&self, draft: &NewPlayer) -> Result<Option<ApiPlayer>, Error> {
        debug!(name = %draft.name, "creating player");

        match self
            .post::<serde_json::Value>(self.collection_url().clone(), draft)
            .await
        {
            Ok(data) => Ok(data
                .and_then(|v| serde_json::from_value::<PlayerData>(v).ok())
                .and_then(PlayerData::into_player)),
            Err(Error::Http {
                status: status @ (400 | 422),
                message,
            }) => Err(Error::Rejected {
                status,
                message: message.unwrap_or_else(|| "invalid player".into()),
            }),
            Err(Error::Api { message, .. }) => Err(Error::Rejected {
                status: 200,
                message,
            }),
            Err(e) => Err(e),
        }
    }

    /// Delete a player.
    ///
    /// `DELETE /api/{cohort}/players/{id}`. A player the service does not
    /// know is reported as `Deletion::AlreadyAbsent` rather than an error.
    pub async fn delete_player(&self, id: &PlayerId) -> Result<Deletion, Error> {
        let url = self.player_url(id)?;
        debug!(%id, "deleting player");

        match self.delete::<serde_json::Value>(url).await {
            Ok(_) => Ok(Deletion::Removed),
            Err(e) if e.is_not_found() => {
                warn!(%id, error = %e, "player already absent on delete");
                Ok(Deletion::AlreadyAbsent)
            }
            Err(e) => Err(e),
        }
    }
}
