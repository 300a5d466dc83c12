// Players collection HTTP client
//
// Wraps `reqwest::Client` with cohort-scoped URL construction, envelope
// unwrapping, and status classification. The endpoint methods live in
// `players.rs` as inherent methods so this module stays focused on
// transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{ApiResponse, PlayerId};
use crate::transport::TransportConfig;

/// Raw HTTP client for one cohort's players collection.
///
/// All requests target `{origin}/api/{cohort}/players[/{id}]`. Methods
/// return the unwrapped `data` payload; the envelope is stripped before
/// the caller sees it.
#[derive(Debug, Clone)]
pub struct RosterClient {
    http: reqwest::Client,
    base_url: Url,
    cohort: String,
}

impl RosterClient {
    /// Create a client from a `TransportConfig`.
    ///
    /// `origin` is the service root (e.g. `https://fsa-puppy-bowl.herokuapp.com`).
    pub fn new(origin: &Url, cohort: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::with_client(http, origin, cohort)
    }

    /// Create a client from a raw origin string and a pre-built `reqwest::Client`.
    pub fn from_reqwest(origin: &str, cohort: &str, http: reqwest::Client) -> Result<Self, Error> {
        let origin = Url::parse(origin)?;
        Self::with_client(http, &origin, cohort)
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, origin: &Url, cohort: &str) -> Result<Self, Error> {
        let base_url = collection_url(origin, cohort)?;
        Ok(Self {
            http,
            base_url,
            cohort: cohort.to_owned(),
        })
    }

    /// The cohort this client is scoped to.
    pub fn cohort(&self) -> &str {
        &self.cohort
    }

    /// The collection URL: `{origin}/api/{cohort}/players`.
    pub fn collection_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build the URL of a single player: `{collection}/{id}`.
    pub(crate) fn player_url(&self, id: &PlayerId) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .push(&id.to_string());
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and unwrap the envelope.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        self.parse_envelope(resp).await
    }

    /// Send a POST request with a JSON body and unwrap the envelope.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &impl Serialize,
    ) -> Result<Option<T>, Error> {
        debug!("POST {}", url);

        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;

        self.parse_envelope(resp).await
    }

    /// Send a DELETE request and unwrap the envelope.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, Error> {
        debug!("DELETE {}", url);

        let resp = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(Error::Transport)?;

        self.parse_envelope(resp).await
    }

    /// Check the status, then parse the `{ success, error, data }` envelope.
    ///
    /// Non-2xx statuses become `Error::Http`. A 2xx body with
    /// `success: false` becomes `Error::Api`. An empty 2xx body is
    /// treated as a successful envelope with no data.
    async fn parse_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Option<T>, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        if body.trim().is_empty() {
            return Ok(None);
        }

        let envelope: ApiResponse<T> =
            serde_json::from_str(&body).map_err(|e| Error::Deserialization {
                message: e.to_string(),
                body: body.clone(),
            })?;

        if envelope.success == Some(false) {
            let error = envelope.error;
            return Err(Error::Api {
                name: error.as_ref().and_then(|e| e.name()).map(str::to_owned),
                message: error
                    .as_ref()
                    .and_then(|e| e.message())
                    .map_or_else(|| "request failed".to_owned(), str::to_owned),
            });
        }

        Ok(envelope.data)
    }
}

/// `{origin}/api/{cohort}/players`, tolerant of a trailing slash on `origin`.
fn collection_url(origin: &Url, cohort: &str) -> Result<Url, Error> {
    let mut url = origin.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
        .pop_if_empty()
        .extend(["api", cohort, "players"]);
    Ok(url)
}

/// Best-effort extraction of a human-readable message from an error body.
fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<ApiResponse<serde_json::Value>>(trimmed) {
        Ok(env) => env.error.and_then(|e| e.message().map(str::to_owned)),
        Err(_) => Some(trimmed.chars().take(200).collect()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_handles_trailing_slash() {
        let a = collection_url(&Url::parse("https://host.example").unwrap(), "2308-ACC").unwrap();
        let b = collection_url(&Url::parse("https://host.example/").unwrap(), "2308-ACC").unwrap();
        assert_eq!(a.as_str(), "https://host.example/api/2308-ACC/players");
        assert_eq!(a, b);
    }

    #[test]
    fn player_url_appends_id() {
        let client =
            RosterClient::from_reqwest("https://host.example", "c1", reqwest::Client::new())
                .unwrap();
        let url = client.player_url(&PlayerId::Numeric(17)).unwrap();
        assert_eq!(url.as_str(), "https://host.example/api/c1/players/17");
    }

    #[test]
    fn error_message_prefers_envelope_message() {
        let body = r#"{"success":false,"error":{"name":"X","message":"bad draft"},"data":null}"#;
        assert_eq!(error_message(body).as_deref(), Some("bad draft"));
        assert_eq!(error_message("  ").as_deref(), None);
        assert_eq!(error_message("Bad Gateway").as_deref(), Some("Bad Gateway"));
    }
}
