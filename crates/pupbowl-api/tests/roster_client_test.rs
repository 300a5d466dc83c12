// Integration tests for `RosterClient` using wiremock.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pupbowl_api::{Deletion, Error, NewPlayer, PlayerId, RosterClient};

const COHORT: &str = "2308-ACC-ET-WEB-PT-A";
const COLLECTION: &str = "/api/2308-ACC-ET-WEB-PT-A/players";

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, RosterClient) {
    let server = MockServer::start().await;
    let client = RosterClient::from_reqwest(&server.uri(), COHORT, reqwest::Client::new()).unwrap();
    (server, client)
}

fn ok(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "error": null,
        "data": data,
    }))
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_players() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ok(json!({
            "players": [
                { "id": 1, "name": "Ace", "breed": "Beagle", "status": "field",
                  "imageUrl": "https://img.example/ace.png",
                  "createdAt": "2023-08-01T12:00:00.000Z",
                  "updatedAt": "2023-08-02T12:00:00.000Z",
                  "teamId": 4, "cohortId": 9 },
                { "id": 2, "name": "Bo" },
            ]
        })))
        .mount(&server)
        .await;

    let players = client.list_players().await.unwrap();

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].id, PlayerId::Numeric(1));
    assert_eq!(players[0].breed.as_deref(), Some("Beagle"));
    assert_eq!(players[0].team_id, Some(4));
    assert_eq!(players[1].name, "Bo");
    assert_eq!(players[1].status, None);
}

#[tokio::test]
async fn test_list_players_empty_roster() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ok(json!({ "players": [] })))
        .mount(&server)
        .await;

    assert!(client.list_players().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_player_wrapped_and_bare() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION}/1")))
        .respond_with(ok(json!({ "player": { "id": 1, "name": "Ace" } })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION}/2")))
        .respond_with(ok(json!({ "id": 2, "name": "Bo", "breed": "Pug" })))
        .mount(&server)
        .await;

    let ace = client.get_player(&PlayerId::Numeric(1)).await.unwrap();
    assert_eq!(ace.name, "Ace");

    let bo = client.get_player(&"2".into()).await.unwrap();
    assert_eq!(bo.breed.as_deref(), Some("Pug"));
}

#[tokio::test]
async fn test_create_player_posts_draft() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .and(body_json(json!({
            "name": "Nova",
            "breed": "Husky",
            "status": "bench",
            "imageUrl": "https://img.example/nova.png",
        })))
        .respond_with(ok(json!({
            "newPlayer": {
                "id": 77, "name": "Nova", "breed": "Husky", "status": "bench",
                "imageUrl": "https://img.example/nova.png",
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let draft = NewPlayer {
        name: "Nova".into(),
        breed: Some("Husky".into()),
        status: Some("bench".into()),
        image_url: Some("https://img.example/nova.png".into()),
    };
    let created = client.create_player(&draft).await.unwrap().unwrap();
    assert_eq!(created.id, PlayerId::Numeric(77));
}

#[tokio::test]
async fn test_create_player_without_record_in_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(201))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .respond_with(ok(json!({})))
        .mount(&server)
        .await;

    let draft = NewPlayer {
        name: "Nova".into(),
        ..NewPlayer::default()
    };
    assert!(client.create_player(&draft).await.unwrap().is_none());
    assert!(client.create_player(&draft).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_player() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{COLLECTION}/5")))
        .respond_with(ok(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client.delete_player(&PlayerId::Numeric(5)).await.unwrap();
    assert_eq!(outcome, Deletion::Removed);
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_player_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION}/404")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "error": { "name": "NotFoundError", "message": "No player with id 404" },
            "data": null,
        })))
        .mount(&server)
        .await;

    let err = client.get_player(&PlayerId::Numeric(404)).await.unwrap_err();
    assert!(matches!(err, Error::NotFound { status: 404, .. }));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_success_false_envelope_is_an_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": { "name": "CohortError", "message": "unknown cohort" },
            "data": null,
        })))
        .mount(&server)
        .await;

    let err = client.list_players().await.unwrap_err();
    match err {
        Error::Api { name, message } => {
            assert_eq!(name.as_deref(), Some("CohortError"));
            assert_eq!(message, "unknown cohort");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_maps_to_http() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client.list_players().await.unwrap_err();
    assert!(matches!(err, Error::Http { status: 500, .. }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.list_players().await.unwrap_err();
    match err {
        Error::Deserialization { body, .. } => assert!(body.contains("oops")),
        other => panic!("expected Deserialization error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_player_rejected() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "error": { "name": "ValidationError", "message": "name is required" },
            "data": null,
        })))
        .mount(&server)
        .await;

    let err = client
        .create_player(&NewPlayer {
            name: "x".into(),
            ..NewPlayer::default()
        })
        .await
        .unwrap_err();
    match err {
        Error::Rejected { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "name is required");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_missing_player_is_already_absent() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{COLLECTION}/9")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let outcome = client.delete_player(&PlayerId::Numeric(9)).await.unwrap();
    assert_eq!(outcome, Deletion::AlreadyAbsent);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client =
        RosterClient::from_reqwest("http://127.0.0.1:1", COHORT, reqwest::Client::new()).unwrap();

    let err = client.list_players().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.is_transient());
}
