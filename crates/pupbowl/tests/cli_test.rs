//! Integration tests for the `pupbowl` CLI binary.
//!
//! Argument parsing and help run offline. Roster commands run against a
//! wiremock server standing in for the roster service.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COLLECTION: &str = "/api/test-cohort/players";

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `pupbowl` binary with env isolation.
///
/// Clears all `PUPBOWL_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn pupbowl_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("pupbowl");
    cmd.env("HOME", "/tmp/pupbowl-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/pupbowl-cli-test-nonexistent")
        .env_remove("PUPBOWL_PROFILE")
        .env_remove("PUPBOWL_ORIGIN")
        .env_remove("PUPBOWL_COHORT")
        .env_remove("PUPBOWL_OUTPUT")
        .env_remove("PUPBOWL_INSECURE")
        .env_remove("PUPBOWL_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// A command pointed at `server` for the test cohort.
fn roster_cmd(server: &MockServer) -> assert_cmd::Command {
    let mut cmd = pupbowl_cmd();
    cmd.args(["--origin", &server.uri(), "--cohort", "test-cohort", "--timeout", "5"]);
    cmd
}

/// Run a prepared command off the async runtime so wiremock keeps serving.
async fn run(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn rex() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "Rex",
        "breed": "Lab",
        "status": "bench",
        "imageUrl": "https://example.com/rex.jpg",
        "createdAt": "2023-08-01T12:00:00.000Z",
        "updatedAt": "2023-08-01T12:00:00.000Z",
        "teamId": null,
        "cohortId": 42
    })
}

fn roster_body(players: &[serde_json::Value]) -> serde_json::Value {
    json!({ "success": true, "error": null, "data": { "players": players } })
}

async fn mount_list(server: &MockServer, players: &[serde_json::Value]) {
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(roster_body(players)))
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = pupbowl_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(
        text.contains("Usage"),
        "Expected 'Usage' in output:\n{text}"
    );
}

#[test]
fn test_help_flag() {
    pupbowl_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Puppy Bowl")
            .and(predicate::str::contains("list"))
            .and(predicate::str::contains("add"))
            .and(predicate::str::contains("remove")),
    );
}

#[test]
fn test_version_flag() {
    pupbowl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pupbowl"));
}

#[test]
fn test_completions_zsh() {
    pupbowl_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_invalid_subcommand() {
    let output = pupbowl_cmd().arg("foobar").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("foobar"));
}

#[test]
fn test_add_requires_name() {
    let output = pupbowl_cmd().arg("add").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("--name"));
}

#[test]
fn test_config_path_prints_toml_file() {
    pupbowl_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_unknown_profile_is_usage_error() {
    let output = pupbowl_cmd()
        .args(["--profile", "nope", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("nope"));
}

#[test]
fn test_invalid_origin_is_validation_error() {
    let output = pupbowl_cmd()
        .args(["--origin", "not a url", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(6));
}

#[test]
fn test_unreachable_service_exits_with_connection_code() {
    let output = pupbowl_cmd()
        .args(["--origin", "http://127.0.0.1:1", "--cohort", "c", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(7));
    assert!(combined_output(&output).contains("Could not reach"));
}

// ── Roster commands ─────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_list_json_returns_players_in_order() {
    let server = MockServer::start().await;
    let mut fido = rex();
    fido["id"] = json!(2);
    fido["name"] = json!("Fido");
    mount_list(&server, &[rex(), fido]).await;

    let mut cmd = roster_cmd(&server);
    cmd.args(["-o", "json", "list"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let players: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> = players
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(names, ["Rex", "Fido"]);
    assert_eq!(players[0]["status"], "bench");
    assert_eq!(players[0]["imageUrl"], "https://example.com/rex.jpg");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_list_plain_prints_ids() {
    let server = MockServer::start().await;
    mount_list(&server, &[rex()]).await;

    let mut cmd = roster_cmd(&server);
    cmd.args(["-o", "plain", "list"]);
    let output = run(cmd).await;

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_list_table_empty_roster() {
    let server = MockServer::start().await;
    mount_list(&server, &[]).await;

    let mut cmd = roster_cmd(&server);
    cmd.args(["--color", "never", "list"]);
    let output = run(cmd).await;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No players"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_show_prints_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION}/1")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "error": null,
                "data": { "player": rex() }
            })),
        )
        .mount(&server)
        .await;

    let mut cmd = roster_cmd(&server);
    cmd.args(["--color", "never", "show", "1"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rex"));
    assert!(stdout.contains("Lab"));
    assert!(stdout.contains("bench"));
    assert!(stdout.contains("2023-08-01"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_show_missing_player_exits_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{COLLECTION}/99")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "error": { "name": "NotFoundError", "message": "No player with id 99" },
            "data": null
        })))
        .mount(&server)
        .await;

    let mut cmd = roster_cmd(&server);
    cmd.args(["show", "99"]);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("99"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_add_posts_draft_then_relists() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .and(body_json(json!({ "name": "Biscuit", "breed": "Beagle", "status": "field" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "error": null,
            "data": { "newPlayer": { "id": 7, "name": "Biscuit", "breed": "Beagle", "status": "field" } }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(roster_body(&[rex()])))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = roster_cmd(&server);
    cmd.args(["add", "--name", "  Biscuit ", "--breed", "Beagle", "--status", "field"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Player 'Biscuit' added"));
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_add_succeeds_with_empty_body_even_if_relist_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = roster_cmd(&server);
    cmd.args(["add", "--name", "Nova"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Player 'Nova' added"));
    assert!(stderr.contains("could not reload the roster"));
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_add_blank_name_never_reaches_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut cmd = roster_cmd(&server);
    cmd.args(["add", "--name", "   "]);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(6));
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_remove_with_yes_deletes_then_relists() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{COLLECTION}/1")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "error": null, "data": null })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(roster_body(&[])))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = roster_cmd(&server);
    cmd.args(["remove", "1", "--yes"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Player '1' removed"));
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_remove_without_yes_refuses_non_interactive() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut cmd = roster_cmd(&server);
    cmd.args(["remove", "1"]);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("--yes"));
    server.verify().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_failed_remove_still_relists_and_fails() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{COLLECTION}/1")))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(COLLECTION))
        .respond_with(ResponseTemplate::new(200).set_body_json(roster_body(&[rex()])))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = roster_cmd(&server);
    cmd.args(["remove", "1", "-y"]);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(combined_output(&output).contains("HTTP 500"));
    server.verify().await;
}
