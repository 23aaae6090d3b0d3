//! Integration tests for the HTTP API.
//!
//! The solver binary is replaced by stub shell scripts written into a
//! temporary directory, so tests exercise the full request path including
//! the child-process invocation.

use axum::{http::StatusCode, routing::get, Router};
use axum_test::TestServer;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use vroom::RouteService;
use vroom_service::{handlers, AppState};

/// Write a stub solver script into `dir` and mark it executable.
fn create_stub_solver(dir: &Path, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("vroom");
    let mut file = File::create(&path).unwrap();
    writeln!(file, "#!/bin/sh").unwrap();
    writeln!(file, "{}", script).unwrap();
    drop(file);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Create a test server wired to the given solver binary path.
fn create_test_server(binary: &Path) -> TestServer {
    let state = Arc::new(AppState {
        route_service: RouteService::new(binary),
    });

    let app = Router::new()
        .route("/route", get(handlers::get_route))
        .route("/health", get(handlers::health_check))
        .fallback(handlers::bad_request_fallback)
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_route_success() {
    let temp_dir = TempDir::new().unwrap();
    let binary = create_stub_solver(temp_dir.path(), r#"printf '{"code":0,"routes":[]}'"#);

    let server = create_test_server(&binary);

    let response = server.get("/route?loc=1,2&loc=3,4").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["code"], 0);
    assert!(json["routes"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_route_passes_default_flags() {
    let temp_dir = TempDir::new().unwrap();
    // The stub reports the argument list it was invoked with.
    let binary = create_stub_solver(temp_dir.path(), r#"printf '{"args":"%s"}' "$*""#);

    let server = create_test_server(&binary);

    let response = server.get("/route?loc=1,2&loc=3,4&loc=5,6").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["args"], "-s loc=1,2&loc=3,4&loc=5,6");
}

#[tokio::test]
async fn test_route_flags_are_conditional_and_ordered() {
    let temp_dir = TempDir::new().unwrap();
    let binary = create_stub_solver(temp_dir.path(), r#"printf '{"args":"%s"}' "$*""#);

    let server = create_test_server(&binary);

    let response = server
        .get("/route?startAtFirst=false&endAtLast=true&includeGeometry=true&loc=1,2&loc=3,4")
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["args"], "-e -g loc=1,2&loc=3,4");
}

#[tokio::test]
async fn test_route_too_few_locations_never_spawns() {
    let temp_dir = TempDir::new().unwrap();
    // The stub leaves a marker in its working directory when executed.
    let binary = create_stub_solver(temp_dir.path(), "touch ran\nprintf '{}'");

    let server = create_test_server(&binary);

    let response = server.get("/route?loc=1,2").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["message"], "Must send more than one location");

    let response = server.get("/route").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["message"], "Must send more than one location");

    assert!(!temp_dir.path().join("ran").exists());
}

#[tokio::test]
async fn test_route_missing_binary() {
    let temp_dir = TempDir::new().unwrap();
    let server = create_test_server(&temp_dir.path().join("vroom"));

    let response = server.get("/route?loc=1,2&loc=3,4").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["message"], "Vroom binary file doesn't exist");
}

#[tokio::test]
async fn test_route_binary_not_executable() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vroom");
    File::create(&path).unwrap();

    let server = create_test_server(&path);

    let response = server.get("/route?loc=1,2&loc=3,4").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["message"], "Cannot execute Vroom binary file");
}

#[tokio::test]
async fn test_route_non_json_solver_output() {
    let temp_dir = TempDir::new().unwrap();
    let binary = create_stub_solver(temp_dir.path(), "echo 'ERROR: bad input'");

    let server = create_test_server(&binary);

    let response = server.get("/route?loc=1,2&loc=3,4").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    // The parse error's own text is relayed
    assert!(json["message"].as_str().unwrap().contains("expected value"));
}

#[tokio::test]
async fn test_route_merges_stderr_into_output() {
    let temp_dir = TempDir::new().unwrap();
    let binary = create_stub_solver(temp_dir.path(), r#"printf '{"code":'; printf '0}' 1>&2"#);

    let server = create_test_server(&binary);

    let response = server.get("/route?loc=1,2&loc=3,4").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["code"], 0);
}

#[tokio::test]
async fn test_route_concatenates_multiline_output() {
    let temp_dir = TempDir::new().unwrap();
    let binary = create_stub_solver(
        temp_dir.path(),
        "echo '{\"code\":'\necho '0,\"routes\":[]}'",
    );

    let server = create_test_server(&binary);

    let response = server.get("/route?loc=1,2&loc=3,4").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["code"], 0);
}

#[tokio::test]
async fn test_route_malformed_boolean() {
    let temp_dir = TempDir::new().unwrap();
    let binary = create_stub_solver(temp_dir.path(), r#"printf '{}'"#);

    let server = create_test_server(&binary);

    let response = server.get("/route?loc=1,2&loc=3,4&startAtFirst=banana").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["message"], "Bad request");
}

#[tokio::test]
async fn test_unknown_route_falls_back_to_json_error() {
    let temp_dir = TempDir::new().unwrap();
    let binary = create_stub_solver(temp_dir.path(), r#"printf '{}'"#);

    let server = create_test_server(&binary);

    let response = server.get("/nonexistent").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["message"], "Bad request");
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let temp_dir = TempDir::new().unwrap();
    let binary = create_stub_solver(temp_dir.path(), r#"printf '{"code":0}'"#);

    let server = create_test_server(&binary);

    // One failing request must not affect a concurrent successful one.
    let (ok_response, err_response) = tokio::join!(
        async { server.get("/route?loc=1,2&loc=3,4").await },
        async { server.get("/route?loc=1,2").await },
    );

    ok_response.assert_status_ok();
    let json: Value = ok_response.json();
    assert_eq!(json["code"], 0);

    err_response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = err_response.json();
    assert_eq!(json["message"], "Must send more than one location");
}

#[tokio::test]
async fn test_health_endpoint() {
    let temp_dir = TempDir::new().unwrap();
    let binary = create_stub_solver(temp_dir.path(), r#"printf '{}'"#);

    let server = create_test_server(&binary);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].as_str().is_some());
}
