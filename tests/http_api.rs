use std::fs;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use filesh::SessionRegistry;
use filesh::server::{TOKEN_HEADER, build_router};

/// Router whose sessions start in a fresh temporary directory
fn test_app() -> (Router, SessionRegistry, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let registry = SessionRegistry::new(dir.path().to_string_lossy().into_owned(), 16);
    (build_router(registry.clone()), registry, dir)
}

async fn send(app: &Router, method: &str, uri: &str, token: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(TOKEN_HEADER, token);
    }
    let resp = app
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

async fn get(app: &Router, uri: &str, token: &str) -> (StatusCode, String) {
    send(app, "GET", uri, Some(token)).await
}

async fn new_session(app: &Router) -> String {
    let (status, token) = send(app, "POST", "/auth", None).await;
    assert_eq!(status, StatusCode::OK);
    token
}

#[tokio::test]
async fn test_auth_issues_distinct_tokens() {
    let (app, registry, _dir) = test_app();

    let first = new_session(&app).await;
    let second = new_session(&app).await;

    assert_eq!(first.len(), 16);
    assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(first, second);
    assert_eq!(registry.len(), 2);
}

#[tokio::test]
async fn test_pwd_starts_at_default() {
    let (app, registry, _dir) = test_app();
    let token = new_session(&app).await;

    let (status, body) = get(&app, "/pwd", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, registry.default_path());
}

#[tokio::test]
async fn test_unknown_or_missing_token() {
    let (app, _registry, _dir) = test_app();

    let (status, body) = get(&app, "/pwd", "not-a-token").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "session not found");

    let (status, _) = send(&app, "GET", "/ls", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_in_query() {
    let (app, registry, _dir) = test_app();
    let token = new_session(&app).await;

    let (status, body) = send(&app, "GET", &format!("/pwd?token={token}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, registry.default_path());
}

#[tokio::test]
async fn test_unknown_route() {
    let (app, _registry, _dir) = test_app();
    let token = new_session(&app).await;

    let (status, body) = get(&app, "/cat", &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Not found");
}

#[tokio::test]
async fn test_cd_statuses() {
    let (app, registry, dir) = test_app();
    let token = new_session(&app).await;
    let file_path = dir.path().join("dir.txt");
    fs::write(&file_path, b"content").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();

    let (status, _) = get(&app, "/cd?dir=dir.txt", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&app, "/cd?dir=fsdf", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = get(&app, "/pwd", &token).await;
    assert_eq!(body, registry.default_path());

    let (status, body) = get(&app, "/cd?dir=sub", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (_, body) = get(&app, "/pwd", &token).await;
    assert_eq!(body, format!("{}/sub", registry.default_path()));
}

#[tokio::test]
async fn test_ls_json_listing() {
    let (app, _registry, dir) = test_app();
    let token = new_session(&app).await;
    fs::create_dir(dir.path().join("d1")).unwrap();
    fs::create_dir(dir.path().join("d2")).unwrap();
    fs::write(dir.path().join("a.txt"), b"").unwrap();
    fs::write(dir.path().join("b.txt"), b"").unwrap();
    fs::write(dir.path().join(".cfg"), b"").unwrap();

    let (status, body) = get(&app, "/ls", &token).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(names, vec!["d1", "d2", "a.txt", "b.txt"]);

    let (_, body) = get(&app, "/ls?hidden=true", &token).await;
    let names: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(names, vec!["d1", "d2", ".cfg", "a.txt", "b.txt"]);
}

#[tokio::test]
async fn test_ls_hidden_flag_is_lenient() {
    let (app, _registry, dir) = test_app();
    let token = new_session(&app).await;
    fs::write(dir.path().join(".cfg"), b"").unwrap();
    fs::write(dir.path().join("a.txt"), b"").unwrap();

    for uri in ["/ls?hidden=", "/ls?hidden=1", "/ls?hidden=yes", "/ls?hidden=TRUE"] {
        let (status, body) = get(&app, uri, &token).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        let names: Vec<String> = serde_json::from_str(&body).unwrap();
        assert_eq!(names, vec!["a.txt"], "{uri}");
    }

    let (status, body) = get(&app, "/ls?hidden=true", &token).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<String> = serde_json::from_str(&body).unwrap();
    assert_eq!(names, vec![".cfg", "a.txt"]);
}

#[tokio::test]
async fn test_ls_after_directory_removed_is_server_error() {
    let (app, _registry, dir) = test_app();
    let token = new_session(&app).await;
    fs::create_dir(dir.path().join("doomed")).unwrap();

    let (status, _) = get(&app, "/cd?dir=doomed", &token).await;
    assert_eq!(status, StatusCode::OK);
    fs::remove_dir(dir.path().join("doomed")).unwrap();

    let (status, body) = get(&app, "/ls", &token).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("read "));
}

#[tokio::test]
async fn test_mkdir_touch_rm() {
    let (app, _registry, dir) = test_app();
    let token = new_session(&app).await;

    let (status, _) = send(&app, "POST", "/mkdir?name=a/b/c", Some(token.as_str())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(dir.path().join("a/b/c").is_dir());

    let (status, _) = get(&app, "/touch?name=a/note.txt", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(dir.path().join("a/note.txt").is_file());

    let (status, _) = get(&app, "/rm?name=a", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!dir.path().join("a").exists());

    // Already gone
    let (status, _) = get(&app, "/rm?name=a", &token).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_validation_and_forbidden() {
    let (app, _registry, dir) = test_app();
    let token = new_session(&app).await;

    for uri in ["/mkdir", "/mkdir?name=", "/touch", "/rm?name="] {
        let (status, body) = get(&app, uri, &token).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, "missing name");
    }

    let (status, _) = get(&app, "/rm?name=/", &token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = get(&app, "/touch?name=missing/parent.txt", &token).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[tokio::test]
async fn test_touch_and_mkdir_under_a_file_agree() {
    let (app, _registry, dir) = test_app();
    let token = new_session(&app).await;
    fs::write(dir.path().join("file.txt"), b"content").unwrap();

    let (status, body) = get(&app, "/touch?name=file.txt/x", &token).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("create "), "{body}");

    let (status, body) = get(&app, "/mkdir?name=file.txt/x", &token).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.starts_with("create "), "{body}");
}

#[tokio::test]
async fn test_cd_into_file_body() {
    let (app, _registry, dir) = test_app();
    let token = new_session(&app).await;
    fs::write(dir.path().join("dir.txt"), b"content").unwrap();

    let (status, body) = get(&app, "/cd?dir=dir.txt", &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Not directory");
}

#[tokio::test]
async fn test_sessions_do_not_share_working_directory() {
    let (app, registry, dir) = test_app();
    fs::create_dir(dir.path().join("mine")).unwrap();
    let first = new_session(&app).await;
    let second = new_session(&app).await;

    let (status, _) = get(&app, "/cd?dir=mine", &first).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get(&app, "/pwd", &second).await;
    assert_eq!(body, registry.default_path());
}

#[tokio::test]
async fn test_health() {
    let (app, _registry, _dir) = test_app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
