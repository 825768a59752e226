//! Integration tests for Pantry.
//!
//! Tests drive the fully assembled router in-process via
//! `tower::ServiceExt::oneshot` - no sockets, no external services. Each
//! [`TestApp`] gets its own seeded store and its own notification log file
//! in a temp directory.
//!
//! # Test Categories
//!
//! - `items_api` - catalog CRUD, merge semantics, error mapping
//! - `misc_api` - greeting, models, files, uploads, users
//! - `notifications_api` - background log writes

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use tokio::task::JoinHandle;
use tower::ServiceExt;

use pantry_server::config::ServerConfig;
use pantry_server::notify::NotificationLog;
use pantry_server::routes;
use pantry_server::state::AppState;

/// One fully assembled server instance plus the handles needed to observe it.
pub struct TestApp {
    router: Router,
    log_path: PathBuf,
    writer: JoinHandle<()>,
    _dir: tempfile::TempDir,
}

impl TestApp {
    /// Build an app with a seeded store and a fresh notification log.
    ///
    /// # Panics
    ///
    /// Panics if the temp directory cannot be created.
    #[must_use]
    pub fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let log_path = dir.path().join("log.txt");

        let config = ServerConfig {
            notification_log: log_path.clone(),
            ..ServerConfig::default()
        };
        let (notifications, writer) = NotificationLog::spawn(&log_path);
        let state = AppState::new(config, notifications);

        let router = Router::new().merge(routes::routes()).with_state(state);
        Self {
            router,
            log_path,
            writer,
            _dir: dir,
        }
    }

    /// Send one request through the router.
    ///
    /// # Panics
    ///
    /// Panics if the router fails, which it never does - rejections become
    /// responses.
    pub async fn request(&self, req: Request<Body>) -> Response<axum::body::Body> {
        self.router
            .clone()
            .oneshot(req)
            .await
            .expect("router is infallible")
    }

    /// Tear the app down and return the notification log contents.
    ///
    /// Dropping the router releases the last log handle, so awaiting the
    /// writer task guarantees every queued entry has been flushed.
    ///
    /// # Panics
    ///
    /// Panics if the writer task itself panicked.
    pub async fn into_log(self) -> String {
        drop(self.router);
        self.writer.await.expect("log writer panicked");
        std::fs::read_to_string(&self.log_path).unwrap_or_default()
    }
}

/// Build a GET request.
///
/// # Panics
///
/// Panics on an invalid URI.
#[must_use]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// Build a JSON request with the given method.
///
/// # Panics
///
/// Panics on an invalid URI.
#[must_use]
pub fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

/// Read a response body as JSON.
///
/// # Panics
///
/// Panics if the body is not valid JSON.
pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    serde_json::from_slice(&bytes).expect("JSON body")
}

/// Read a response body as a string.
///
/// # Panics
///
/// Panics if the body is not UTF-8.
pub async fn body_string(response: Response<axum::body::Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("UTF-8 body")
}
