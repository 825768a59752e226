//! Greeting and health handlers.

use axum::Json;
use serde::Serialize;

/// Fixed greeting payload.
#[derive(Debug, Serialize)]
pub struct Greeting {
    #[serde(rename = "Hello")]
    pub hello: &'static str,
}

/// Return the fixed greeting.
pub async fn greeting() -> Json<Greeting> {
    Json(Greeting { hello: "World" })
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}
