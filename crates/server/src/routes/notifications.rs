//! Notification handler backed by the background log writer.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

/// Query parameters for a notification request.
#[derive(Debug, Deserialize)]
pub struct NotifyParams {
    pub q: Option<String>,
}

/// Response confirming the notification was queued.
#[derive(Debug, Serialize)]
pub struct SendResult {
    pub message: &'static str,
}

/// Queue background log writes for a notification.
///
/// When `q` is supplied, a `found query` line is queued first; a `message to`
/// line for the email is always queued. Both run after this response has been
/// sent, and their outcome is invisible to the caller.
#[instrument(skip(state), fields(email = %email))]
pub async fn send(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Query(params): Query<NotifyParams>,
) -> Json<SendResult> {
    if let Some(q) = &params.q {
        state.notifications().append(format!("found query: {q}"));
    }
    state.notifications().append(format!("message to {email}"));

    Json(SendResult {
        message: "Message sent",
    })
}
