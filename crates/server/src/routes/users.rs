//! User route handlers.

use axum::{
    Json,
    extract::{Path, Query},
};
use serde::{Deserialize, Serialize};

use pantry_core::{UserIn, UserInDb, UserOut};

use crate::extract::ValidatedJson;

/// Create a user.
///
/// The incoming payload carries the raw password; the storage-facing shape
/// derives a hash from it, and the response shape carries neither.
pub async fn create(ValidatedJson(user): ValidatedJson<UserIn>) -> Json<UserOut> {
    let stored = UserInDb::from_input(user);
    tracing::info!(username = %stored.username, "user saved");
    Json(UserOut::from(stored))
}

/// Fixed current-user payload.
#[derive(Debug, Serialize)]
pub struct CurrentUser {
    pub user_id: &'static str,
}

/// Current-user stub.
pub async fn me() -> Json<CurrentUser> {
    Json(CurrentUser {
        user_id: "the current user",
    })
}

/// A user identifier echoed back to the caller.
#[derive(Debug, Serialize)]
pub struct UserId {
    pub user_id: String,
}

/// Echo a user identifier.
pub async fn show(Path(user_id): Path<String>) -> Json<UserId> {
    Json(UserId { user_id })
}

/// Query parameters for an owner-scoped item lookup.
#[derive(Debug, Deserialize)]
pub struct UserItemParams {
    pub q: Option<String>,
    #[serde(default)]
    pub short: bool,
}

/// An item scoped to its owner, shaped by the query parameters.
#[derive(Debug, Serialize)]
pub struct UserItem {
    pub item_id: String,
    pub owner_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Look up an item for a given owner.
///
/// `q` is echoed when supplied; the long description is included unless the
/// caller asked for the short form.
pub async fn item_for_user(
    Path((user_id, item_id)): Path<(u64, String)>,
    Query(params): Query<UserItemParams>,
) -> Json<UserItem> {
    let description = (!params.short)
        .then(|| "This is an amazing item that has a long description".to_string());

    Json(UserItem {
        item_id,
        owner_id: user_id,
        q: params.q,
        description,
    })
}
