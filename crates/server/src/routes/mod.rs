//! HTTP route handlers for the catalog API.
//!
//! # Route Structure
//!
//! ```text
//! GET   /                        - Fixed greeting
//! GET   /health                  - Health check
//!
//! # Items
//! GET   /items/                  - Item listing stub, echoes the ads cookie
//! POST  /items/                  - Validate and echo an item with price+tax
//! GET   /items/{id}              - Lookup by identifier (418 for "yolo")
//! PUT   /items/{id}              - Full replace
//! PATCH /items/{id}              - Partial merge of supplied fields
//!
//! # Offers
//! POST  /offers/                 - Validate and echo an offer
//! POST  /index-weights/          - Validate and echo integer-keyed weights
//! POST  /images/multiple         - Validate and echo a list of images
//!
//! # Users
//! POST  /user/                   - Create a user (password never echoed)
//! GET   /users/me                - Current-user stub
//! GET   /users/{user_id}         - Echo a user identifier
//! GET   /users/{user_id}/items/{item_id} - Item scoped to an owner
//!
//! # Misc
//! GET   /models/{name}           - Enumerated model name, fixed messages
//! GET   /files/{*path}           - Remaining path segments as one string
//! POST  /uploadfile/             - Multipart upload, reports name/size
//! POST  /send-notification/{email} - Queues background log writes
//! ```

pub mod files;
pub mod home;
pub mod items;
pub mod models;
pub mod notifications;
pub mod uploads;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the item routes router.
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(items::index).post(items::create))
        .route(
            "/{id}",
            get(items::show).put(items::replace).patch(items::merge),
        )
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(users::me))
        .route("/{user_id}", get(users::show))
        .route("/{user_id}/items/{item_id}", get(users::item_for_user))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Greeting and health
        .route("/", get(home::greeting))
        .route("/health", get(home::health))
        // Item routes
        .nest("/items", item_routes())
        .route("/offers/", post(items::create_offer))
        .route("/index-weights/", post(items::create_index_weights))
        .route("/images/multiple", post(items::create_multiple_images))
        // User routes
        .route("/user/", post(users::create))
        .nest("/users", user_routes())
        // Misc routes
        .route("/models/{name}", get(models::show))
        .route("/files/{*path}", get(files::show))
        .route("/uploadfile/", post(uploads::upload))
        .route("/send-notification/{email}", post(notifications::send))
}
