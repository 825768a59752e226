//! Layered user shapes.
//!
//! Three shapes for the same user, one per trust boundary:
//!
//! - [`UserIn`] - what the caller sends, carrying the raw password
//! - [`UserOut`] - what the API returns, carrying no secret at all
//! - [`UserInDb`] - the storage-facing shape, carrying only the derived hash
//!
//! The hashed secret exists in `UserInDb` and nowhere else; the raw password
//! exists in `UserIn` and nowhere else.

use serde::{Deserialize, Serialize};

use crate::types::email::Email;

/// Incoming user payload with the raw password.
#[derive(Debug, Clone, Deserialize)]
pub struct UserIn {
    pub username: String,
    pub password: String,
    pub email: Email,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Public user shape returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOut {
    pub username: String,
    pub email: Email,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Storage-facing user shape with the derived password hash.
///
/// Deliberately not `Serialize`: this shape never crosses the API boundary.
#[derive(Debug, Clone)]
pub struct UserInDb {
    pub username: String,
    pub email: Email,
    pub full_name: Option<String>,
    pub hashed_password: String,
}

impl UserInDb {
    /// Derive the stored shape from an incoming user, hashing the password.
    #[must_use]
    pub fn from_input(user: UserIn) -> Self {
        let hashed_password = hash_password(&user.password);
        Self {
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            hashed_password,
        }
    }
}

impl From<UserInDb> for UserOut {
    fn from(user: UserInDb) -> Self {
        Self {
            username: user.username,
            email: user.email,
            full_name: user.full_name,
        }
    }
}

/// Placeholder password derivation.
///
/// Not a real KDF; it only demonstrates that the raw password is transformed
/// before it reaches the stored shape.
fn hash_password(raw: &str) -> String {
    format!("supersecret{raw}")
}
