//! Request extractors.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON extractor that keeps the raw payload around for error reporting.
///
/// Unlike `axum::Json`, a body that fails deserialization is rendered as a
/// structured 422 listing the failures together with the offending payload,
/// rather than a bare text rejection.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => Ok(Self(value)),
            Err(err) => {
                let raw = String::from_utf8_lossy(&bytes).into_owned();
                Err(AppError::validation(&err, raw))
            }
        }
    }
}
