//! Enumerated model-name handler.

use axum::{Json, extract::Path};
use serde::Serialize;

use pantry_core::ModelName;

/// Response for a model lookup.
#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub model_name: ModelName,
    pub message: &'static str,
}

/// Return the fixed message for a known model.
///
/// Unknown names never reach this handler: path deserialization into the
/// closed [`ModelName`] enum rejects them first.
pub async fn show(Path(name): Path<ModelName>) -> Json<ModelInfo> {
    Json(ModelInfo {
        model_name: name,
        message: name.message(),
    })
}
