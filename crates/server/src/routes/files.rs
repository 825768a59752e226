//! File-path echo handler.

use axum::{Json, extract::Path};
use serde::Serialize;

/// Response carrying the requested path.
#[derive(Debug, Serialize)]
pub struct FilePath {
    pub file_path: String,
}

/// Accept the remaining path segments as a single string and echo them.
pub async fn show(Path(path): Path<String>) -> Json<FilePath> {
    Json(FilePath { file_path: path })
}
