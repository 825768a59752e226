//! Multipart upload handler.

use axum::{Json, extract::Multipart};
use serde::Serialize;

use crate::error::{AppError, Result};

/// What the server observed about one uploaded part.
#[derive(Debug, Serialize)]
pub struct UploadedFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Size of the payload in bytes.
    pub size: usize,
}

/// Summary of an upload request.
#[derive(Debug, Serialize)]
pub struct UploadSummary {
    pub files: Vec<UploadedFile>,
}

/// Accept one or more uploaded binary payloads and report their size/name.
///
/// The payloads themselves are read and discarded; nothing is persisted.
///
/// # Errors
///
/// Fails with `BadRequest` if the multipart stream is malformed or contains
/// no parts at all.
pub async fn upload(mut multipart: Multipart) -> Result<Json<UploadSummary>> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        tracing::debug!(
            filename = filename.as_deref().unwrap_or("<unnamed>"),
            size = data.len(),
            "received upload part"
        );
        files.push(UploadedFile {
            filename,
            content_type,
            size: data.len(),
        });
    }

    if files.is_empty() {
        return Err(AppError::BadRequest("no file supplied".to_string()));
    }
    Ok(Json(UploadSummary { files }))
}
