use axum::{extract::Multipart, Json};

use crate::dto::generation_dto::UploadContextResponse;
use crate::error::{Error, Result};
use crate::services::extraction_service::{extract_text, UploadKind};

/// Accepts a `.txt` or `.pdf` upload in the `file` field and returns its text.
pub async fn upload_context(mut multipart: Multipart) -> Result<Json<UploadContextResponse>> {
    while let Some(field) = multipart.next_field().await.map_err(Error::Multipart)? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .ok_or_else(|| Error::BadRequest("Uploaded file has no name".into()))?;
        UploadKind::from_filename(&filename)?;

        let data = field.bytes().await.map_err(Error::Multipart)?;
        if data.is_empty() {
            return Err(Error::BadRequest("Uploaded file is empty".into()));
        }

        tracing::info!(filename = %filename, bytes = data.len(), "extracting context text");
        let text = extract_text(&filename, &data).await?;
        return Ok(Json(UploadContextResponse { filename, text }));
    }

    Err(Error::BadRequest("Missing 'file' field".into()))
}
