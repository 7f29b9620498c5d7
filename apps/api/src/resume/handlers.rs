//! Axum route handlers for resume upload and export.

use std::time::Duration;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Deserialize;

use crate::errors::{AppError, AppJson};
use crate::models::resume::ParsedResume;
use crate::resume::export::export_resume;
use crate::resume::parser::parse_resume;
use crate::resume::upload::{size_exceeded, validate_upload, Upload};
use crate::state::AppState;

/// Multipart field carrying the resume file.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub content: String,
    pub file_name: Option<String>,
}

/// POST /api/v1/resume/upload
///
/// Accepts a multipart form with a `file` field and returns the recovered text.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParsedResume>, AppError> {
    let max_bytes = state.config.max_upload_bytes;
    let upload = read_upload(&mut multipart)
        .await
        .map_err(|e| upload_error(e, max_bytes))?
        .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    validate_upload(&upload, max_bytes)?;

    let parsed = parse_resume(&upload, Duration::from_millis(state.config.parse_delay_ms)).await;
    tracing::info!(
        file = %parsed.file_name,
        bytes = parsed.size_bytes,
        simulated = parsed.simulated,
        "resume parsed"
    );

    Ok(Json(parsed))
}

/// POST /api/v1/resume/export
pub async fn handle_export(
    AppJson(request): AppJson<ExportRequest>,
) -> Result<Response, AppError> {
    export_resume(&request.content, request.file_name.as_deref())
}

async fn read_upload(multipart: &mut Multipart) -> Result<Option<Upload>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(String::from);
        let data = field.bytes().await?;

        return Ok(Some(Upload {
            file_name,
            content_type,
            data,
        }));
    }
    Ok(None)
}

/// A body cut off by the request limit is an oversized file; anything else
/// means the upload could not be read.
fn upload_error(err: MultipartError, max_bytes: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return size_exceeded(max_bytes);
    }
    tracing::error!("Error reading resume upload: {}", err.body_text());
    AppError::Parse("Failed to parse resume file".to_string())
}
