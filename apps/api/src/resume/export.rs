use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};

use crate::errors::AppError;

const DEFAULT_STEM: &str = "resume";

/// Builds the download for an optimized resume: plain text served as an attachment.
pub fn export_resume(content: &str, file_name: Option<&str>) -> Result<Response, AppError> {
    if content.trim().is_empty() {
        return Err(AppError::Validation(
            "No optimized resume generated yet".to_string(),
        ));
    }

    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_file_name(file_name)
    );
    let disposition = HeaderValue::from_str(&disposition)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid content disposition: {e}")))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        content.to_string(),
    )
        .into_response())
}

/// `optimized-<stem>.txt`, where the stem is the uploaded name without its
/// extension, restricted to filename-safe characters.
pub fn export_file_name(file_name: Option<&str>) -> String {
    let stem = file_name
        .map(|name| match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name,
        })
        .map(|stem| {
            stem.chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                        c
                    } else {
                        '_'
                    }
                })
                .collect::<String>()
        })
        .filter(|stem| !stem.trim_matches('_').is_empty())
        .unwrap_or_else(|| DEFAULT_STEM.to_string());

    format!("optimized-{stem}.txt")
}
