use bytes::Bytes;

use crate::errors::AppError;

/// Extensions the upload widget accepts, in the order they are listed to users.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx", ".txt"];

pub const ACCEPTED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// A file received from the client, before parsing.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl Upload {
    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn has_extension(&self, extension: &str) -> bool {
        self.file_name.to_lowercase().ends_with(extension)
    }

    /// MIME type without parameters, lowercased.
    pub fn mime_essence(&self) -> Option<String> {
        self.content_type.as_deref().map(|ct| {
            ct.split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_lowercase()
        })
    }
}

/// Checks type then size, the order the upload widget reports them.
pub fn validate_upload(upload: &Upload, max_bytes: usize) -> Result<(), AppError> {
    let extension_ok = ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| upload.has_extension(ext));
    let content_type_ok = upload
        .mime_essence()
        .is_some_and(|mime| ACCEPTED_CONTENT_TYPES.contains(&mime.as_str()));

    if !extension_ok && !content_type_ok {
        return Err(AppError::UnsupportedFileType(format!(
            "Invalid file type. Please upload {} files.",
            ACCEPTED_EXTENSIONS.join(" or ")
        )));
    }

    if upload.size() > max_bytes {
        return Err(size_exceeded(max_bytes));
    }

    Ok(())
}

/// The error reported for any upload over `max_bytes`, however it is detected.
pub fn size_exceeded(max_bytes: usize) -> AppError {
    AppError::PayloadTooLarge(format!(
        "File size exceeds {} limit.",
        describe_limit(max_bytes)
    ))
}

/// `10MB` for whole mebibytes, a byte count otherwise.
pub fn describe_limit(max_bytes: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if max_bytes >= MIB && max_bytes % MIB == 0 {
        format!("{}MB", max_bytes / MIB)
    } else {
        format!("{max_bytes} bytes")
    }
}
