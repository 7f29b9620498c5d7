use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text recovered from an uploaded resume file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size_bytes: usize,
    pub content: String,
    /// true when the content is the canned sample rather than the file's own text.
    pub simulated: bool,
    pub parsed_at: DateTime<Utc>,
}
