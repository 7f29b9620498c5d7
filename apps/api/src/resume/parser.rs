use std::time::Duration;

use chrono::Utc;

use crate::models::resume::ParsedResume;
use crate::resume::sample::SAMPLE_RESUME;
use crate::resume::upload::Upload;

/// Recovers resume text from an upload.
///
/// Plain-text files are decoded as UTF-8, with invalid bytes replaced by U+FFFD.
/// Other accepted document types are not parsed: after `simulated_delay` the
/// canned sample resume is returned instead.
pub async fn parse_resume(
    upload: &Upload,
    simulated_delay: Duration,
) -> ParsedResume {
    let (content, simulated) = if is_plain_text(upload) {
        (String::from_utf8_lossy(&upload.data).into_owned(), false)
    } else {
        tracing::debug!(
            file = %upload.file_name,
            delay_ms = simulated_delay.as_millis() as u64,
            "simulating document parse"
        );
        tokio::time::sleep(simulated_delay).await;
        (SAMPLE_RESUME.to_string(), true)
    };

    ParsedResume {
        file_name: upload.file_name.clone(),
        content_type: upload.content_type.clone(),
        size_bytes: upload.size(),
        content,
        simulated,
        parsed_at: Utc::now(),
    }
}

fn is_plain_text(upload: &Upload) -> bool {
    upload.mime_essence().as_deref() == Some("text/plain") || upload.has_extension(".txt")
}
