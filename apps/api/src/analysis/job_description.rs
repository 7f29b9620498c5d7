use serde::Serialize;

/// A job description as the service sees it: cut to the character limit.
#[derive(Debug, Clone, Serialize)]
pub struct JobDescription {
    pub text: String,
    pub char_count: usize,
    pub truncated: bool,
}

impl JobDescription {
    pub fn new(raw: &str, max_chars: usize) -> Self {
        let total = raw.chars().count();
        if total <= max_chars {
            return JobDescription {
                text: raw.to_string(),
                char_count: total,
                truncated: false,
            };
        }

        JobDescription {
            text: raw.chars().take(max_chars).collect(),
            char_count: max_chars,
            truncated: true,
        }
    }

    /// Long enough to run extraction against.
    pub fn is_ready(&self, min_chars: usize) -> bool {
        self.char_count > min_chars
    }
}
