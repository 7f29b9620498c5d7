use serde::{Deserialize, Serialize};

use crate::models::keyword::Keyword;

/// Keywords split by whether the resume already contains them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub matched: Vec<Keyword>,
    pub unmatched: Vec<Keyword>,
}

/// Partitions `keywords` by case-insensitive containment in `resume_text`.
/// Input order is preserved on both sides.
pub fn calculate_keyword_match(resume_text: &str, keywords: &[Keyword]) -> KeywordMatch {
    let resume_lower = resume_text.to_lowercase();

    let (matched, unmatched): (Vec<Keyword>, Vec<Keyword>) = keywords
        .iter()
        .cloned()
        .partition(|keyword| keyword.found_in(&resume_lower));

    KeywordMatch { matched, unmatched }
}
