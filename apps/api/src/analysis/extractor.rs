//! Keyword extraction — pluggable, trait-based extractor that turns a job description
//! into a list of categorized keywords.
//!
//! Default: `DictionaryKeywordExtractor` (fixed word lists, case-insensitive substring scan).
//!
//! `AppState` holds an `Arc<dyn KeywordExtractor>`, built at startup from config.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::analysis::dictionary::DICTIONARY;
use crate::models::keyword::Keyword;

/// Words shorter than this (after stripping punctuation) do not count as content.
const MIN_WORD_LEN: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The extractor trait. Implement this to swap backends without touching
/// the handlers that call it.
#[async_trait]
pub trait KeywordExtractor: Send + Sync {
    async fn extract(&self, job_description: &str) -> Vec<Keyword>;

    /// Backend label reported alongside extracted keywords.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// DictionaryKeywordExtractor
// ────────────────────────────────────────────────────────────────────────────

/// Scans the description for every dictionary term and assigns each hit a
/// relevance drawn from `[0.5, 1.0)`.
pub struct DictionaryKeywordExtractor {
    rng: Mutex<StdRng>,
    limit: usize,
}

impl DictionaryKeywordExtractor {
    pub fn new(limit: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        DictionaryKeywordExtractor {
            rng: Mutex::new(rng),
            limit,
        }
    }
}

#[async_trait]
impl KeywordExtractor for DictionaryKeywordExtractor {
    async fn extract(&self, job_description: &str) -> Vec<Keyword> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let keywords = extract_keywords(job_description, self.limit, &mut *rng);
        tracing::debug!(count = keywords.len(), "extracted keywords");
        keywords
    }

    fn backend(&self) -> &'static str {
        "dictionary"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core extraction
// ────────────────────────────────────────────────────────────────────────────

/// Returns every dictionary term contained in `job_description`, in dictionary
/// order, deduplicated case-insensitively and capped at `limit`.
///
/// Nothing is extracted unless the description has at least one word of
/// three or more word characters.
pub fn extract_keywords<R: Rng + ?Sized>(
    job_description: &str,
    limit: usize,
    rng: &mut R,
) -> Vec<Keyword> {
    if !has_content_word(job_description) {
        return Vec::new();
    }

    let description_lower = job_description.to_lowercase();
    let mut seen: HashSet<String> = HashSet::new();
    let mut keywords = Vec::new();

    for (category, terms) in DICTIONARY {
        for term in terms {
            let term_lower = term.to_lowercase();
            if description_lower.contains(&term_lower) && seen.insert(term_lower) {
                keywords.push(Keyword::new(*term, rng.random_range(0.5..1.0), category));
            }
        }
    }

    keywords.truncate(limit);
    keywords
}

fn has_content_word(text: &str) -> bool {
    text.split_whitespace().any(|word| {
        word.chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .count()
            >= MIN_WORD_LEN
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::keyword::KeywordCategory;

    const FRONTEND_JD: &str = r#"
        We need a Senior React developer with 5 years experience in TypeScript and AWS.
        Jira a plus.
    "#;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn texts(keywords: &[Keyword]) -> Vec<&str> {
        keywords.iter().map(|k| k.text.as_str()).collect()
    }

    #[test]
    fn test_empty_description_yields_nothing() {
        assert!(extract_keywords("", 20, &mut rng()).is_empty());
    }

    #[test]
    fn test_only_short_words_yields_nothing() {
        // "VP" and "C#" are dictionary terms, but no word has three word characters.
        assert!(extract_keywords("VP, C# go!", 20, &mut rng()).is_empty());
    }

    #[test]
    fn test_extracts_in_dictionary_order() {
        let keywords = extract_keywords(FRONTEND_JD, 20, &mut rng());
        assert_eq!(
            texts(&keywords),
            vec!["TypeScript", "React", "AWS", "Jira", "years", "experience", "senior"]
        );
    }

    #[test]
    fn test_categories_follow_source_list() {
        let keywords = extract_keywords(FRONTEND_JD, 20, &mut rng());
        let category_of = |text: &str| {
            keywords
                .iter()
                .find(|k| k.text == text)
                .map(|k| k.category)
                .unwrap()
        };
        assert_eq!(category_of("React"), KeywordCategory::Skill);
        assert_eq!(category_of("Jira"), KeywordCategory::Tool);
        assert_eq!(category_of("senior"), KeywordCategory::Experience);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let keywords = extract_keywords("must know KUBERNETES and docker well", 20, &mut rng());
        let found = texts(&keywords);
        assert!(found.contains(&"Docker"));
        assert!(found.contains(&"Kubernetes"));
    }

    #[test]
    fn test_substring_hits_are_reported() {
        // "JavaScript" contains "Java"; the scan is substring based.
        let keywords = extract_keywords("Strong JavaScript background", 20, &mut rng());
        let found = texts(&keywords);
        assert!(found.contains(&"JavaScript"));
        assert!(found.contains(&"Java"));
    }

    #[test]
    fn test_each_term_reported_once() {
        let keywords = extract_keywords("Python python PYTHON scripting", 20, &mut rng());
        assert_eq!(keywords.iter().filter(|k| k.text == "Python").count(), 1);
    }

    #[test]
    fn test_relevance_within_half_to_one() {
        let jd = "Python, Java, Docker, Kubernetes, AWS, Jira, Scrum, senior team lead";
        for kw in extract_keywords(jd, 20, &mut rng()) {
            assert!(
                (0.5..1.0).contains(&kw.relevance),
                "relevance {} out of range",
                kw.relevance
            );
        }
    }

    #[test]
    fn test_limit_truncates() {
        let jd = "JavaScript TypeScript Python Ruby PHP Swift Kotlin React Angular Vue \
                  Django Flask HTML CSS MongoDB PostgreSQL MySQL Docker Kubernetes GraphQL \
                  Jira Confluence Slack";
        let keywords = extract_keywords(jd, 20, &mut rng());
        assert_eq!(keywords.len(), 20);
        assert!(keywords.iter().all(|k| k.category == KeywordCategory::Skill));

        let capped = extract_keywords(jd, 5, &mut rng());
        assert_eq!(capped.len(), 5);
    }

    #[test]
    fn test_same_seed_same_relevance() {
        let a = extract_keywords(FRONTEND_JD, 20, &mut StdRng::seed_from_u64(42));
        let b = extract_keywords(FRONTEND_JD, 20, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_dictionary_extractor_respects_limit() {
        let extractor = DictionaryKeywordExtractor::new(3, Some(1));
        let keywords = extractor.extract(FRONTEND_JD).await;
        assert_eq!(keywords.len(), 3);
        assert_eq!(extractor.backend(), "dictionary");
    }
}
