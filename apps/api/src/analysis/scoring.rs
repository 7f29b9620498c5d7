//! ATS scoring — weighted substring-match percentage of a resume against extracted keywords.
//!
//! Algorithm:
//! 1. Each keyword is worth `weight(category) × relevance`.
//! 2. A text earns a keyword's worth when it contains the keyword (case-insensitive).
//! 3. score = earned / Σ(worth) × 100, clamped to 0 – 100.

use serde::{Deserialize, Serialize};

use crate::models::keyword::Keyword;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCounts {
    pub found: usize,
    pub total: usize,
}

/// Scores for the uploaded resume and, when present, its optimized rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub original_score: f64, // 0 – 100
    pub optimized_score: f64, // 0 – 100
    pub matches: MatchCounts,
}

impl ScoreResult {
    fn empty(keyword_count: usize) -> Self {
        ScoreResult {
            original_score: 0.0,
            optimized_score: 0.0,
            matches: MatchCounts {
                found: 0,
                total: keyword_count.max(1),
            },
        }
    }

    /// Points gained by optimizing. Zero or negative means no gain.
    pub fn improvement(&self) -> f64 {
        self.optimized_score - self.original_score
    }

    /// Fraction of keywords found, for the progress bar.
    pub fn match_ratio(&self) -> f64 {
        if self.matches.total == 0 {
            return 0.0;
        }
        self.matches.found as f64 / self.matches.total as f64
    }
}

/// Qualitative reading of a score, as shown on the score card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Moderate,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Excellent
        } else if score >= 60.0 {
            ScoreBand::Good
        } else if score >= 40.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Low
        }
    }

    /// Gauge colour.
    pub fn color(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "#39FF14",
            ScoreBand::Good => "#00FFFF",
            ScoreBand::Moderate => "#FFFF00",
            ScoreBand::Low => "#FF00FF",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent match for this position. Your optimized resume is highly likely to pass ATS screening.",
            ScoreBand::Good => "Good match for this position. Your resume has a good chance of passing ATS screening.",
            ScoreBand::Moderate => "Moderate match. Consider adding more relevant keywords to improve your chances.",
            ScoreBand::Low => "Low match. Your resume may not pass ATS filters. Significant optimization recommended.",
        }
    }
}

/// Band, colour and message for a score, flattened for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub band: ScoreBand,
    pub color: String,
    pub message: String,
    /// Rounded optimized score, as displayed in the gauge.
    pub display_score: u32,
    pub improvement: f64,
    pub match_ratio: f64,
}

impl ScoreSummary {
    pub fn from_result(result: &ScoreResult) -> Self {
        let band = ScoreBand::from_score(result.optimized_score);
        ScoreSummary {
            band,
            color: band.color().to_string(),
            message: band.message().to_string(),
            display_score: result.optimized_score.round() as u32,
            improvement: result.improvement(),
            match_ratio: result.match_ratio(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores `resume_text` (and optionally its optimized rewrite) against `keywords`.
///
/// An absent or empty `optimized_content` reports the original score in both slots.
pub fn calculate_ats_score(
    resume_text: &str,
    keywords: &[Keyword],
    optimized_content: Option<&str>,
) -> ScoreResult {
    if resume_text.is_empty() || keywords.is_empty() {
        return ScoreResult::empty(keywords.len());
    }

    let optimized_content = optimized_content.filter(|text| !text.is_empty());

    let resume_lower = resume_text.to_lowercase();
    let optimized_lower = optimized_content.map(str::to_lowercase);

    let max_possible: f64 = keywords.iter().map(Keyword::weighted_value).sum();

    let (original_earned, original_found) = earned(&resume_lower, keywords);
    let original_score = percentage(original_earned, max_possible);

    let (optimized_score, found) = match optimized_lower.as_deref() {
        Some(text) => {
            let (optimized_earned, optimized_found) = earned(text, keywords);
            (percentage(optimized_earned, max_possible), optimized_found)
        }
        None => (original_score, original_found),
    };

    ScoreResult {
        original_score,
        optimized_score,
        matches: MatchCounts {
            found,
            total: keywords.len(),
        },
    }
}

/// Weighted value and count of keywords contained in `text_lower`.
fn earned(text_lower: &str, keywords: &[Keyword]) -> (f64, usize) {
    keywords
        .iter()
        .filter(|keyword| keyword.found_in(text_lower))
        .fold((0.0, 0), |(value, count), keyword| {
            (value + keyword.weighted_value(), count + 1)
        })
}

fn percentage(earned: f64, max_possible: f64) -> f64 {
    if max_possible <= 0.0 {
        return 0.0;
    }
    ((earned / max_possible) * 100.0).clamp(0.0, 100.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::keyword::KeywordCategory;

    fn keywords() -> Vec<Keyword> {
        vec![
            Keyword::new("React", 1.0, KeywordCategory::Skill),
            Keyword::new("Jira", 1.0, KeywordCategory::Tool),
        ]
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_resume_scores_zero() {
        let result = calculate_ats_score("", &keywords(), None);
        assert_eq!(result.original_score, 0.0);
        assert_eq!(result.optimized_score, 0.0);
        assert_eq!(result.matches, MatchCounts { found: 0, total: 2 });
    }

    #[test]
    fn test_no_keywords_reports_total_of_one() {
        let result = calculate_ats_score("React developer", &[], None);
        assert_eq!(result.matches, MatchCounts { found: 0, total: 1 });
        assert_eq!(result.original_score, 0.0);
    }

    #[test]
    fn test_weighted_partial_match() {
        // React (1.5) found, Jira (1.2) missing → 1.5 / 2.7
        let result = calculate_ats_score("Senior react developer", &keywords(), None);
        assert!(approx(result.original_score, 1.5 / 2.7 * 100.0));
        assert!(approx(result.optimized_score, result.original_score));
        assert_eq!(result.matches, MatchCounts { found: 1, total: 2 });
    }

    #[test]
    fn test_relevance_scales_contribution() {
        let keywords = vec![
            Keyword::new("React", 0.5, KeywordCategory::Skill),
            Keyword::new("Jira", 1.0, KeywordCategory::Tool),
        ];
        // React 0.75 found, Jira 1.2 missing → 0.75 / 1.95
        let result = calculate_ats_score("React", &keywords, None);
        assert!(approx(result.original_score, 0.75 / 1.95 * 100.0));
    }

    #[test]
    fn test_optimized_content_scored_separately() {
        let result = calculate_ats_score(
            "React developer",
            &keywords(),
            Some("React developer\n- Additional Tools: Jira"),
        );
        assert!(result.original_score < 100.0);
        assert!(approx(result.optimized_score, 100.0));
        assert_eq!(result.matches.found, 2);
        assert!(result.improvement() > 0.0);
    }

    #[test]
    fn test_empty_optimized_content_is_ignored() {
        let result = calculate_ats_score("React developer", &keywords(), Some(""));
        assert!(approx(result.optimized_score, result.original_score));
        assert_eq!(result.matches.found, 1);
    }

    #[test]
    fn test_zero_relevance_keywords_do_not_divide_by_zero() {
        let keywords = vec![Keyword::new("React", 0.0, KeywordCategory::Skill)];
        let result = calculate_ats_score("React", &keywords, None);
        assert_eq!(result.original_score, 0.0);
        assert_eq!(result.matches.found, 1);
    }

    #[test]
    fn test_score_bounded_0_to_100() {
        let keywords = vec![
            Keyword::new("Rust", 1.0, KeywordCategory::Skill),
            Keyword::new("Go", 0.6, KeywordCategory::Other),
        ];
        let result = calculate_ats_score("rust and go", &keywords, Some("RUST GO"));
        assert!(result.original_score <= 100.0 && result.original_score >= 0.0);
        assert!(result.optimized_score <= 100.0);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::from_score(80.0), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(79.9), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(60.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(40.0), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(39.9), ScoreBand::Low);
    }

    #[test]
    fn test_summary_rounds_display_score() {
        let result = ScoreResult {
            original_score: 40.0,
            optimized_score: 66.6,
            matches: MatchCounts { found: 3, total: 4 },
        };
        let summary = ScoreSummary::from_result(&result);
        assert_eq!(summary.band, ScoreBand::Good);
        assert_eq!(summary.display_score, 67);
        assert!(approx(summary.improvement, 26.6));
        assert!(approx(summary.match_ratio, 0.75));
    }
}
