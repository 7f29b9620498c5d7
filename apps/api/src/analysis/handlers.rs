//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::job_description::JobDescription;
use crate::analysis::matching::{calculate_keyword_match, KeywordMatch};
use crate::analysis::optimizer::generate_optimized_resume;
use crate::analysis::report::{analyze, AnalysisReport, AnalyzeRequest};
use crate::analysis::scoring::{calculate_ats_score, ScoreResult, ScoreSummary};
use crate::errors::{AppError, AppJson};
use crate::models::keyword::Keyword;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub keywords: Vec<Keyword>,
    pub char_count: usize,
    pub truncated: bool,
    pub backend: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    pub keywords: Vec<Keyword>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume_text: String,
    pub keywords: Vec<Keyword>,
    pub optimized_content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: ScoreResult,
    pub summary: ScoreSummary,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeRequest {
    pub resume_text: String,
    pub keywords: Vec<Keyword>,
}

#[derive(Debug, Serialize)]
pub struct OptimizeResponse {
    pub optimized_resume: String,
    pub added_keywords: Vec<Keyword>,
    pub score: ScoreResult,
    pub summary: ScoreSummary,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/keywords/extract
pub async fn handle_extract(
    State(state): State<AppState>,
    AppJson(request): AppJson<ExtractRequest>,
) -> Result<Json<ExtractResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let jd = JobDescription::new(
        &request.job_description,
        state.config.max_job_description_chars,
    );
    let keywords = state.extractor.extract(&jd.text).await;

    Ok(Json(ExtractResponse {
        keywords,
        char_count: jd.char_count,
        truncated: jd.truncated,
        backend: state.extractor.backend().to_string(),
    }))
}

/// POST /api/v1/keywords/match
pub async fn handle_match(
    AppJson(request): AppJson<MatchRequest>,
) -> Result<Json<KeywordMatch>, AppError> {
    validate_keywords(&request.keywords)?;
    Ok(Json(calculate_keyword_match(
        &request.resume_text,
        &request.keywords,
    )))
}

/// POST /api/v1/score
pub async fn handle_score(
    AppJson(request): AppJson<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    validate_keywords(&request.keywords)?;

    let score = calculate_ats_score(
        &request.resume_text,
        &request.keywords,
        request.optimized_content.as_deref(),
    );

    Ok(Json(ScoreResponse {
        summary: ScoreSummary::from_result(&score),
        score,
    }))
}

/// POST /api/v1/optimize
///
/// Splices missing keywords into the resume and re-scores it.
pub async fn handle_optimize(
    AppJson(request): AppJson<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>, AppError> {
    if request.resume_text.is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    validate_keywords(&request.keywords)?;

    let optimization = generate_optimized_resume(&request.resume_text, &request.keywords);
    let score = calculate_ats_score(
        &request.resume_text,
        &request.keywords,
        Some(&optimization.optimized_resume),
    );
    tracing::info!(
        added = optimization.added_keywords.len(),
        improvement = score.improvement(),
        "resume optimized"
    );

    Ok(Json(OptimizeResponse {
        optimized_resume: optimization.optimized_resume,
        added_keywords: optimization.added_keywords,
        summary: ScoreSummary::from_result(&score),
        score,
    }))
}

/// POST /api/v1/analyze
///
/// Full page flow: extract → match → score, plus optimize when requested.
pub async fn handle_analyze(
    State(state): State<AppState>,
    AppJson(request): AppJson<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let report = analyze(&request, state.extractor.as_ref(), &state.config).await;
    Ok(Json(report))
}

/// Client-supplied keywords need text and a relevance inside 0 – 1.
fn validate_keywords(keywords: &[Keyword]) -> Result<(), AppError> {
    for keyword in keywords {
        if keyword.text.trim().is_empty() {
            return Err(AppError::Validation(
                "keyword text cannot be empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&keyword.relevance) {
            return Err(AppError::Validation(format!(
                "relevance for '{}' must be between 0 and 1, got {}",
                keyword.text, keyword.relevance
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::keyword::KeywordCategory;

    #[test]
    fn test_validate_keywords_accepts_bounds() {
        let keywords = vec![
            Keyword::new("Rust", 0.0, KeywordCategory::Skill),
            Keyword::new("Go", 1.0, KeywordCategory::Skill),
        ];
        assert!(validate_keywords(&keywords).is_ok());
    }

    #[test]
    fn test_validate_keywords_rejects_out_of_range_relevance() {
        let keywords = vec![Keyword::new("Rust", 1.5, KeywordCategory::Skill)];
        assert!(matches!(
            validate_keywords(&keywords),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_keywords_rejects_nan_relevance() {
        let keywords = vec![Keyword::new("Rust", f64::NAN, KeywordCategory::Skill)];
        assert!(validate_keywords(&keywords).is_err());
    }

    #[test]
    fn test_validate_keywords_rejects_blank_text() {
        let keywords = vec![Keyword::new("  ", 0.5, KeywordCategory::Other)];
        assert!(validate_keywords(&keywords).is_err());
    }
}
