//! Full analysis pass: job description → keywords → match → score → optional optimize.
//!
//! Mirrors the three-step page flow (upload resume, add job description,
//! analyze & optimize) in one request.

use serde::{Deserialize, Serialize};

use crate::analysis::extractor::KeywordExtractor;
use crate::analysis::job_description::JobDescription;
use crate::analysis::matching::{calculate_keyword_match, KeywordMatch};
use crate::analysis::optimizer::generate_optimized_resume;
use crate::analysis::scoring::{calculate_ats_score, ScoreResult, ScoreSummary};
use crate::config::Config;
use crate::models::keyword::Keyword;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub optimize: bool,
}

/// Which of the three steps are complete and which one the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowProgress {
    pub resume_uploaded: bool,
    pub job_description_ready: bool,
    pub optimized: bool,
    /// 1 = upload resume, 2 = add job description, 3 = analyze & optimize
    pub active_step: u8,
}

impl WorkflowProgress {
    pub fn new(resume_uploaded: bool, job_description_ready: bool, optimized: bool) -> Self {
        let active_step = match (resume_uploaded, job_description_ready) {
            (false, _) => 1,
            (true, false) => 2,
            (true, true) => 3,
        };
        WorkflowProgress {
            resume_uploaded,
            job_description_ready,
            optimized,
            active_step,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub keywords: Vec<Keyword>,
    pub keyword_match: KeywordMatch,
    pub score: ScoreResult,
    pub summary: ScoreSummary,
    pub optimized_resume: Option<String>,
    pub added_keywords: Vec<Keyword>,
    pub job_description_truncated: bool,
    pub progress: WorkflowProgress,
    pub extractor_backend: String,
}

pub async fn analyze(
    request: &AnalyzeRequest,
    extractor: &dyn KeywordExtractor,
    config: &Config,
) -> AnalysisReport {
    let job_description =
        JobDescription::new(&request.job_description, config.max_job_description_chars);
    let ready = job_description.is_ready(config.min_job_description_chars);

    let keywords = if ready {
        extractor.extract(&job_description.text).await
    } else {
        Vec::new()
    };

    let resume_text = request.resume_text.as_str();
    let keyword_match = calculate_keyword_match(resume_text, &keywords);

    let optimization = (request.optimize && !resume_text.is_empty())
        .then(|| generate_optimized_resume(resume_text, &keywords));

    let score = calculate_ats_score(
        resume_text,
        &keywords,
        optimization.as_ref().map(|o| o.optimized_resume.as_str()),
    );

    tracing::info!(
        keywords = keywords.len(),
        original = score.original_score,
        optimized = score.optimized_score,
        "analysis complete"
    );

    let progress = WorkflowProgress::new(!resume_text.is_empty(), ready, optimization.is_some());
    let (optimized_resume, added_keywords) = match optimization {
        Some(o) => (Some(o.optimized_resume), o.added_keywords),
        None => (None, Vec::new()),
    };

    AnalysisReport {
        summary: ScoreSummary::from_result(&score),
        keywords,
        keyword_match,
        score,
        optimized_resume,
        added_keywords,
        job_description_truncated: job_description.truncated,
        progress,
        extractor_backend: extractor.backend().to_string(),
    }
}
