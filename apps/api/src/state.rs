use std::sync::Arc;

use crate::analysis::extractor::{DictionaryKeywordExtractor, KeywordExtractor};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable keyword extractor. Default: DictionaryKeywordExtractor.
    pub extractor: Arc<dyn KeywordExtractor>,
}

impl AppState {
    /// State with the dictionary extractor, seeded from config when a seed is set.
    pub fn new(config: Config) -> Self {
        let extractor = Arc::new(DictionaryKeywordExtractor::new(
            config.keyword_limit,
            config.relevance_seed,
        ));
        AppState { config, extractor }
    }
}
