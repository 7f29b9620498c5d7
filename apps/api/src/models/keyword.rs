use serde::{Deserialize, Serialize};

/// Dictionary a keyword was found in. Drives its scoring weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordCategory {
    Skill,
    Tool,
    Qualification,
    Experience,
    Other,
}

impl KeywordCategory {
    /// Multiplier applied to a keyword's relevance when scoring.
    pub fn weight(self) -> f64 {
        match self {
            KeywordCategory::Skill => 1.5,
            KeywordCategory::Tool => 1.2,
            KeywordCategory::Qualification => 1.3,
            KeywordCategory::Experience => 1.0,
            KeywordCategory::Other => 0.8,
        }
    }

    /// Capitalized name used for lines in a generated `ADDITIONAL SKILLS` section.
    pub fn label(self) -> &'static str {
        match self {
            KeywordCategory::Skill => "Skill",
            KeywordCategory::Tool => "Tool",
            KeywordCategory::Qualification => "Qualification",
            KeywordCategory::Experience => "Experience",
            KeywordCategory::Other => "Other",
        }
    }
}

/// A term extracted from a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub text: String,
    /// 0.0 – 1.0
    pub relevance: f64,
    pub category: KeywordCategory,
}

impl Keyword {
    pub fn new(text: impl Into<String>, relevance: f64, category: KeywordCategory) -> Self {
        Keyword {
            text: text.into(),
            relevance,
            category,
        }
    }

    /// `weight(category) × relevance`: what this keyword is worth when matched.
    pub fn weighted_value(&self) -> f64 {
        self.category.weight() * self.relevance
    }

    /// Case-insensitive substring test against already-lowercased text.
    pub fn found_in(&self, text_lower: &str) -> bool {
        text_lower.contains(&self.text.to_lowercase())
    }
}
