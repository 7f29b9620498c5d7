// Keyword analysis: dictionary extraction, substring scoring and skills-section splicing.
// Every operation is a pure function over text; handlers wrap them for the HTTP API.

pub mod dictionary;
pub mod extractor;
pub mod handlers;
pub mod job_description;
pub mod matching;
pub mod optimizer;
pub mod report;
pub mod scoring;
