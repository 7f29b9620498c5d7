// Resume intake: upload validation, text recovery and export of the optimized text.
// Only plain text is read; other document types fall back to a canned sample.

pub mod export;
pub mod handlers;
pub mod parser;
pub mod sample;
pub mod upload;
