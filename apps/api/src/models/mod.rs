pub mod keyword;
pub mod resume;
