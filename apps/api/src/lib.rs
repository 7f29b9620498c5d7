pub mod analysis;
pub mod config;
pub mod errors;
pub mod models;
pub mod resume;
pub mod routes;
pub mod state;
