// Library root for the TDS Virtual TA API

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod matcher;
pub mod middleware;
pub mod models;

// Re-export commonly used types
pub use app::create_router;
pub use error::ApiError;
pub use matcher::{KeywordMatcher, QuestionMatcher};
pub use models::{ApiResponse, Link, StudentQuestion};
