use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::{sync::Arc, time::Duration};

use crate::{
    handlers::{health_check, questions::handle_question},
    matcher::QuestionMatcher,
    middleware::create_middleware_stack,
};

/// Create the Axum router with all endpoints and middleware
pub fn create_router(matcher: Arc<dyn QuestionMatcher>, request_timeout: Duration) -> Router {
    Router::new()
        // Health check endpoint
        .route("/", get(health_check))
        // Question answering, with and without the trailing slash
        .route("/api/", post(handle_question))
        .route("/api", post(handle_question))
        // Add shared state (the answer matcher)
        .with_state(matcher)
        // Base64 images are accepted at any size
        .layer(DefaultBodyLimit::disable())
        // Apply middleware stack
        .layer(create_middleware_stack(request_timeout))
}
