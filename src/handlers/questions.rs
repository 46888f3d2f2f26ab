// Question handlers
// HTTP handlers for answering student questions

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    matcher::QuestionMatcher,
    models::{ApiResponse, StudentQuestion},
};

/// Answer a student question
/// POST /api/
/// Accepts a question and an optional base64 image, returns an answer with links
pub async fn handle_question(
    State(matcher): State<Arc<dyn QuestionMatcher>>,
    payload: Result<Json<StudentQuestion>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ApiResponse>)> {
    let Json(query) = payload?;
    query.validate().map_err(ApiError::validation)?;

    info!("Received question: {}", query.text());
    if let Some(prefix) = query.image_log_prefix() {
        info!("Received image (first 50 chars of base64): {}...", prefix);
    }

    let response = matcher.answer(&query);

    info!("Answered with {} links", response.links.len());
    Ok((StatusCode::OK, Json(response)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::KeywordMatcher;
    use std::{io, sync::Mutex};

    /// Collects formatted log lines in memory.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    async fn answer_with_logs(query: StudentQuestion) -> (ApiResult<(StatusCode, Json<ApiResponse>)>, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let matcher: Arc<dyn QuestionMatcher> = Arc::new(KeywordMatcher::default());
        let result = handle_question(State(matcher), Ok(Json(query))).await;

        (result, logs.contents())
    }

    #[tokio::test]
    async fn test_question_is_logged() {
        let (result, logs) = answer_with_logs(StudentQuestion::new("What is pandas?")).await;

        assert!(result.is_ok());
        assert!(logs.contains("Received question: What is pandas?"));
        assert!(!logs.contains("Received image"));
    }

    #[tokio::test]
    async fn test_image_prefix_is_logged() {
        let image = format!("{}{}", "A".repeat(50), "B".repeat(30));
        let (result, logs) = answer_with_logs(StudentQuestion::new("What is this plot?").with_image(image)).await;

        assert!(result.is_ok());
        let expected = format!("Received image (first 50 chars of base64): {}...", "A".repeat(50));
        assert!(logs.contains(&expected), "{}", logs);
        assert!(!logs.contains("AB"));
    }

    #[tokio::test]
    async fn test_rejected_question_is_not_logged() {
        let (result, logs) = answer_with_logs(StudentQuestion::new("")).await;

        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(!logs.contains("Received question"));
    }
}
