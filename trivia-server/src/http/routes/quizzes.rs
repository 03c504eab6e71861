//! Quiz endpoint
//!
//! The client keeps the quiz state: it sends the ids it has already seen
//! and gets back the next question plus the updated list. `question: null`
//! means the quiz is over.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use trivia_core::models::lenient_number;
use trivia_core::{CategorySelector, QuestionView, QuizOutcome};

use crate::http::error::ApiError;
use crate::http::extractors::ApiJson;
use crate::http::server::AppState;

/// Category the quiz is played in; id 0 means all categories
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(default, deserialize_with = "lenient_number")]
    pub id: Option<i64>,
    #[serde(rename = "type", default)]
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionView>,
    #[serde(rename = "previousQuestion")]
    pub previous_question: Vec<i64>,
}

impl From<QuizOutcome> for QuizResponse {
    fn from(outcome: QuizOutcome) -> Self {
        match outcome {
            QuizOutcome::Next {
                question,
                previous_questions,
            } => Self {
                success: true,
                question: Some(question),
                previous_question: previous_questions,
            },
            QuizOutcome::Exhausted { previous_questions } => Self {
                success: true,
                question: None,
                previous_question: previous_questions,
            },
        }
    }
}

/// POST /quizzes - next unseen question
async fn next_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let category_id = req
        .quiz_category
        .and_then(|c| c.id)
        .ok_or_else(|| ApiError::Unprocessable {
            reason: "quiz_category with an id is required".to_string(),
        })?;

    let outcome = state
        .service
        .next_quiz_question(
            CategorySelector::from_id(category_id),
            req.previous_questions.unwrap_or_default(),
        )
        .await?;

    if outcome.is_exhausted() {
        tracing::debug!(category = category_id, "quiz exhausted");
    }
    Ok(Json(QuizResponse::from(outcome)))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_string_category_ids() {
        let req: QuizRequest = serde_json::from_str(
            r#"{"quiz_category": {"type": "Science", "id": "1"}, "previous_questions": [4, 9]}"#,
        )
        .unwrap();
        let category = req.quiz_category.unwrap();
        assert_eq!(category.id, Some(1));
        assert_eq!(category.label.as_deref(), Some("Science"));
        assert_eq!(req.previous_questions, Some(vec![4, 9]));
    }

    #[test]
    fn exhausted_outcome_serializes_null_question() {
        let response = QuizResponse::from(QuizOutcome::Exhausted {
            previous_questions: vec![1, 2],
        });
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["question"].is_null());
        assert_eq!(json["previousQuestion"], serde_json::json!([1, 2]));
        assert_eq!(json["success"], true);
    }
}
