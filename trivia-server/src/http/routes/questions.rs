//! Question endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use trivia_core::{CategoryListing, PageRequest, PaginationParams, QuestionDraft, QuestionView};

use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, ApiQuery, ValidId};
use crate::http::server::AppState;

/// Search request body
#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

/// Paginated listing with the category map
#[derive(Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub categories: CategoryListing,
}

/// Search results; search is not tied to a category
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub current_category: Option<String>,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: String,
}

/// GET /questions?page=N - one page of all questions
async fn list_questions(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let listing = state
        .service
        .get_questions_page(PageRequest::from(params))
        .await?;

    Ok(Json(QuestionsResponse {
        success: true,
        questions: listing.page.items,
        total_questions: listing.page.total,
        categories: listing.categories,
    }))
}

/// POST /questions - create a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<PaginationParams>,
    ApiJson(draft): ApiJson<QuestionDraft>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let created = state
        .service
        .create_question(draft, PageRequest::from(params))
        .await?;

    Ok(Json(CreatedResponse {
        success: true,
        created: created.id,
        questions: created.page.items,
        total_questions: created.page.total,
    }))
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = state.service.delete_question(id).await?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id.to_string(),
    }))
}

/// POST /questions/search - case-insensitive substring search
async fn search_questions(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let results = state.service.search(req.search_term.as_deref()).await?;
    Ok(Json(SearchResponse {
        success: true,
        questions: results.questions,
        total_questions: results.total,
        current_category: None,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}
