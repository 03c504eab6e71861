//! Category endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use trivia_core::{CategoryListing, PageRequest, PaginationParams, QuestionView};

use crate::http::error::ApiError;
use crate::http::extractors::{ApiQuery, ValidId};
use crate::http::server::AppState;

/// Category map response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryListing,
}

/// Questions of one category
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub current_category: String,
}

/// GET /categories - all categories keyed by id
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.service.get_categories().await?;
    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{id}/questions - paginated questions in a category
async fn category_questions(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let result = state
        .service
        .get_questions_by_category(id, PageRequest::from(params))
        .await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: result.page.items,
        total_questions: result.page.total,
        current_category: result.current_category,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
}
