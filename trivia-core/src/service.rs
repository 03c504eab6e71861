//! Query service - the operations the HTTP layer calls
//!
//! Stateless apart from the injected store handle; clone freely.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Result, ServiceError};
use crate::models::{paginate, Category, Page, PageRequest, QuestionDraft, QuestionView, ValidationError};
use crate::quiz::{outcome_for, select_quiz_question, CategorySelector, QuizOutcome};
use crate::store::QuestionStore;

/// Category map keyed by id, as rendered on the wire (`{"1": "Science"}`)
pub type CategoryListing = BTreeMap<String, String>;

/// Unfiltered listing page plus the category map
#[derive(Debug, Clone)]
pub struct QuestionListing {
    pub page: Page<QuestionView>,
    pub categories: CategoryListing,
}

/// Listing page for a single category
#[derive(Debug, Clone)]
pub struct CategoryQuestions {
    pub page: Page<QuestionView>,
    pub current_category: String,
}

/// Full (unpaginated) search result
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub questions: Vec<QuestionView>,
    pub total: usize,
}

/// Result of a successful insert
#[derive(Debug, Clone)]
pub struct CreatedQuestion {
    pub id: i64,
    /// Requested page of the refreshed listing
    pub page: Page<QuestionView>,
}

#[derive(Clone)]
pub struct QueryService {
    store: Arc<dyn QuestionStore>,
}

impl QueryService {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn QuestionStore> {
        &self.store
    }

    /// Every category, ordered by label. NotFound when there are none.
    pub async fn get_categories(&self) -> Result<CategoryListing> {
        let categories = self.store.list_categories().await?;
        if categories.is_empty() {
            return Err(ServiceError::not_found("categories", "*"));
        }
        Ok(category_map(categories))
    }

    /// One page of all questions ordered by id.
    ///
    /// An empty page is NotFound here, unlike the per-category listing.
    pub async fn get_questions_page(&self, page: PageRequest) -> Result<QuestionListing> {
        let questions = self.store.list_questions().await?;
        let page = paginate(&questions, page);
        if page.is_empty() {
            return Err(ServiceError::not_found("questions page", page.page));
        }

        let categories = category_map(self.store.list_categories().await?);
        Ok(QuestionListing { page, categories })
    }

    /// One page of the questions in a category.
    pub async fn get_questions_by_category(
        &self,
        category_id: i64,
        page: PageRequest,
    ) -> Result<CategoryQuestions> {
        let category = self
            .store
            .get_category(category_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("category", category_id))?;

        let questions = self.store.list_questions_by_category(category_id).await?;
        Ok(CategoryQuestions {
            page: paginate(&questions, page),
            current_category: category.label,
        })
    }

    /// Case-insensitive substring search over question text.
    pub async fn search(&self, term: Option<&str>) -> Result<SearchResults> {
        let term = term.map(str::trim).unwrap_or_default();
        if term.is_empty() {
            return Err(ValidationError::Empty {
                field: "searchTerm",
            }
            .into());
        }

        let matches = self.store.search_questions(term).await?;
        debug!(term, hits = matches.len(), "question search");
        Ok(SearchResults {
            total: matches.len(),
            questions: matches.iter().map(QuestionView::from).collect(),
        })
    }

    /// Validate and insert a question, then return the requested page of the
    /// refreshed listing.
    pub async fn create_question(
        &self,
        draft: QuestionDraft,
        page: PageRequest,
    ) -> Result<CreatedQuestion> {
        let new_question = draft.validate()?;
        let created = self.store.insert_question(new_question).await?;
        info!(id = created.id, category = created.category, "question created");

        let questions = self.store.list_questions().await?;
        Ok(CreatedQuestion {
            id: created.id,
            page: paginate(&questions, page),
        })
    }

    pub async fn delete_question(&self, id: i64) -> Result<i64> {
        if !self.store.delete_question(id).await? {
            return Err(ServiceError::not_found("question", id));
        }
        info!(id, "question deleted");
        Ok(id)
    }

    /// Pick the next quiz question the client has not seen.
    ///
    /// NotFound when the category has no questions at all;
    /// [`QuizOutcome::Exhausted`] when it has some but all were seen.
    pub async fn next_quiz_question(
        &self,
        selector: CategorySelector,
        previously_seen: Vec<i64>,
    ) -> Result<QuizOutcome> {
        let candidates = match selector {
            CategorySelector::Any => self.store.list_questions().await?,
            CategorySelector::Category(id) => self.store.list_questions_by_category(id).await?,
        };
        if candidates.is_empty() {
            return Err(ServiceError::not_found("quiz questions for category", selector.id()));
        }

        let seen: HashSet<i64> = previously_seen.iter().copied().collect();
        let chosen = select_quiz_question(&candidates, &seen, &mut rand::thread_rng());
        debug!(
            category = selector.id(),
            candidates = candidates.len(),
            seen = seen.len(),
            chosen = ?chosen.map(|q| q.id),
            "quiz selection"
        );

        Ok(outcome_for(chosen, previously_seen))
    }
}

fn category_map(categories: Vec<Category>) -> CategoryListing {
    categories
        .into_iter()
        .map(|c| (c.id.to_string(), c.label))
        .collect()
}
