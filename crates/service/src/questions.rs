//! Question listing, search, create and delete.

use tracing::{info, instrument};

use crate::domain::{NewQuestion, Question};
use crate::errors::ServiceError;
use crate::pagination;
use crate::store::TriviaStore;

/// One page of the full question list.
#[derive(Debug)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: u64,
}

/// Questions of a single category, with its label and per-category count.
#[derive(Debug)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub current_category: String,
}

/// One page of search hits. The total is the unfiltered table count, which
/// the established web client renders as its global question counter.
#[derive(Debug)]
pub struct SearchResults {
    pub questions: Vec<Question>,
    pub total_questions: u64,
}

/// Page of all questions in id order; a window past the end is NotFound on
/// this surface.
pub async fn paginated(store: &dyn TriviaStore, page: u32) -> Result<QuestionPage, ServiceError> {
    let all = store.list_questions().await?;
    let window = pagination::window(&all, page);
    if window.is_empty() {
        return Err(ServiceError::not_found("questions"));
    }
    Ok(QuestionPage { questions: window.to_vec(), total_questions: all.len() as u64 })
}

/// Page of one category's questions. Unknown category ids are NotFound; an
/// empty window is not, it just comes back empty.
pub async fn in_category(
    store: &dyn TriviaStore,
    category_id: i32,
    page: u32,
) -> Result<CategoryQuestions, ServiceError> {
    let category = store
        .find_category(category_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("category"))?;
    let matching = store.list_questions_in_category(category_id).await?;
    let window = pagination::window(&matching, page);
    Ok(CategoryQuestions {
        questions: window.to_vec(),
        total_questions: matching.len() as u64,
        current_category: category.kind,
    })
}

/// Page of case-insensitive substring hits; no match is an empty page, not
/// an error.
#[instrument(skip(store))]
pub async fn search(
    store: &dyn TriviaStore,
    term: &str,
    page: u32,
) -> Result<SearchResults, ServiceError> {
    let hits = store.search_questions(term).await?;
    let window = pagination::window(&hits, page);
    let total = store.list_questions().await?.len() as u64;
    info!(hits = hits.len(), total, "question search");
    Ok(SearchResults { questions: window.to_vec(), total_questions: total })
}

pub async fn create(store: &dyn TriviaStore, new: NewQuestion) -> Result<Question, ServiceError> {
    let created = store.insert_question(new).await?;
    info!(id = created.id, category = created.category, "question created");
    Ok(created)
}

/// Delete by id; the row must exist first.
pub async fn remove(store: &dyn TriviaStore, id: i32) -> Result<(), ServiceError> {
    store
        .find_question(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("question"))?;
    store.delete_question(id).await?;
    info!(id, "question deleted");
    Ok(())
}
