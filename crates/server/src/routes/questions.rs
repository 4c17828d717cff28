use std::collections::BTreeMap;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use service::domain::{NewQuestion, Question};
use service::errors::ServiceError;
use service::pagination;

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct PageQuery {
    /// 1-based page of ten questions; defaults to the first page.
    pub page: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub categories: BTreeMap<i32, String>,
    /// Always null on the unfiltered listing.
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
    pub current_category: String,
}

/// Search results use camelCase keys, unlike the other surfaces. The total
/// counts the whole table and the category label is a fixed placeholder;
/// the established web client depends on both.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: u64,
    #[serde(rename = "currentCategory")]
    pub current_category: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted: i32,
}

/// Create-or-search body. A non-empty `searchTerm` selects search mode;
/// otherwise all four question fields must be present.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct QuestionPayload {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub difficulty: Option<i32>,
    #[serde(default)]
    pub category: Option<i32>,
}

/// One page of all questions, with the category mapping alongside.
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions"),
        (status = 400, description = "Malformed page parameter"),
        (status = 404, description = "Page is out of range")
    )
)]
pub async fn list(
    State(state): State<AppState>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let Query(query) = page.map_err(|_| ApiError::BadRequest)?;
    let page = pagination::parse_page(query.page).map_err(ApiError::from_read)?;

    let listing = service::questions::paginated(state.store.as_ref(), page)
        .await
        .map_err(ApiError::from_read)?;
    let categories = service::categories::mapping(state.store.as_ref())
        .await
        .map_err(ApiError::from_read)?;

    info!(page, returned = listing.questions.len(), total = listing.total_questions, "list questions");
    Ok(Json(QuestionListResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total_questions,
        categories,
        current_category: None,
    }))
}

/// One page of a single category's questions.
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    tag = "categories",
    params(
        ("category_id" = i32, Path, description = "Category id"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Questions in the category"),
        (status = 404, description = "Category does not exist")
    )
)]
pub async fn by_category(
    State(state): State<AppState>,
    category_id: Result<Path<i32>, PathRejection>,
    page: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    // Non-numeric ids are a route miss, not a bad request.
    let Path(category_id) = category_id.map_err(|_| ApiError::NotFound)?;
    let Query(query) = page.map_err(|_| ApiError::BadRequest)?;
    let page = pagination::parse_page(query.page).map_err(ApiError::from_read)?;

    let listing = service::questions::in_category(state.store.as_ref(), category_id, page)
        .await
        .map_err(ApiError::from_read)?;

    info!(category_id, returned = listing.questions.len(), "list questions by category");
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: listing.questions,
        total_questions: listing.total_questions,
        current_category: listing.current_category,
    }))
}

/// Create a question, or search when the body carries a `searchTerm`.
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    params(PageQuery),
    request_body = QuestionPayload,
    responses(
        (status = 200, description = "Question created, or search results"),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Creation failed or fields missing")
    )
)]
pub async fn create_or_search(
    State(state): State<AppState>,
    page: Result<Query<PageQuery>, QueryRejection>,
    body: Result<Json<QuestionPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = page.map_err(|_| ApiError::BadRequest)?;
    let Json(payload) = body.map_err(|_| ApiError::BadRequest)?;

    match payload.search_term.as_deref() {
        // Empty string falls through to create mode, same as absent.
        Some(term) if !term.is_empty() => {
            let page = pagination::parse_page(query.page).map_err(map_write_error)?;
            let results = service::questions::search(state.store.as_ref(), term, page)
                .await
                .map_err(map_write_error)?;
            info!(term, hits = results.questions.len(), "search questions");
            Ok(Json(SearchResponse {
                success: true,
                questions: results.questions,
                total_questions: results.total_questions,
                current_category: "History",
            })
            .into_response())
        }
        _ => {
            let new = match (payload.question, payload.answer, payload.difficulty, payload.category)
            {
                (Some(question), Some(answer), Some(difficulty), Some(category)) => {
                    NewQuestion { question, answer, difficulty, category }
                }
                _ => return Err(ApiError::Unprocessable),
            };
            service::questions::create(state.store.as_ref(), new)
                .await
                .map_err(map_write_error)?;
            Ok(Json(CreateResponse { success: true }).into_response())
        }
    }
}

/// Delete a question by id.
#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    tag = "questions",
    params(("question_id" = i32, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question deleted"),
        (status = 404, description = "Question does not exist")
    )
)]
pub async fn remove(
    State(state): State<AppState>,
    question_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(question_id) = question_id.map_err(|_| ApiError::NotFound)?;

    // On this surface storage failures read the same as a missing row.
    service::questions::remove(state.store.as_ref(), question_id)
        .await
        .map_err(|_| ApiError::NotFound)?;
    Ok(Json(DeleteResponse { success: true, deleted: question_id }))
}

/// POST /questions policy: storage failures are unprocessable in both
/// modes; a bad page is still a bad request.
fn map_write_error(e: ServiceError) -> ApiError {
    match e {
        ServiceError::Invalid(_) => ApiError::BadRequest,
        ServiceError::NotFound(_) => ApiError::NotFound,
        ServiceError::Unprocessable(_) | ServiceError::Db(_) => ApiError::Unprocessable,
    }
}
