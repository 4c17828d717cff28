use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use service::domain::Question;
use service::errors::ServiceError;

use crate::errors::ApiError;
use crate::routes::AppState;

/// Category id in a quiz request; the established clients send it as a
/// number or as a numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryId {
    Number(i64),
    Text(String),
}

impl CategoryId {
    /// Resolve to a concrete filter; 0 (or "0") means all categories.
    fn resolve(&self) -> Result<Option<i32>, ApiError> {
        let raw = match self {
            CategoryId::Number(n) => *n,
            CategoryId::Text(s) => s.trim().parse::<i64>().map_err(|_| ApiError::BadRequest)?,
        };
        if raw == 0 {
            return Ok(None);
        }
        i32::try_from(raw).map(Some).map_err(|_| ApiError::BadRequest)
    }
}

/// The category object the web client sends; extra keys such as the label
/// are ignored.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct QuizCategory {
    #[schema(value_type = String)]
    pub id: CategoryId,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct QuizPayload {
    #[serde(default)]
    pub previous_questions: Option<Vec<i32>>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// Null once the round has used up every candidate question.
    pub question: Option<Question>,
}

/// Draw a random question not played yet in this round.
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "quizzes",
    request_body = QuizPayload,
    responses(
        (status = 200, description = "Next question, or null when exhausted"),
        (status = 404, description = "Required quiz inputs missing"),
        (status = 422, description = "No questions to play in the category")
    )
)]
pub async fn play(
    State(state): State<AppState>,
    body: Result<Json<QuizPayload>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(payload) = body.map_err(|_| ApiError::BadRequest)?;

    // Absent quiz inputs are a 404 on this surface, not a 422.
    let previous = payload.previous_questions.ok_or(ApiError::NotFound)?;
    let category = payload.quiz_category.ok_or(ApiError::NotFound)?.id.resolve()?;

    let question = match service::quiz::next_question(state.store.as_ref(), category, &previous)
        .await
    {
        Ok(question) => question,
        Err(ServiceError::Unprocessable(_)) => return Err(ApiError::Unprocessable),
        Err(e) => return Err(ApiError::from_read(e)),
    };

    info!(excluded = previous.len(), chosen = question.as_ref().map(|q| q.id), "quiz pick");
    Ok(Json(QuizResponse { success: true, question }))
}
