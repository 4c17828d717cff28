use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::store::TriviaStore;

use crate::errors::ApiError;
use crate::openapi::ApiDoc;

pub mod categories;
pub mod questions;
pub mod quizzes;

/// Shared handler state: the injected data store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TriviaStore>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Unknown paths answer with the same JSON error shape as the API itself.
async fn fallback_not_found() -> ApiError {
    ApiError::NotFound
}

/// Build the full application router
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/categories", get(categories::list))
        .route("/categories/:category_id/questions", get(questions::by_category))
        .route("/questions", get(questions::list).post(questions::create_or_search))
        .route("/questions/:question_id", delete(questions::remove))
        .route("/quizzes", post(quizzes::play));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(fallback_not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // Span per request with method and path, at INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // Response log carries status and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx and transport failures at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
