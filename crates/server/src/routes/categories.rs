use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::ApiError;
use crate::routes::AppState;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    /// Map keyed by category id, serialized with string keys.
    pub categories: BTreeMap<i32, String>,
}

/// List every category as an id-to-label mapping.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Mapping of category id to label"),
        (status = 404, description = "No categories exist")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = service::categories::listing(state.store.as_ref())
        .await
        .map_err(ApiError::from_read)?;
    info!(count = categories.len(), "list categories");
    Ok(Json(CategoriesResponse { success: true, categories }))
}
