use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a002_category::{Category, CategoryDto};
use contracts::shared::pagination::{Page, PageRequest};
use serde_json::json;

use crate::domain::a002_category;
use crate::shared::error::{parse_id, ApiError};

/// GET /api/categories
pub async fn list(Query(request): Query<PageRequest>) -> Result<Json<Page<Category>>, ApiError> {
    Ok(Json(a002_category::service::list(request).await?))
}

/// GET /api/categories/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Category>, ApiError> {
    let uuid = parse_id(&id)?;
    a002_category::service::get_by_id(uuid)
        .await?
        .map(Json)
        .ok_or_else(ApiError::not_found::<Category>)
}

/// POST /api/categories
pub async fn create(Json(dto): Json<CategoryDto>) -> Result<Json<serde_json::Value>, ApiError> {
    let id = a002_category::service::create(dto).await?;
    Ok(Json(json!({ "id": id.to_string() })))
}

/// PUT /api/categories/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<CategoryDto>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let uuid = parse_id(&id)?;
    a002_category::service::update(uuid, dto).await?;
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/categories/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ApiError> {
    let uuid = parse_id(&id)?;
    match a002_category::service::delete(uuid).await? {
        true => Ok(()),
        false => Err(ApiError::not_found::<Category>()),
    }
}
