use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a003_product::{Product, ProductDto, ProductListQuery};
use contracts::shared::pagination::Page;
use serde_json::json;

use crate::domain::a003_product;
use crate::shared::error::{parse_id, ApiError};

/// GET /api/products
pub async fn list(
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Page<Product>>, ApiError> {
    Ok(Json(a003_product::service::list(&query).await?))
}

/// GET /api/products/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Product>, ApiError> {
    let uuid = parse_id(&id)?;
    a003_product::service::get_by_id(uuid)
        .await?
        .map(Json)
        .ok_or_else(ApiError::not_found::<Product>)
}

/// POST /api/products
pub async fn create(Json(dto): Json<ProductDto>) -> Result<Json<serde_json::Value>, ApiError> {
    let id = a003_product::service::create(dto).await?;
    Ok(Json(json!({ "id": id.to_string() })))
}

/// PUT /api/products/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<ProductDto>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let uuid = parse_id(&id)?;
    a003_product::service::update(uuid, dto).await?;
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/products/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ApiError> {
    let uuid = parse_id(&id)?;
    match a003_product::service::delete(uuid).await? {
        true => Ok(()),
        false => Err(ApiError::not_found::<Product>()),
    }
}
