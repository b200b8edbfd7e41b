use axum::{
    extract::{Path, Query},
    Json,
};
use contracts::domain::a001_shop::{Shop, ShopDto, ShopListQuery};
use contracts::shared::pagination::Page;
use serde_json::json;

use crate::domain::a001_shop;
use crate::shared::error::{parse_id, ApiError};

/// GET /api/shops
pub async fn list(Query(query): Query<ShopListQuery>) -> Result<Json<Page<Shop>>, ApiError> {
    let page = a001_shop::service::list(&query).await?;
    Ok(Json(page))
}

/// GET /api/shops/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Shop>, ApiError> {
    let uuid = parse_id(&id)?;
    a001_shop::service::get_by_id(uuid)
        .await?
        .map(Json)
        .ok_or_else(ApiError::not_found::<Shop>)
}

/// POST /api/shops
pub async fn create(Json(dto): Json<ShopDto>) -> Result<Json<serde_json::Value>, ApiError> {
    let id = a001_shop::service::create(dto).await.map_err(|e| {
        tracing::warn!("Shop creation rejected: {}", e);
        ApiError::from(e)
    })?;
    Ok(Json(json!({ "id": id.to_string() })))
}

/// PUT /api/shops/:id
pub async fn update(
    Path(id): Path<String>,
    Json(dto): Json<ShopDto>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let uuid = parse_id(&id)?;
    a001_shop::service::update(uuid, dto).await.map_err(|e| {
        tracing::warn!("Shop update rejected for {}: {}", id, e);
        ApiError::from(e)
    })?;
    Ok(Json(json!({ "id": id })))
}

/// DELETE /api/shops/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), ApiError> {
    let uuid = parse_id(&id)?;
    match a001_shop::service::delete(uuid).await? {
        true => Ok(()),
        false => Err(ApiError::not_found::<Shop>()),
    }
}
