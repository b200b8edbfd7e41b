use contracts::domain::a003_product::{Product, ProductDto, ProductListQuery};
use contracts::shared::pagination::Page;

use crate::shared::api_utils::{delete, get_json, post_json, put_json, with_query};

pub async fn fetch_page(query: &ProductListQuery) -> Result<Page<Product>, String> {
    get_json(&with_query("/api/products", query)).await
}

pub async fn fetch_by_id(id: &str) -> Result<Product, String> {
    get_json(&format!("/api/products/{}", id)).await
}

/// Nameless locales are dropped and the price rounded before sending
pub async fn create(dto: &ProductDto) -> Result<String, String> {
    post_json("/api/products", &dto.formatted_for_submit()).await
}

pub async fn update(id: &str, dto: &ProductDto) -> Result<(), String> {
    put_json(&format!("/api/products/{}", id), &dto.formatted_for_submit()).await
}

pub async fn remove(id: &str) -> Result<(), String> {
    delete(&format!("/api/products/{}", id)).await
}
