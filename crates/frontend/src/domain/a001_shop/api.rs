use contracts::domain::a001_shop::{Shop, ShopDto, ShopListQuery};
use contracts::shared::pagination::Page;

use crate::shared::api_utils::{delete, get_json, post_json, put_json, with_query};

/// Page size used when every shop is needed at once (pickers)
const ALL_SHOPS_PAGE_SIZE: usize = 1000;

pub async fn fetch_page(query: &ShopListQuery) -> Result<Page<Shop>, String> {
    get_json(&with_query("/api/shops", query)).await
}

pub async fn fetch_all() -> Result<Vec<Shop>, String> {
    let query = ShopListQuery {
        size: ALL_SHOPS_PAGE_SIZE,
        ..Default::default()
    };
    Ok(fetch_page(&query).await?.content)
}

pub async fn fetch_by_id(id: &str) -> Result<Shop, String> {
    get_json(&format!("/api/shops/{}", id)).await
}

pub async fn create(dto: &ShopDto) -> Result<String, String> {
    post_json("/api/shops", dto).await
}

pub async fn update(id: &str, dto: &ShopDto) -> Result<(), String> {
    put_json(&format!("/api/shops/{}", id), dto).await
}

pub async fn remove(id: &str) -> Result<(), String> {
    delete(&format!("/api/shops/{}", id)).await
}
