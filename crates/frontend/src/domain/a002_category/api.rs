use contracts::domain::a002_category::{Category, CategoryDto};
use contracts::shared::pagination::{Page, PageRequest};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, with_query};

const ALL_CATEGORIES_PAGE_SIZE: usize = 1000;

pub async fn fetch_page(request: &PageRequest) -> Result<Page<Category>, String> {
    get_json(&with_query("/api/categories", request)).await
}

/// Every category, alphabetical (product form picker)
pub async fn fetch_all() -> Result<Vec<Category>, String> {
    let request = PageRequest {
        page: 0,
        size: ALL_CATEGORIES_PAGE_SIZE,
    };
    Ok(fetch_page(&request).await?.content)
}

pub async fn fetch_by_id(id: &str) -> Result<Category, String> {
    get_json(&format!("/api/categories/{}", id)).await
}

pub async fn create(dto: &CategoryDto) -> Result<String, String> {
    post_json("/api/categories", dto).await
}

pub async fn update(id: &str, dto: &CategoryDto) -> Result<(), String> {
    put_json(&format!("/api/categories/{}", id), dto).await
}

pub async fn remove(id: &str) -> Result<(), String> {
    delete(&format!("/api/categories/{}", id)).await
}
