use super::repository;
use crate::shared::error::ServiceError;
use contracts::domain::a002_category::{sort_by_name, Category, CategoryDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::pagination::{paginate, Page, PageRequest};
use uuid::Uuid;

fn validate(dto: &CategoryDto) -> Result<(), ServiceError> {
    let errors = dto.validate();
    if errors.is_valid() {
        Ok(())
    } else {
        Err(ServiceError::Validation(errors.summary()))
    }
}

pub async fn create(dto: CategoryDto) -> anyhow::Result<Uuid> {
    validate(&dto)?;

    let mut aggregate = Category::new_for_insert(&dto);
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    tracing::info!("Created category {} ({})", aggregate.display_name(), id);
    Ok(id)
}

pub async fn update(id: Uuid, dto: CategoryDto) -> anyhow::Result<()> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::not_found::<Category>())?;

    validate(&dto)?;
    aggregate.update(&dto);
    aggregate.before_write();

    repository::update(&aggregate).await
}

/// Soft delete; products drop the category the next time they are read
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Category>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Category>> {
    let mut items = repository::list_all().await?;
    sort_by_name(&mut items);
    Ok(items)
}

pub async fn list(request: PageRequest) -> anyhow::Result<Page<Category>> {
    Ok(paginate(list_all().await?, request.page, request.size))
}
