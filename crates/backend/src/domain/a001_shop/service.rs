use super::repository;
use crate::domain::a003_product;
use crate::shared::error::ServiceError;
use contracts::domain::a001_shop::{Shop, ShopDto, ShopListQuery};
use contracts::domain::common::AggregateRoot;
use contracts::shared::pagination::Page;
use uuid::Uuid;

async fn with_product_counts(mut shops: Vec<Shop>) -> anyhow::Result<Vec<Shop>> {
    let counts = a003_product::service::count_by_shop().await?;
    for shop in &mut shops {
        shop.nb_products = counts.get(&shop.to_string_id()).copied().unwrap_or(0);
    }
    Ok(shops)
}

/// Create a shop; the draft must pass the field schema and the opening-hours check
pub async fn create(dto: ShopDto) -> anyhow::Result<Uuid> {
    dto.check_submittable()?;

    let mut aggregate = Shop::new_for_insert(&dto);
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    tracing::info!("Created shop {} ({})", aggregate.display_name(), id);
    Ok(id)
}

pub async fn update(id: Uuid, dto: ShopDto) -> anyhow::Result<()> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::not_found::<Shop>())?;

    dto.check_submittable()?;
    aggregate.update(&dto);
    aggregate.before_write();

    repository::update(&aggregate).await?;
    tracing::info!("Updated shop {} ({})", aggregate.display_name(), id);
    Ok(())
}

/// Soft delete; products of the shop lose their shop reference
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    if !repository::soft_delete(id).await? {
        return Ok(false);
    }
    let detached = a003_product::repository::detach_shop(id).await?;
    tracing::info!("Deleted shop {}, detached {} product(s)", id, detached);
    Ok(true)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Shop>> {
    match repository::get_by_id(id).await? {
        Some(shop) => Ok(with_product_counts(vec![shop]).await?.pop()),
        None => Ok(None),
    }
}

pub async fn list(query: &ShopListQuery) -> anyhow::Result<Page<Shop>> {
    let shops = with_product_counts(repository::list_all().await?).await?;
    Ok(query.apply(shops))
}
