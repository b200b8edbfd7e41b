use super::repository;
use crate::domain::{a001_shop, a002_category};
use crate::shared::error::ServiceError;
use contracts::domain::a001_shop::Shop;
use contracts::domain::a002_category::Category;
use contracts::domain::a003_product::{Product, ProductDto, ProductListQuery};
use contracts::domain::common::AggregateRoot;
use contracts::shared::pagination::Page;
use std::collections::HashMap;
use uuid::Uuid;

/// Names of the live shops and categories, keyed by id
struct RefNames {
    shops: HashMap<String, String>,
    categories: HashMap<String, String>,
}

impl RefNames {
    async fn load() -> anyhow::Result<Self> {
        let shops = a001_shop::repository::list_all()
            .await?
            .into_iter()
            .map(|s| (s.to_string_id(), s.name))
            .collect();
        let categories = a002_category::repository::list_all()
            .await?
            .into_iter()
            .map(|c| (c.to_string_id(), c.name))
            .collect();
        Ok(Self { shops, categories })
    }

    /// Fills in reference names and drops references to deleted records
    fn hydrate(&self, mut product: Product) -> Product {
        product.shop = product.shop.and_then(|mut shop| {
            let name = self.shops.get(&shop.id)?;
            shop.name = name.clone();
            Some(shop)
        });
        product.categories = product
            .categories
            .into_iter()
            .filter_map(|mut category| {
                let name = self.categories.get(&category.id)?;
                category.name = name.clone();
                Some(category)
            })
            .collect();
        product
    }

    fn check(&self, dto: &ProductDto) -> Result<(), ServiceError> {
        if let Some(shop) = &dto.shop {
            if !self.shops.contains_key(&shop.id) {
                return Err(ServiceError::Validation(format!(
                    "{} introuvable: {}",
                    Shop::element_name(),
                    shop.id
                )));
            }
        }
        if let Some(category) = dto
            .categories
            .iter()
            .find(|c| !self.categories.contains_key(&c.id))
        {
            return Err(ServiceError::Validation(format!(
                "{} introuvable: {}",
                Category::element_name(),
                category.id
            )));
        }
        Ok(())
    }
}

fn validate(dto: &ProductDto) -> Result<(), ServiceError> {
    let errors = dto.validate();
    if errors.is_valid() {
        Ok(())
    } else {
        Err(ServiceError::Validation(errors.summary()))
    }
}

pub async fn create(dto: ProductDto) -> anyhow::Result<Uuid> {
    validate(&dto)?;
    RefNames::load().await?.check(&dto)?;

    let mut aggregate = Product::new_for_insert(&dto);
    aggregate.before_write();

    let id = repository::insert(&aggregate).await?;
    tracing::info!("Created product {} ({})", aggregate.display_name(), id);
    Ok(id)
}

pub async fn update(id: Uuid, dto: ProductDto) -> anyhow::Result<()> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or(ServiceError::not_found::<Product>())?;

    validate(&dto)?;
    RefNames::load().await?.check(&dto)?;
    aggregate.update(&dto);
    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Product>> {
    let Some(product) = repository::get_by_id(id).await? else {
        return Ok(None);
    };
    let names = RefNames::load().await?;
    Ok(Some(names.hydrate(product)))
}

pub async fn list(query: &ProductListQuery) -> anyhow::Result<Page<Product>> {
    let names = RefNames::load().await?;
    let products = repository::list_all()
        .await?
        .into_iter()
        .map(|p| names.hydrate(p))
        .collect();
    Ok(query.apply(products))
}

/// Live products per shop id
pub async fn count_by_shop() -> anyhow::Result<HashMap<String, u64>> {
    let mut counts = HashMap::new();
    for product in repository::list_all().await? {
        if let Some(shop) = product.shop {
            *counts.entry(shop.id).or_insert(0) += 1;
        }
    }
    Ok(counts)
}
