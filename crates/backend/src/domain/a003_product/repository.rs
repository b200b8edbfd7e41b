use chrono::Utc;
use contracts::domain::a001_shop::ShopRef;
use contracts::domain::a002_category::CategoryRef;
use contracts::domain::a003_product::{LocalizedProduct, Product, ProductId};
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub price: f64,
    /// JSON array of localized texts
    pub localized_products: String,
    pub shop_id: Option<String>,
    /// JSON array of category ids
    pub category_ids: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// References come back with ids only; names are filled in by the service
impl TryFrom<Model> for Product {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let localized_products: Vec<LocalizedProduct> =
            serde_json::from_str(&m.localized_products)?;
        let category_ids: Vec<String> = serde_json::from_str(&m.category_ids)?;
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };

        Ok(Product {
            id: ProductId(Uuid::parse_str(&m.id)?),
            price: m.price,
            localized_products,
            shop: m.shop_id.map(|id| ShopRef {
                id,
                name: String::new(),
            }),
            categories: category_ids
                .into_iter()
                .map(|id| CategoryRef {
                    id,
                    name: String::new(),
                })
                .collect(),
            metadata,
        })
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn category_ids_json(aggregate: &Product) -> anyhow::Result<String> {
    let ids: Vec<&str> = aggregate.categories.iter().map(|c| c.id.as_str()).collect();
    Ok(serde_json::to_string(&ids)?)
}

pub async fn list_all() -> anyhow::Result<Vec<Product>> {
    Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Product::try_from)
        .collect()
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Product>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    result.map(Product::try_from).transpose()
}

pub async fn insert(aggregate: &Product) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        price: Set(aggregate.price),
        localized_products: Set(serde_json::to_string(&aggregate.localized_products)?),
        shop_id: Set(aggregate.shop.as_ref().map(|s| s.id.clone())),
        category_ids: Set(category_ids_json(aggregate)?),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Product) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.value().to_string()),
        price: Set(aggregate.price),
        localized_products: Set(serde_json::to_string(&aggregate.localized_products)?),
        shop_id: Set(aggregate.shop.as_ref().map(|s| s.id.clone())),
        category_ids: Set(category_ids_json(aggregate)?),
        is_deleted: Set(aggregate.metadata.is_deleted),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

/// Clears the shop reference of every product of a deleted shop
pub async fn detach_shop(shop_id: Uuid) -> anyhow::Result<u64> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::ShopId, Expr::value(Option::<String>::None))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::ShopId.eq(shop_id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected)
}
