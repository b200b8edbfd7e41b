use chrono::Utc;
use contracts::domain::a001_shop::{OpeningHoursSet, Shop, ShopId};
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_shop")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub in_vacations: bool,
    /// JSON array of opening intervals
    pub opening_hours: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Shop {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let opening_hours: OpeningHoursSet = serde_json::from_str(&m.opening_hours)
            .map_err(|e| anyhow::anyhow!("Corrupt opening hours for shop {}: {}", m.id, e))?;
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id)?;

        Ok(Shop {
            id: ShopId(uuid),
            name: m.name,
            in_vacations: m.in_vacations,
            opening_hours,
            nb_products: 0,
            metadata,
        })
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_models(rows: Vec<Model>) -> anyhow::Result<Vec<Shop>> {
    rows.into_iter().map(Shop::try_from).collect()
}

/// Live shops in insertion order
pub async fn list_all() -> anyhow::Result<Vec<Shop>> {
    let rows = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::CreatedAt)
        .all(conn())
        .await?;
    to_models(rows)
}

/// Live shop by id; soft-deleted rows are not returned
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Shop>> {
    let result = Entity::find_by_id(id.to_string())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    result.map(Shop::try_from).transpose()
}

pub async fn insert(aggregate: &Shop) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        name: Set(aggregate.name.clone()),
        in_vacations: Set(aggregate.in_vacations),
        opening_hours: Set(serde_json::to_string(&aggregate.opening_hours)?),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Shop) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.value().to_string()),
        name: Set(aggregate.name.clone()),
        in_vacations: Set(aggregate.in_vacations),
        opening_hours: Set(serde_json::to_string(&aggregate.opening_hours)?),
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
