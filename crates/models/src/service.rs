use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub image_name: String,
    pub image_content_type: String,
    pub image_size: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[allow(clippy::too_many_arguments)]
pub async fn create(
    db: &DatabaseConnection,
    name: &str,
    description: &str,
    price_cents: i64,
    image_name: &str,
    image_content_type: &str,
    image_size: i64,
) -> Result<Model, ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("service name required".into()));
    }
    if price_cents < 0 {
        return Err(ModelError::Validation("price must not be negative".into()));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        price_cents: Set(price_cents),
        image_name: Set(image_name.to_string()),
        image_content_type: Set(image_content_type.to_string()),
        image_size: Set(image_size),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}
