use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

pub const STATUS_PENDING: &str = "pending";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_name: String,
    pub name: String,
    pub body: String,
    pub rating: Option<i32>,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(
    db: &DatabaseConnection,
    user_name: &str,
    name: &str,
    body: &str,
    rating: Option<i32>,
) -> Result<Model, ModelError> {
    if body.trim().is_empty() {
        return Err(ModelError::Validation("review text required".into()));
    }
    if let Some(r) = rating {
        if !(1..=5).contains(&r) {
            return Err(ModelError::Validation("rating must be in 1..=5".into()));
        }
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_name: Set(user_name.to_string()),
        name: Set(name.to_string()),
        body: Set(body.to_string()),
        rating: Set(rating),
        status: Set(STATUS_PENDING.to_string()),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Overwrite a review's status by id. Returns `None` when absent.
pub async fn update_status(
    db: &DatabaseConnection,
    id: Uuid,
    status: &str,
) -> Result<Option<Model>, ModelError> {
    let found = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    let Some(found) = found else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    am.status = Set(status.to_string());
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}
