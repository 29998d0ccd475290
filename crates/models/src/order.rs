use chrono::Utc;
use sea_orm::{entity::prelude::*, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

pub const STATUS_PENDING: &str = "pending";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub payment_id: String,
    pub service_name: String,
    pub amount_cents: i64,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a new order. Status always starts `pending`; the caller's
/// identity fields are stamped by the workflow layer, never taken from
/// the request body.
pub async fn create(
    db: &DatabaseConnection,
    user_name: &str,
    email: &str,
    payment_id: &str,
    service_name: &str,
    amount_cents: i64,
) -> Result<Model, ModelError> {
    if payment_id.trim().is_empty() {
        return Err(ModelError::Validation("payment reference required".into()));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_name: Set(user_name.to_string()),
        email: Set(email.to_string()),
        payment_id: Set(payment_id.to_string()),
        service_name: Set(service_name.to_string()),
        amount_cents: Set(amount_cents),
        status: Set(STATUS_PENDING.to_string()),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

/// Overwrite the status of the order carrying `payment_id`.
/// Returns `None` when no order matches.
pub async fn update_status_by_payment(
    db: &DatabaseConnection,
    payment_id: &str,
    status: &str,
) -> Result<Option<Model>, ModelError> {
    let found = Entity::find()
        .filter(Column::PaymentId.eq(payment_id))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    let Some(found) = found else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    am.status = Set(status.to_string());
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}
