use chrono::Utc;
use sea_orm::{entity::prelude::*, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    // Argon2 digest; never serialized back out.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Shape check for email addresses, kept deliberately simple:
/// nonempty local part, an `@`, and a dotted domain.
pub fn validate_email(email: &str) -> Result<(), ModelError> {
    let invalid = || ModelError::Validation("Invalid Email".into());
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || email.len() > 254 {
        return Err(invalid());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }
    if email.chars().any(|c| c.is_whitespace()) {
        return Err(invalid());
    }
    Ok(())
}

/// Usernames: 4..=20 chars of `[a-zA-Z0-9._]`, no leading/trailing
/// separator and no doubled separators.
pub fn validate_user_name(user_name: &str) -> Result<(), ModelError> {
    let invalid = || ModelError::Validation("Invalid User Name".into());
    let len = user_name.chars().count();
    if !(4..=20).contains(&len) {
        return Err(invalid());
    }
    if !user_name.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_') {
        return Err(invalid());
    }
    let first = user_name.chars().next().ok_or_else(invalid)?;
    let last = user_name.chars().last().ok_or_else(invalid)?;
    if matches!(first, '.' | '_') || matches!(last, '.' | '_') {
        return Err(invalid());
    }
    let doubled = user_name
        .as_bytes()
        .windows(2)
        .any(|w| matches!(w[0], b'.' | b'_') && matches!(w[1], b'.' | b'_'));
    if doubled {
        return Err(invalid());
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() || name.len() > 128 {
        return Err(ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    user_name: &str,
    email: &str,
    name: &str,
    password_hash: &str,
) -> Result<Model, ModelError> {
    validate_user_name(user_name)?;
    validate_email(email)?;
    validate_name(name)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_name: Set(user_name.to_string()),
        email: Set(email.to_string()),
        name: Set(name.to_string()),
        password_hash: Set(password_hash.to_string()),
        role: Set(ROLE_USER.to_string()),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn set_role(db: &DatabaseConnection, email: &str, role: &str) -> Result<Option<Model>, ModelError> {
    let found = Entity::find()
        .filter(Column::Email.eq(email))
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    let Some(found) = found else { return Ok(None) };
    let mut am: ActiveModel = found.into();
    am.role = Set(role.to_string());
    let updated = am.update(db).await.map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}
