use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::auth::domain::{AuthUser, Credentials, Role};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

fn to_domain(u: models::user::Model) -> Result<AuthUser, AuthError> {
    let role = Role::parse(&u.role)
        .ok_or_else(|| AuthError::Repository(format!("unknown role {:?} on user {}", u.role, u.id)))?;
    Ok(AuthUser {
        id: u.id,
        user_name: u.user_name,
        email: u.email,
        name: u.name,
        role,
        created_at: u.created_at.into(),
    })
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_user_name(&self, user_name: &str) -> Result<Option<AuthUser>, AuthError> {
        let res = models::user::Entity::find()
            .filter(models::user::Column::UserName.eq(user_name))
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        res.map(to_domain).transpose()
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
        let res = models::user::Entity::find()
            .filter(models::user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        res.map(to_domain).transpose()
    }

    async fn create_user(
        &self,
        user_name: &str,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<AuthUser, AuthError> {
        let created = models::user::create(&self.db, user_name, email, name, password_hash)
            .await
            .map_err(|e| match e {
                models::errors::ModelError::Validation(msg) => AuthError::Validation(msg),
                models::errors::ModelError::Db(msg) => AuthError::Repository(msg),
            })?;
        to_domain(created)
    }

    async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError> {
        let res = models::user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(res.map(|u| Credentials { user_id: u.id, password_hash: u.password_hash }))
    }

    async fn list_users(&self) -> Result<Vec<AuthUser>, AuthError> {
        let rows = models::user::Entity::find()
            .order_by_asc(models::user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        rows.into_iter().map(to_domain).collect()
    }

    async fn set_role(&self, email: &str, role: Role) -> Result<Option<AuthUser>, AuthError> {
        let updated = models::user::set_role(&self.db, email, role.as_str())
            .await
            .map_err(|e| AuthError::Repository(e.to_string()))?;
        updated.map(to_domain).transpose()
    }
}
