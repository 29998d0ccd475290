use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{AuthUser, Credentials, Role};
use super::errors::AuthError;

/// Repository abstraction for the credential store.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_user_by_user_name(&self, user_name: &str) -> Result<Option<AuthUser>, AuthError>;
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError>;
    async fn create_user(
        &self,
        user_name: &str,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<AuthUser, AuthError>;

    async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError>;

    async fn list_users(&self) -> Result<Vec<AuthUser>, AuthError>;
    /// Overwrite the role of the user carrying `email`; `None` when absent.
    async fn set_role(&self, email: &str, role: Role) -> Result<Option<AuthUser>, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        users: Mutex<HashMap<Uuid, AuthUser>>,
        creds: Mutex<HashMap<Uuid, Credentials>>,
    }

    #[async_trait]
    impl AuthRepository for MockAuthRepository {
        async fn find_user_by_user_name(&self, user_name: &str) -> Result<Option<AuthUser>, AuthError> {
            let users = self.users.lock().unwrap();
            Ok(users.values().find(|u| u.user_name == user_name).cloned())
        }

        async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
            let users = self.users.lock().unwrap();
            Ok(users.values().find(|u| u.email == email).cloned())
        }

        async fn create_user(
            &self,
            user_name: &str,
            email: &str,
            name: &str,
            password_hash: &str,
        ) -> Result<AuthUser, AuthError> {
            let mut users = self.users.lock().unwrap();
            if users.values().any(|u| u.email == email) {
                return Err(AuthError::Conflict("Email Already Registered".into()));
            }
            if users.values().any(|u| u.user_name == user_name) {
                return Err(AuthError::Conflict("Username Already Registered".into()));
            }
            let user = AuthUser {
                id: Uuid::new_v4(),
                user_name: user_name.to_string(),
                email: email.to_string(),
                name: name.to_string(),
                role: Role::User,
                created_at: Utc::now(),
            };
            users.insert(user.id, user.clone());
            self.creds.lock().unwrap().insert(
                user.id,
                Credentials { user_id: user.id, password_hash: password_hash.to_string() },
            );
            Ok(user)
        }

        async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError> {
            let creds = self.creds.lock().unwrap();
            Ok(creds.get(&user_id).cloned())
        }

        async fn list_users(&self) -> Result<Vec<AuthUser>, AuthError> {
            let users = self.users.lock().unwrap();
            let mut all: Vec<AuthUser> = users.values().cloned().collect();
            all.sort_by_key(|u| u.created_at);
            Ok(all)
        }

        async fn set_role(&self, email: &str, role: Role) -> Result<Option<AuthUser>, AuthError> {
            let mut users = self.users.lock().unwrap();
            for user in users.values_mut() {
                if user.email == email {
                    user.role = role;
                    return Ok(Some(user.clone()));
                }
            }
            Ok(None)
        }
    }
}
