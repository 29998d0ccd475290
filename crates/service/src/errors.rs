use thiserror::Error;

/// Business errors shared by the workflow services (catalog, shop,
/// review, contact). Auth flows have their own taxonomy in
/// [`crate::auth::errors::AuthError`].
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("You have no permission to do that")]
    Forbidden,
    #[error("{0} not found")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(entity.to_string())
    }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(msg) => Self::Validation(msg),
            models::errors::ModelError::Db(msg) => Self::Storage(msg),
        }
    }
}
