use thiserror::Error;

/// Business errors for auth flows. The HTTP layer maps these onto the
/// response envelope; `Unauthorized` and `Forbidden` intentionally carry
/// distinct messages so callers can tell "no identity" from "no
/// permission".
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Invalid Password")]
    InvalidPassword,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("You have no permission to do that")]
    Forbidden,
    #[error("hashing error: {0}")]
    Hash(String),
    #[error("token error: {0}")]
    Token(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Validation(_) => 1001,
            AuthError::Conflict(_) => 1002,
            AuthError::NotFound(_) => 1003,
            AuthError::InvalidPassword => 1004,
            AuthError::Unauthorized => 1005,
            AuthError::Forbidden => 1006,
            AuthError::Hash(_) => 1101,
            AuthError::Token(_) => 1102,
            AuthError::Repository(_) => 1200,
        }
    }
}
