use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument};

use super::domain::{AuthSession, AuthUser, IdentityClaims, LoginInput, Role, SignupInput};
use super::errors::AuthError;
use super::guard::ensure_admin;
use super::repository::AuthRepository;
use super::token::TokenService;

/// Keep the bare field-level message ("Invalid Email") rather than the
/// prefixed Display form of the model error.
fn validation_error(e: models::errors::ModelError) -> AuthError {
    match e {
        models::errors::ModelError::Validation(msg) => AuthError::Validation(msg),
        other => AuthError::Repository(other.to_string()),
    }
}

/// Account flows: signup, login, admin listing and promotion.
/// Independent of the web framework; storage is behind [`AuthRepository`].
pub struct AuthService {
    repo: Arc<dyn AuthRepository>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(repo: Arc<dyn AuthRepository>, tokens: Arc<TokenService>) -> Self {
        Self { repo, tokens }
    }

    fn session_for(&self, user: AuthUser) -> Result<AuthSession, AuthError> {
        let claims = IdentityClaims::for_user(&user);
        let token = self.tokens.issue(&claims)?;
        Ok(AuthSession { user, token })
    }

    /// Register a new account and hand back a fresh token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, TokenService};
    /// use service::auth::repository::mock::MockAuthRepository;
    /// use service::auth::domain::SignupInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, Arc::new(TokenService::new("doc-secret")));
    /// let input = SignupInput { user_name: "alice".into(), email: "alice@x.com".into(), name: "Alice".into(), password: "Secret123".into() };
    /// let session = tokio_test::block_on(svc.signup(input)).unwrap();
    /// assert_eq!(session.user.email, "alice@x.com");
    /// assert!(!session.token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(user_name = %input.user_name, email = %input.email))]
    pub async fn signup(&self, input: SignupInput) -> Result<AuthSession, AuthError> {
        models::user::validate_email(&input.email).map_err(validation_error)?;
        models::user::validate_user_name(&input.user_name).map_err(validation_error)?;
        if input.password.len() < 8 {
            return Err(AuthError::Validation("password too short (>=8)".into()));
        }

        // Email first, then username; each duplicate has its own message.
        if let Some(existing) = self.repo.find_user_by_email(&input.email).await? {
            debug!("email taken by {}", existing.user_name);
            return Err(AuthError::Conflict("Email Already Registered".into()));
        }
        if self.repo.find_user_by_user_name(&input.user_name).await?.is_some() {
            return Err(AuthError::Conflict("Username Already Registered".into()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(input.password.as_bytes(), &salt)
            .map_err(|e| AuthError::Hash(e.to_string()))?
            .to_string();

        let user = self
            .repo
            .create_user(&input.user_name, &input.email, &input.name, &hash)
            .await?;
        info!(user_id = %user.id, user_name = %user.user_name, "user_registered");
        self.session_for(user)
    }

    /// Authenticate and issue a token over the current user snapshot.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, TokenService};
    /// use service::auth::repository::mock::MockAuthRepository;
    /// use service::auth::domain::{LoginInput, SignupInput};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let svc = AuthService::new(repo, Arc::new(TokenService::new("doc-secret")));
    /// let _ = tokio_test::block_on(svc.signup(SignupInput { user_name: "bob_1".into(), email: "b@e.com".into(), name: "Bob".into(), password: "Passw0rd".into() }));
    /// let session = tokio_test::block_on(svc.login(LoginInput { user_name: "bob_1".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(session.user.user_name, "bob_1");
    /// ```
    #[instrument(skip(self, input), fields(user_name = %input.user_name))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        models::user::validate_user_name(&input.user_name).map_err(validation_error)?;

        let user = self
            .repo
            .find_user_by_user_name(&input.user_name)
            .await?
            .ok_or_else(|| AuthError::NotFound("user not found".into()))?;

        let cred = self
            .repo
            .get_credentials(user.id)
            .await?
            .ok_or_else(|| AuthError::NotFound("user not found".into()))?;

        let parsed = PasswordHash::new(&cred.password_hash).map_err(|e| AuthError::Hash(e.to_string()))?;
        if Argon2::default()
            .verify_password(input.password.as_bytes(), &parsed)
            .is_err()
        {
            return Err(AuthError::InvalidPassword);
        }

        info!(user_id = %user.id, "user_logged_in");
        self.session_for(user)
    }

    /// Full account listing; admin tier.
    pub async fn list_users(&self, claims: &IdentityClaims) -> Result<Vec<AuthUser>, AuthError> {
        ensure_admin(claims)?;
        self.repo.list_users().await
    }

    /// Promote the account carrying `email` to admin; admin tier.
    ///
    /// Takes effect on the target's next token issuance; outstanding
    /// tokens keep their embedded `user` role.
    #[instrument(skip(self, claims), fields(email = %email))]
    pub async fn promote_to_admin(&self, claims: &IdentityClaims, email: &str) -> Result<AuthUser, AuthError> {
        ensure_admin(claims)?;
        let promoted = self
            .repo
            .set_role(email, Role::Admin)
            .await?
            .ok_or_else(|| AuthError::NotFound("user not found".into()))?;
        info!(user_id = %promoted.id, "user_promoted");
        Ok(promoted)
    }
}
