use std::sync::Arc;

use super::domain::IdentityClaims;
use super::errors::AuthError;
use super::token::TokenService;

/// Which records an order/cart listing may see. Derived from the
/// verified claim only; client-supplied identity fields never reach a
/// filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerScope {
    All,
    Owner(String),
}

/// The request gate: extracts a bearer token, verifies it and enforces
/// the per-endpoint policy tier. A pure gate; it never mutates data.
///
/// Check order is fixed: header presence, then bearer scheme, then
/// signature, then role. A request failing an earlier step never
/// reaches a later one.
/// The role embedded in the claim is trusted as-is (snapshot model); a
/// freshly promoted admin keeps acting as `user` until they log in
/// again.
pub struct Guard {
    tokens: Arc<TokenService>,
}

impl Guard {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }

    /// Authenticated tier: a syntactically valid `Bearer` header whose
    /// token verifies. Absent, malformed and tampered are all the same
    /// `Unauthorized`.
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<IdentityClaims, AuthError> {
        let header = authorization.ok_or(AuthError::Unauthorized)?;
        let token = header.strip_prefix("Bearer ").ok_or(AuthError::Unauthorized)?;
        self.tokens.verify(token.trim()).ok_or(AuthError::Unauthorized)
    }

    /// Admin tier: authenticate, then require the admin role. The role
    /// failure carries a distinct message from the unauthenticated case.
    pub fn authenticate_admin(&self, authorization: Option<&str>) -> Result<IdentityClaims, AuthError> {
        let claims = self.authenticate(authorization)?;
        ensure_admin(&claims)?;
        Ok(claims)
    }

    /// Owner tier for order listings: admins see everything, everyone
    /// else only records stamped with their own email.
    pub fn order_scope(claims: &IdentityClaims) -> OwnerScope {
        if claims.is_admin() {
            OwnerScope::All
        } else {
            OwnerScope::Owner(claims.email.clone())
        }
    }
}

/// Role check shared by the guard and the workflow services.
pub fn ensure_admin(claims: &IdentityClaims) -> Result<(), AuthError> {
    if claims.is_admin() {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::{AuthUser, Role};
    use chrono::Utc;
    use uuid::Uuid;

    fn token_for(role: Role, tokens: &TokenService) -> String {
        let user = AuthUser {
            id: Uuid::new_v4(),
            user_name: "alice".into(),
            email: "alice@x.com".into(),
            name: "Alice".into(),
            role,
            created_at: Utc::now(),
        };
        tokens.issue(&IdentityClaims::for_user(&user)).expect("issue")
    }

    fn guard() -> (Guard, Arc<TokenService>) {
        let tokens = Arc::new(TokenService::new("guard-secret"));
        (Guard::new(tokens.clone()), tokens)
    }

    #[test]
    fn missing_header_is_unauthorized() {
        let (guard, _) = guard();
        assert!(matches!(guard.authenticate(None), Err(AuthError::Unauthorized)));
    }

    #[test]
    fn wrong_scheme_is_unauthorized() {
        let (guard, tokens) = guard();
        let token = token_for(Role::User, &tokens);
        let res = guard.authenticate(Some(&format!("Basic {token}")));
        assert!(matches!(res, Err(AuthError::Unauthorized)));
    }

    #[test]
    fn tampered_token_is_unauthorized() {
        let (guard, tokens) = guard();
        let mut token = token_for(Role::User, &tokens);
        token.push('x');
        let res = guard.authenticate(Some(&format!("Bearer {token}")));
        assert!(matches!(res, Err(AuthError::Unauthorized)));
    }

    #[test]
    fn valid_token_yields_claims() {
        let (guard, tokens) = guard();
        let token = token_for(Role::User, &tokens);
        let claims = guard.authenticate(Some(&format!("Bearer {token}"))).expect("claims");
        assert_eq!(claims.email, "alice@x.com");
    }

    #[test]
    fn non_admin_hits_distinct_forbidden() {
        let (guard, tokens) = guard();
        let token = token_for(Role::User, &tokens);
        let res = guard.authenticate_admin(Some(&format!("Bearer {token}")));
        assert!(matches!(res, Err(AuthError::Forbidden)));
    }

    #[test]
    fn admin_passes_admin_tier() {
        let (guard, tokens) = guard();
        let token = token_for(Role::Admin, &tokens);
        assert!(guard.authenticate_admin(Some(&format!("Bearer {token}"))).is_ok());
    }

    #[test]
    fn order_scope_follows_role() {
        let tokens = TokenService::new("s");
        let user_token = token_for(Role::User, &tokens);
        let claims = tokens.verify(&user_token).expect("verify");
        assert_eq!(Guard::order_scope(&claims), OwnerScope::Owner("alice@x.com".into()));

        let admin_token = token_for(Role::Admin, &tokens);
        let claims = tokens.verify(&admin_token).expect("verify");
        assert_eq!(Guard::order_scope(&claims), OwnerScope::All);
    }
}
