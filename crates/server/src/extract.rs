use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use service::auth::domain::IdentityClaims;

use crate::errors::ApiError;
use crate::state::ServerState;

fn bearer_header(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}

/// Extractor for the authenticated tier: a verified identity claim.
/// Rejection matches the guard's contract: absent, malformed and
/// invalid tokens are all the same 403 "Unauthorized".
pub struct Identity(pub IdentityClaims);

#[axum::async_trait]
impl FromRequestParts<ServerState> for Identity {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection> {
        let claims = state.guard.authenticate(bearer_header(parts))?;
        Ok(Identity(claims))
    }
}

/// Extractor for the admin tier. Runs the full check order (presence,
/// scheme, signature, then role); the role failure carries its own
/// distinct message.
pub struct AdminIdentity(pub IdentityClaims);

#[axum::async_trait]
impl FromRequestParts<ServerState> for AdminIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection> {
        let claims = state.guard.authenticate_admin(bearer_header(parts))?;
        Ok(AdminIdentity(claims))
    }
}
