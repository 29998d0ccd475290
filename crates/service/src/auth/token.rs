use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::domain::IdentityClaims;
use super::errors::AuthError;

/// Issues and verifies signed identity claims (HS256).
///
/// Token validity is signature validity and nothing else: there is no
/// expiry and no revocation list, so a token stays good until the
/// signing key rotates or the client discards it. Rotating the key in
/// config invalidates every outstanding token at once.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Signature-only validity: no exp claim is issued, none is required.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Deterministically encode and sign the claim snapshot. Never fails
    /// for well-formed input; a serialization failure is surfaced as a
    /// token error.
    pub fn issue(&self, claims: &IdentityClaims) -> Result<String, AuthError> {
        encode(&Header::default(), claims, &self.encoding).map_err(|e| AuthError::Token(e.to_string()))
    }

    /// Recompute and check the signature. Any malformed, tampered or
    /// unsigned token yields `None`; callers treat invalid exactly like
    /// absent, so this never surfaces an error.
    pub fn verify(&self, token: &str) -> Option<IdentityClaims> {
        decode::<IdentityClaims>(token, &self.decoding, &self.validation)
            .ok()
            .map(|data| data.claims)
    }
}
