//! Authentication Extractors
//!
//! Axum extractors exposing the authenticated principal to handlers.

use crate::error::AuthError;
use crate::handlers::AuthState;
use crate::models::AccessTokenClaims;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

/// Authenticated user information extracted from access token claims
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
}

impl AuthUser {
    /// Build the principal from verified claims
    pub fn from_claims(claims: &AccessTokenClaims) -> Result<Self, AuthError> {
        let id = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;
        Ok(Self {
            id,
            name: claims.name.clone(),
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AuthState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // claims already validated by the require_auth middleware
        if let Some(claims) = parts.extensions.get::<AccessTokenClaims>() {
            return AuthUser::from_claims(claims);
        }

        // otherwise validate the bearer token directly
        let state = AuthState::from_ref(state);

        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(AuthError::MissingCredentials)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingCredentials)?;

        let claims = state.tokens.verify_access(token)?;

        AuthUser::from_claims(&claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str) -> AccessTokenClaims {
        AccessTokenClaims {
            sub: sub.to_string(),
            name: "Ada,Lovelace".to_string(),
            aud: "example.com".to_string(),
            iss: "example.com".to_string(),
            iat: 0,
            exp: 0,
            typ: "access".to_string(),
        }
    }

    #[test]
    fn test_from_claims_parses_subject() {
        let user = AuthUser::from_claims(&claims("42")).unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.name, "Ada,Lovelace");
    }

    #[test]
    fn test_from_claims_rejects_non_numeric_subject() {
        assert!(matches!(
            AuthUser::from_claims(&claims("not-a-number")),
            Err(AuthError::InvalidToken)
        ));
    }
}
