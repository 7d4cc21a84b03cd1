//! Token Service
//!
//! The credential issuer: mints coupled access/refresh token pairs and
//! verifies them. Stateless and reentrant; every call allocates its own
//! claims, and the only shared inputs are the immutable configuration and
//! the system clock.

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::models::{AccessTokenClaims, Identity, RefreshTokenClaims, TokenPair};

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Type marker carried by access tokens
pub const ACCESS_TOKEN_TYPE: &str = "access";

/// Token issuance and verification service
pub struct TokenService {
    config: AuthConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Create a new token service
    ///
    /// Validate the config with [`AuthConfig::validate`] before constructing
    /// the service; a context that fails validation must not sign tokens.
    pub fn new(config: AuthConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Get reference to config
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    // ============================================
    // Issuance
    // ============================================

    /// Issue a coupled access/refresh token pair for an authenticated identity
    ///
    /// The access token carries the full claim set (subject, display name,
    /// audience, issuer); the refresh token carries only subject and
    /// timestamps. Both are signed with the same secret but expire
    /// independently. On any signing failure no partial pair is returned.
    pub fn issue_pair(&self, identity: &Identity) -> Result<TokenPair, AuthError> {
        if identity.id <= 0 {
            return Err(AuthError::Validation(
                "identity id must be a positive integer".to_string(),
            ));
        }

        let now = Utc::now().timestamp();

        let access_claims = AccessTokenClaims {
            sub: identity.id.to_string(),
            name: identity.display_name(),
            aud: self.config.audience.clone(),
            iss: self.config.issuer.clone(),
            iat: now,
            exp: now + self.config.access_token_expiration,
            typ: ACCESS_TOKEN_TYPE.to_string(),
        };

        let access_token = encode(&Header::default(), &access_claims, &self.encoding_key)
            .map_err(|err| AuthError::Signing(err.to_string()))?;

        let refresh_claims = RefreshTokenClaims {
            sub: identity.id.to_string(),
            iat: now,
            exp: now + self.config.refresh_token_expiration,
        };

        let refresh_token = encode(&Header::default(), &refresh_claims, &self.encoding_key)
            .map_err(|err| AuthError::Signing(err.to_string()))?;

        tracing::debug!(user_id = identity.id, "issued token pair");

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    // ============================================
    // Verification
    // ============================================

    /// Verify an access token and return its claims
    ///
    /// Accepts HS256 only, enforces expiry with zero leeway, and requires
    /// audience and issuer to match this service's configuration. Any
    /// mismatch is a rejection; a partially-trusted claim set is never
    /// returned.
    pub fn verify_access(&self, token: &str) -> Result<AccessTokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);

        let token_data = decode::<AccessTokenClaims>(token, &self.decoding_key, &validation)?;

        Ok(token_data.claims)
    }

    /// Verify a refresh token and return its claims
    ///
    /// Signature and expiry only; refresh tokens deliberately carry no
    /// audience or issuer. The subject is the identity to look up for
    /// reissuance.
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshTokenClaims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<RefreshTokenClaims>(token, &self.decoding_key, &validation)?;

        Ok(token_data.claims)
    }
}
