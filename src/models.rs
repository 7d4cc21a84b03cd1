//! Authentication Models
//!
//! Data structures for identities, token pairs, claims, and request/response
//! DTOs.

use crate::error::AuthError;
use crate::password;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================
// Principals
// ============================================

/// Minimal principal record consumed by the token issuer
///
/// Supplied by the external user store once authentication has succeeded;
/// the issuer never sees credentials, only the resolved identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl Identity {
    /// Display name embedded in the access token claims
    pub fn display_name(&self) -> String {
        format!("{},{}", self.first_name, self.last_name)
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

/// User record as provided by the external user store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Compare a plaintext password against the stored hash
    ///
    /// A wrong password is `Ok(false)`; only a malformed stored hash is an
    /// error.
    pub fn verify_password(&self, plaintext: &str) -> Result<bool, AuthError> {
        password::verify(plaintext, &self.password_hash)
    }
}

// ============================================
// Token Pair
// ============================================

/// Freshly issued access/refresh token pair
///
/// Either both tokens are present or issuance failed; a partial pair never
/// escapes the issuer. Serializes to the wire shape
/// `{"access_token": ..., "refresh_token": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

// ============================================
// JWT Claims
// ============================================

/// Claims embedded in access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// Subject (stringified user ID)
    pub sub: String,
    /// Display name ("First,Last")
    pub name: String,
    /// Audience
    pub aud: String,
    /// Issuer
    pub iss: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Token type marker
    pub typ: String,
}

/// Claims embedded in refresh tokens
///
/// Deliberately minimal: no audience, issuer, or display name. The refresh
/// token proves possession and identity binding at the refresh endpoint;
/// it authorizes nothing else, and carries nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    /// Subject (stringified user ID)
    pub sub: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

// ============================================
// Request DTOs
// ============================================

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================
// Response DTOs
// ============================================

/// Simple message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_joins_with_comma() {
        let identity = Identity {
            id: 42,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };
        assert_eq!(identity.display_name(), "Ada,Lovelace");
    }

    #[test]
    fn test_token_pair_wire_shape() {
        let pair = TokenPair {
            access_token: "aaa".to_string(),
            refresh_token: "rrr".to_string(),
        };
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["access_token"], "aaa");
        assert_eq!(json["refresh_token"], "rrr");
    }

    #[test]
    fn test_login_request_validation() {
        let bad = LoginRequest {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        assert!(bad.validate().is_err());

        let good = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(good.validate().is_ok());
    }
}
