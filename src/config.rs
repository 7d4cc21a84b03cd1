//! Signing Configuration
//!
//! All configuration values are loaded from environment variables.
//! No hardcoded secrets or sensitive data.

use crate::error::AuthError;
use std::env;

/// Signing context for token issuance, built once at startup and shared
/// read-only by every operation
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Token issuer claim (from JWT_ISSUER env var)
    pub issuer: String,

    /// Token audience claim (from JWT_AUDIENCE env var)
    pub audience: String,

    /// Secret key for signing tokens (from JWT_SECRET env var)
    pub secret: String,

    /// Access token expiration in seconds (from JWT_ACCESS_EXPIRATION env var)
    pub access_token_expiration: i64,

    /// Refresh token expiration in seconds (from JWT_REFRESH_EXPIRATION env var)
    pub refresh_token_expiration: i64,

    /// Name of the refresh token cookie (from COOKIE_NAME env var)
    pub cookie_name: String,

    /// Path attribute of the refresh token cookie (from COOKIE_PATH env var)
    pub cookie_path: String,

    /// Domain attribute of the refresh token cookie (from COOKIE_DOMAIN env var)
    pub cookie_domain: String,
}

impl AuthConfig {
    /// Load configuration from environment variables
    ///
    /// # Panics
    /// Panics if JWT_SECRET environment variable is not set
    pub fn from_env() -> Self {
        Self {
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "example.com".to_string()),

            audience: env::var("JWT_AUDIENCE").unwrap_or_else(|_| "example.com".to_string()),

            secret: env::var("JWT_SECRET").expect("JWT_SECRET environment variable must be set"),

            access_token_expiration: env::var("JWT_ACCESS_EXPIRATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(900), // 15 minutes default

            refresh_token_expiration: env::var("JWT_REFRESH_EXPIRATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(86400), // 24 hours default

            cookie_name: env::var("COOKIE_NAME").unwrap_or_else(|_| "refresh_token".to_string()),

            cookie_path: env::var("COOKIE_PATH").unwrap_or_else(|_| "/".to_string()),

            cookie_domain: env::var("COOKIE_DOMAIN").unwrap_or_else(|_| "localhost".to_string()),
        }
    }

    /// Validate the configuration
    ///
    /// Run this at startup, before the issuer is placed into service.
    /// A context that fails validation must never sign a token.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.secret.len() < 32 {
            return Err(AuthError::Config(
                "JWT_SECRET must be at least 32 characters".to_string(),
            ));
        }

        if self.access_token_expiration <= 0 {
            return Err(AuthError::Config(
                "JWT_ACCESS_EXPIRATION must be positive".to_string(),
            ));
        }

        if self.refresh_token_expiration <= self.access_token_expiration {
            return Err(AuthError::Config(
                "JWT_REFRESH_EXPIRATION must be greater than JWT_ACCESS_EXPIRATION".to_string(),
            ));
        }

        if self.cookie_name.is_empty() {
            return Err(AuthError::Config(
                "COOKIE_NAME must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
