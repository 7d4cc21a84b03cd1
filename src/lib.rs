//! SessionForge
//!
//! Session-credential issuer for Axum applications providing:
//! - Coupled access/refresh JWT pairs with independent expirations
//! - Hardened refresh cookies (HttpOnly, Secure, SameSite=Strict)
//! - Token renewal from the refresh cookie without re-authentication
//! - Argon2id password verification for the login flow
//! - Bearer token middleware and extractors for protected routes
//!
//! The crate deliberately keeps no server-side session state: an issued
//! token is valid until it expires, and logout is cookie expiry at the
//! client. User persistence is the embedding application's concern,
//! plugged in through the [`UserStore`] trait.
//!
//! # Configuration
//!
//! All configuration is loaded from environment variables:
//! - `JWT_SECRET` - Secret key for signing tokens (required, min 32 chars)
//! - `JWT_ISSUER` - Token issuer claim (default: "example.com")
//! - `JWT_AUDIENCE` - Token audience claim (default: "example.com")
//! - `JWT_ACCESS_EXPIRATION` - Access token lifetime in seconds (default: 900)
//! - `JWT_REFRESH_EXPIRATION` - Refresh token lifetime in seconds (default: 86400)
//! - `COOKIE_NAME` / `COOKIE_PATH` / `COOKIE_DOMAIN` - Refresh cookie attributes
//!
//! # Usage
//!
//! ```rust,ignore
//! use sessionforge::{routes, AuthConfig, AuthState, TokenService};
//! use std::sync::Arc;
//!
//! let config = AuthConfig::from_env();
//! config.validate()?;
//!
//! let state = AuthState {
//!     tokens: Arc::new(TokenService::new(config)),
//!     users: Arc::new(my_user_store),
//! };
//!
//! let app = axum::Router::new().merge(routes(state));
//! ```

pub mod config;
pub mod cookie;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use config::AuthConfig;
pub use error::AuthError;
pub use extractors::AuthUser;
pub use handlers::{routes, AuthState};
pub use models::*;
pub use service::TokenService;
pub use store::UserStore;
