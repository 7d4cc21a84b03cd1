//! Refresh Cookie Lifecycle
//!
//! Builds the transport envelope for refresh tokens: a strict-same-site,
//! http-only, secure cookie on issuance, and the matching immediate-expiry
//! cookie used to clear it on logout. Both constructors are total functions
//! with no side effects; attaching the cookie to a response is the HTTP
//! layer's job.

use crate::config::AuthConfig;

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::{Duration, OffsetDateTime};

/// Build the active refresh token cookie
///
/// Http-only plus strict same-site is what keeps the long-lived refresh
/// token out of reach of scripts and cross-site requests; both flags are
/// set unconditionally.
pub fn refresh_cookie(config: &AuthConfig, refresh_token: &str) -> Cookie<'static> {
    let ttl = Duration::seconds(config.refresh_token_expiration);

    Cookie::build((config.cookie_name.clone(), refresh_token.to_string()))
        .path(config.cookie_path.clone())
        .domain(config.cookie_domain.clone())
        .expires(OffsetDateTime::now_utc() + ttl)
        .max_age(ttl)
        .same_site(SameSite::Strict)
        .http_only(true)
        .secure(true)
        .build()
}

/// Build the cleared refresh token cookie
///
/// Name, path, and domain must match the active cookie exactly or the
/// receiving agent will not delete the original credential.
pub fn clear_refresh_cookie(config: &AuthConfig) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), String::new()))
        .path(config.cookie_path.clone())
        .domain(config.cookie_domain.clone())
        .expires(OffsetDateTime::UNIX_EPOCH)
        .max_age(Duration::seconds(-1))
        .same_site(SameSite::Strict)
        .http_only(true)
        .secure(true)
        .build()
}
