//! Authentication Middleware
//!
//! Bearer token validation for protected routes. The middleware carries the
//! signing context through router state; nothing here reads ambient
//! process-global configuration.

use crate::error::AuthError;
use crate::handlers::AuthState;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

/// Require an authenticated user
///
/// Validates the access token from the Authorization header and stores the
/// claims in request extensions for use by extractors.
pub async fn require_auth(
    State(state): State<AuthState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingCredentials)?;

    let claims = state.tokens.verify_access(token)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
