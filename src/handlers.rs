//! Authentication HTTP Handlers
//!
//! REST endpoints for the session-credential lifecycle: login issues a
//! token pair and sets the refresh cookie, refresh exchanges the inbound
//! cookie for a fresh pair, logout clears the cookie.

use crate::cookie;
use crate::error::AuthError;
use crate::extractors::AuthUser;
use crate::middleware;
use crate::models::*;
use crate::service::TokenService;
use crate::store::UserStore;

use axum::{
    extract::State,
    middleware as axum_middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::CookieJar;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use validator::Validate;

/// Shared state for the auth router
#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<TokenService>,
    pub users: Arc<dyn UserStore>,
}

// ============================================
// Route Builder
// ============================================

/// Create authentication routes
pub fn routes(state: AuthState) -> Router {
    // Public routes (no authentication required)
    let public = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/refresh", get(refresh))
        .route("/auth/logout", get(logout));

    // Protected routes (require authentication)
    let protected = Router::new().route("/auth/me", get(me)).route_layer(
        axum_middleware::from_fn_with_state(state.clone(), middleware::require_auth),
    );

    // credentialed CORS: the refresh cookie only travels when the browser
    // is allowed to send credentials cross-origin
    Router::new()
        .merge(public)
        .merge(protected)
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

// ============================================
// Login / Logout
// ============================================

/// POST /auth/login
///
/// Authenticate a user and return an access/refresh token pair. The
/// refresh token is additionally set as a hardened cookie; the JSON body
/// carries both tokens for the client.
pub async fn login(
    State(state): State<AuthState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthError> {
    req.validate()
        .map_err(|e| AuthError::Validation(e.to_string()))?;

    // unknown user and wrong password are the same rejection, so responses
    // cannot be used to enumerate accounts
    let user = state
        .users
        .user_by_email(&req.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !user.verify_password(&req.password)? {
        tracing::debug!(user_id = user.id, "login rejected: bad password");
        return Err(AuthError::InvalidCredentials);
    }

    let pair = state.tokens.issue_pair(&Identity::from(&user))?;
    let jar = jar.add(cookie::refresh_cookie(
        state.tokens.config(),
        &pair.refresh_token,
    ));

    tracing::info!(user_id = user.id, "user logged in");

    Ok((jar, Json(pair)))
}

/// GET /auth/logout
///
/// Clear the refresh cookie. There is no server-side session to revoke;
/// expiring the cookie at the client is the whole operation.
pub async fn logout(State(state): State<AuthState>, jar: CookieJar) -> impl IntoResponse {
    let jar = jar.add(cookie::clear_refresh_cookie(state.tokens.config()));

    (jar, Json(MessageResponse::new("Logged out successfully")))
}

// ============================================
// Token Refresh
// ============================================

/// GET /auth/refresh
///
/// Exchange the refresh token from the inbound cookie for a fresh token
/// pair without re-authentication. A new refresh cookie replaces the old
/// one.
pub async fn refresh(
    State(state): State<AuthState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthError> {
    let token = jar
        .get(&state.tokens.config().cookie_name)
        .map(|c| c.value().to_string())
        .ok_or(AuthError::MissingCredentials)?;

    let claims = state.tokens.verify_refresh(&token)?;

    let id: i64 = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;

    let user = state
        .users
        .user_by_id(id)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    let pair = state.tokens.issue_pair(&Identity::from(&user))?;
    let jar = jar.add(cookie::refresh_cookie(
        state.tokens.config(),
        &pair.refresh_token,
    ));

    tracing::debug!(user_id = user.id, "token pair refreshed");

    Ok((jar, Json(pair)))
}

// ============================================
// User Profile
// ============================================

/// GET /auth/me
///
/// Echo the authenticated principal from validated claims.
pub async fn me(user: AuthUser) -> impl IntoResponse {
    Json(serde_json::json!({
        "id": user.id,
        "name": user.name
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthConfig;
    use crate::password;

    use async_trait::async_trait;
    use axum::http::{header, StatusCode};
    use axum_extra::extract::cookie::Cookie;
    use chrono::Utc;

    struct MemoryStore {
        users: Vec<User>,
    }

    #[async_trait]
    impl UserStore for MemoryStore {
        async fn user_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
            Ok(self.users.iter().find(|u| u.email == email).cloned())
        }

        async fn user_by_id(&self, id: i64) -> Result<Option<User>, AuthError> {
            Ok(self.users.iter().find(|u| u.id == id).cloned())
        }
    }

    fn state() -> AuthState {
        let config = AuthConfig {
            issuer: "example.com".to_string(),
            audience: "example.com".to_string(),
            secret: "0123456789abcdef0123456789abcdef".to_string(),
            access_token_expiration: 900,
            refresh_token_expiration: 86400,
            cookie_name: "refresh_token".to_string(),
            cookie_path: "/".to_string(),
            cookie_domain: "localhost".to_string(),
        };
        config.validate().unwrap();

        let now = Utc::now();
        let ada = User {
            id: 42,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: password::hash("difference engine").unwrap(),
            created_at: now,
            updated_at: now,
        };

        AuthState {
            tokens: Arc::new(TokenService::new(config)),
            users: Arc::new(MemoryStore { users: vec![ada] }),
        }
    }

    async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_login_issues_pair_and_sets_refresh_cookie() {
        let state = state();
        let req = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "difference engine".to_string(),
        };

        let response = login(State(state.clone()), CookieJar::new(), Json(req))
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(set_cookie.starts_with("refresh_token="));
        assert!(set_cookie.contains("HttpOnly"));
        assert!(set_cookie.contains("Secure"));
        assert!(set_cookie.contains("SameSite=Strict"));

        let pair: TokenPair = body_json(response).await;
        let claims = state.tokens.verify_access(&pair.access_token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.name, "Ada,Lovelace");
    }

    #[tokio::test]
    async fn test_login_rejects_wrong_password() {
        let state = state();
        let req = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "analytical engine".to_string(),
        };

        let result = login(State(state), CookieJar::new(), Json(req)).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_rejects_unknown_email_identically() {
        let state = state();
        let req = LoginRequest {
            email: "charles@example.com".to_string(),
            password: "difference engine".to_string(),
        };

        let result = login(State(state), CookieJar::new(), Json(req)).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_rejects_invalid_request_shape() {
        let state = state();
        let req = LoginRequest {
            email: "not-an-email".to_string(),
            password: "difference engine".to_string(),
        };

        let result = login(State(state), CookieJar::new(), Json(req)).await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_refresh_reissues_pair_from_cookie() {
        let state = state();
        let identity = Identity {
            id: 42,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };
        let pair = state.tokens.issue_pair(&identity).unwrap();

        let jar = CookieJar::new().add(Cookie::new("refresh_token", pair.refresh_token));
        let response = refresh(State(state.clone()), jar)
            .await
            .unwrap()
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::SET_COOKIE));

        let fresh: TokenPair = body_json(response).await;
        let claims = state.tokens.verify_refresh(&fresh.refresh_token).unwrap();
        assert_eq!(claims.sub, "42");
    }

    #[tokio::test]
    async fn test_refresh_without_cookie_is_rejected() {
        let state = state();

        let result = refresh(State(state), CookieJar::new()).await;
        assert!(matches!(result, Err(AuthError::MissingCredentials)));
    }

    #[tokio::test]
    async fn test_refresh_with_garbage_token_is_rejected() {
        let state = state();

        let jar = CookieJar::new().add(Cookie::new("refresh_token", "not.a.token"));
        let result = refresh(State(state), jar).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[tokio::test]
    async fn test_refresh_for_unknown_subject_is_rejected() {
        let state = state();
        let identity = Identity {
            id: 7,
            first_name: "No".to_string(),
            last_name: "Body".to_string(),
        };
        let pair = state.tokens.issue_pair(&identity).unwrap();

        let jar = CookieJar::new().add(Cookie::new("refresh_token", pair.refresh_token));
        let result = refresh(State(state), jar).await;
        assert!(matches!(result, Err(AuthError::UserNotFound)));
    }

    #[tokio::test]
    async fn test_logout_clears_refresh_cookie() {
        let state = state();

        let response = logout(State(state), CookieJar::new()).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(set_cookie.starts_with("refresh_token="));
        assert!(set_cookie.contains("Max-Age=-1"));
        assert!(set_cookie.contains("1970"));
    }
}
