//! User Store Seam
//!
//! The embedding application owns user persistence. It implements this
//! trait over whatever storage it has, and the auth handlers only ever ask
//! the two questions the credential flow needs.

use crate::error::AuthError;
use crate::models::User;

use async_trait::async_trait;

/// Lookup interface the embedding application provides
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by email for the login flow
    async fn user_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Look up a user by id when exchanging a refresh token
    async fn user_by_id(&self, id: i64) -> Result<Option<User>, AuthError>;
}
