//! Auth domain models.
//!
//! These are internal domain models, distinct from the API wire
//! models (which carry `#[serde(rename)]` for camelCase etc.).

use serde::{Deserialize, Serialize};

/// Domain user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub post_code: Option<String>,
    pub terms_accepted: bool,
}

/// User with password hash (for internal auth flows).
#[derive(Debug, Clone)]
pub struct UserWithPassword {
    pub user: User,
    pub password_hash: String,
}

/// Fields required to create a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password_hash: String,
    pub company: Option<String>,
    pub post_code: Option<String>,
    pub terms_accepted: bool,
}

/// Signed-token record stored in the database.
///
/// A user's record is superseded by inserting a new row after expiry,
/// never mutated in place.
#[derive(Debug, Clone)]
pub struct TokenRecord {
    pub id: String,
    pub user_id: String,
    pub token: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub ttl_seconds: i64,
}

/// Claims embedded in signed access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — user ID (standard JWT `sub` claim).
    pub sub: String,
    /// Issuer that minted the token, checked at validation time.
    pub iss: String,
    /// Expiry (unix timestamp).
    pub exp: i64,
}
