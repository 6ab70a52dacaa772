//! Wire models (camelCase on the wire).

use serde::{Deserialize, Serialize};

/// Error envelope returned to all callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
    pub error_code: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub status: u16,
    pub access_token: String,
    /// Always `"Bearer"`.
    pub token_type: String,
    /// Absolute expiry, RFC 3339.
    pub expiry: String,
    #[serde(rename = "tokenTTL")]
    pub token_ttl: i64,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub post_code: Option<String>,
    #[serde(default)]
    pub terms_accepted: bool,
}

/// Public view of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub post_code: Option<String>,
    pub terms_accepted: bool,
}

/// Registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub status: u16,
    pub user: UserBody,
}

/// Claims echoed back on `GET /users/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub status: u16,
    /// Subject of the presented token.
    pub user_id: String,
    pub issuer: String,
    /// Token expiry (unix timestamp).
    pub expiry: i64,
}

/// User deletion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub status: u16,
    pub deleted: bool,
}

impl From<gately_core::models::User> for UserBody {
    fn from(u: gately_core::models::User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            company: u.company,
            post_code: u.post_code,
            terms_accepted: u.terms_accepted,
        }
    }
}
