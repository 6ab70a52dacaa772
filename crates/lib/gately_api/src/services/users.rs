//! User registration and deletion plumbing around the auth core.

use gately_core::models::NewUser;
use gately_core::password;
use gately_core::store::AuthStore;
use tracing::info;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{DeleteResponse, RegisterRequest, UserResponse};
use crate::services::auth::is_valid_email;

/// Register a new user account.
pub async fn register(
    store: &dyn AuthStore,
    config: &ApiConfig,
    req: RegisterRequest,
) -> ApiResult<UserResponse> {
    if !is_valid_email(&req.email) {
        return Err(ApiError::InvalidRequest("Invalid email address".into()));
    }
    if req.password.len() < 8 {
        return Err(ApiError::InvalidRequest(
            "Password must be at least 8 characters".into(),
        ));
    }
    if !req.terms_accepted {
        return Err(ApiError::InvalidRequest(
            "Terms must be accepted".into(),
        ));
    }
    if store.find_user_by_email(&req.email).await?.is_some() {
        return Err(ApiError::InvalidRequest("Email already registered".into()));
    }

    let password_hash = password::hash_password(&req.password, config.bcrypt_cost)?;
    let user = store
        .create_user(&NewUser {
            email: req.email,
            first_name: req.first_name,
            last_name: req.last_name,
            password_hash,
            company: req.company,
            post_code: req.post_code,
            terms_accepted: req.terms_accepted,
        })
        .await?;

    info!(user_id = %user.id, "registered new user");
    Ok(UserResponse {
        status: 200,
        user: user.into(),
    })
}

/// Delete a user by ID.
pub async fn delete(store: &dyn AuthStore, user_id: &str) -> ApiResult<DeleteResponse> {
    let deleted = store.delete_user(user_id).await?;
    if deleted {
        info!(user_id, "deleted user");
    }
    Ok(DeleteResponse {
        status: 200,
        deleted,
    })
}
