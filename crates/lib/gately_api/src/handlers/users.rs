//! User registration and profile handlers.

use axum::extract::{Path, State};
use axum::{Extension, Json};

use crate::AppState;
use crate::error::ApiResult;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::{DeleteResponse, MeResponse, RegisterRequest, UserResponse};
use crate::services::users;

/// `POST /users` — create a new user account.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<Json<UserResponse>> {
    let resp = users::register(state.store.as_ref(), &state.config, body).await?;
    Ok(Json(resp))
}

/// `GET /users/me` — echo the authenticated caller's claims.
///
/// The claims come from request extensions, where the auth middleware
/// put them.
pub async fn me_handler(
    Extension(AuthenticatedUser(claims)): Extension<AuthenticatedUser>,
) -> ApiResult<Json<MeResponse>> {
    Ok(Json(MeResponse {
        status: 200,
        user_id: claims.sub,
        issuer: claims.iss,
        expiry: claims.exp,
    }))
}

/// `DELETE /users/{id}` — remove a user account.
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let resp = users::delete(state.store.as_ref(), &id).await?;
    Ok(Json(resp))
}
