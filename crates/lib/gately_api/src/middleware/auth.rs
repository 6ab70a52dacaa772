//! Authentication middleware — bearer token extraction and validation.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use gately_core::models::TokenClaims;
use gately_core::token;

use crate::AppState;
use crate::error::ApiError;

/// Claims of the authenticated caller, stored in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub TokenClaims);

/// Axum middleware: extracts `Authorization: Bearer <token>`, validates
/// the token, and injects [`AuthenticatedUser`] into request extensions.
///
/// A missing header is 401; a present header without the literal
/// (case-sensitive) `"Bearer "` prefix, or with nothing after it, is
/// 400. Validation failures are 401 and the request never reaches the
/// protected handler.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorised)?;

    let token_text = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::InvalidRequest("Malformed authorization header".into()))?;
    if token_text.is_empty() {
        return Err(ApiError::InvalidRequest(
            "Malformed authorization header".into(),
        ));
    }

    let claims = token::validate(token_text, &state.config.issuer, &state.keys.public_pem)
        .map_err(|_| ApiError::Unauthorised)?;

    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}
