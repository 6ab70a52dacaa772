//! Authentication request handlers.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::models::TokenResponse;
use crate::services::auth;

/// `POST /auth/login` — authenticate with HTTP Basic `email:password`.
pub async fn login_handler(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<Json<TokenResponse>> {
    let (email, password) = basic_credentials(&headers)?;
    let resp = auth::login(
        state.store.as_ref(),
        &state.config,
        &state.keys,
        &email,
        &password,
    )
    .await?;
    Ok(Json(resp))
}

/// Decode `Authorization: Basic <base64(email:password)>`.
///
/// Missing or malformed credentials are an invalid request, before any
/// lookup happens.
fn basic_credentials(headers: &HeaderMap) -> Result<(String, String), ApiError> {
    let invalid = || ApiError::InvalidRequest("Missing or malformed credentials".into());

    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(invalid)?;
    let encoded = header.strip_prefix("Basic ").ok_or_else(invalid)?;
    let decoded = BASE64.decode(encoded).map_err(|_| invalid())?;
    let decoded = String::from_utf8(decoded).map_err(|_| invalid())?;
    let (email, password) = decoded.split_once(':').ok_or_else(invalid)?;
    if email.is_empty() {
        return Err(invalid());
    }
    Ok((email.to_string(), password.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn decodes_basic_credentials() {
        let encoded = BASE64.encode("john@doe.com:secret");
        let headers = headers_with(&format!("Basic {encoded}"));
        let (email, password) = basic_credentials(&headers).unwrap();
        assert_eq!(email, "john@doe.com");
        assert_eq!(password, "secret");
    }

    #[test]
    fn password_may_contain_colons() {
        let encoded = BASE64.encode("john@doe.com:a:b:c");
        let headers = headers_with(&format!("Basic {encoded}"));
        let (_, password) = basic_credentials(&headers).unwrap();
        assert_eq!(password, "a:b:c");
    }

    #[test]
    fn rejects_missing_header() {
        assert!(basic_credentials(&HeaderMap::new()).is_err());
    }

    #[test]
    fn rejects_bearer_scheme() {
        let headers = headers_with("Bearer sometoken");
        assert!(basic_credentials(&headers).is_err());
    }

    #[test]
    fn rejects_invalid_base64() {
        let headers = headers_with("Basic !!!not-base64!!!");
        assert!(basic_credentials(&headers).is_err());
    }

    #[test]
    fn rejects_credentials_without_separator() {
        let encoded = BASE64.encode("no-separator");
        let headers = headers_with(&format!("Basic {encoded}"));
        assert!(basic_credentials(&headers).is_err());
    }
}
