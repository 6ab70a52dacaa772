//! Login orchestration: verify credentials, then reuse or mint a
//! signed token.

use chrono::Utc;
use gately_core::keys::KeyMaterial;
use gately_core::models::TokenRecord;
use gately_core::store::AuthStore;
use gately_core::uuid::uuidv7;
use gately_core::{password, token};
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::TokenResponse;

/// Authenticate with email + password, returning a bearer token.
///
/// A stored, unexpired token is returned unchanged, so repeated logins
/// within the TTL window are idempotent. Otherwise a fresh token is
/// signed and persisted; if persisting fails the minted token is
/// discarded — every token handed out must be durably recorded.
pub async fn login(
    store: &dyn AuthStore,
    config: &ApiConfig,
    keys: &KeyMaterial,
    email: &str,
    password_plain: &str,
) -> ApiResult<TokenResponse> {
    if !is_valid_email(email) {
        return Err(ApiError::InvalidRequest("Invalid email address".into()));
    }

    // Unknown email and lookup failure collapse to the same caller-facing
    // code; the distinct cause stays in the logs.
    let user = match store.find_user_by_email(email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            debug!(email, "login for unknown email");
            return Err(ApiError::UserDoNotExist);
        }
        Err(e) => {
            warn!(error = %e, "user lookup failed during login");
            return Err(ApiError::UserDoNotExist);
        }
    };

    password::verify_password(password_plain, &user.password_hash)
        .map_err(|_| ApiError::Unauthorised)?;

    if let Some(record) = store.fetch_latest_token(&user.user.id).await?
        && record.expires_at > Utc::now()
    {
        debug!(user_id = %record.user_id, "reusing unexpired token");
        return Ok(token_response(&record));
    }

    let issued = token::issue(
        &config.issuer,
        &keys.private_pem,
        &user.user.id,
        config.token_ttl(),
    )?;

    let record = TokenRecord {
        id: uuidv7().to_string(),
        user_id: user.user.id.clone(),
        token: issued.token,
        expires_at: issued.expires_at,
        ttl_seconds: config.token_ttl_secs,
    };
    if let Err(e) = store.save_token(&record).await {
        // The token was never recorded, so it must never reach the caller.
        warn!(error = %e, user_id = %record.user_id, "failed to persist freshly minted token");
        return Err(ApiError::TokenGeneration);
    }

    info!(user_id = %record.user_id, expires_at = %record.expires_at, "issued new token");
    Ok(token_response(&record))
}

fn token_response(record: &TokenRecord) -> TokenResponse {
    TokenResponse {
        status: 200,
        access_token: record.token.clone(),
        token_type: "Bearer".to_string(),
        expiry: record.expires_at.to_rfc3339(),
        token_ttl: record.ttl_seconds,
    }
}

/// Minimal email syntax check: one `@` with a non-empty local part and
/// a domain containing a dot.
pub(crate) fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("john@doe.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("john"));
        assert!(!is_valid_email("@doe.com"));
        assert!(!is_valid_email("john@"));
        assert!(!is_valid_email("john@doe"));
        assert!(!is_valid_email("john@.com"));
        assert!(!is_valid_email("john@doe.com."));
    }
}
