//! Signed-token codec: issuance and validation.
//!
//! Tokens are RS256-signed JWTs carrying `{sub, iss, exp}`. RS256 is
//! the only accepted algorithm; a token signed with any other method
//! (including the HMAC family) is rejected at the header allow-list,
//! never by inspecting claims.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::debug;

use super::AuthError;
use crate::models::TokenClaims;

/// A freshly minted token plus its absolute expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Sign a new token for `subject`, expiring `ttl` from now.
pub fn issue(
    issuer: &str,
    private_key_pem: &[u8],
    subject: &str,
    ttl: Duration,
) -> Result<IssuedToken, AuthError> {
    let key = EncodingKey::from_rsa_pem(private_key_pem)
        .map_err(|e| AuthError::TokenSigning(format!("private key parse: {e}")))?;

    let expires_at = Utc::now() + ttl;
    let claims = TokenClaims {
        sub: subject.to_string(),
        iss: issuer.to_string(),
        exp: expires_at.timestamp(),
    };
    let token = encode(&Header::new(Algorithm::RS256), &claims, &key)
        .map_err(|e| AuthError::TokenSigning(format!("jwt encode: {e}")))?;

    Ok(IssuedToken { token, expires_at })
}

/// Verify a token's signature, issuer, and expiry, returning the claims.
///
/// Every failure collapses to [`AuthError::TokenInvalid`]; the distinct
/// cause is logged at debug level only.
pub fn validate(
    token: &str,
    issuer: &str,
    public_key_pem: &[u8],
) -> Result<TokenClaims, AuthError> {
    let key = match DecodingKey::from_rsa_pem(public_key_pem) {
        Ok(k) => k,
        Err(e) => {
            debug!(error = %e, "public key parse failed");
            return Err(AuthError::TokenInvalid);
        }
    };

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_issuer(&[issuer]);
    validation.leeway = 0;

    let data = match decode::<TokenClaims>(token, &key, &validation) {
        Ok(d) => d,
        Err(e) => {
            debug!(error = %e, "token validation failed");
            return Err(AuthError::TokenInvalid);
        }
    };

    // A token is invalid from the moment the clock reaches its expiry.
    if data.claims.exp <= Utc::now().timestamp() {
        debug!(exp = data.claims.exp, "token expired");
        return Err(AuthError::TokenInvalid);
    }

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::OnceLock;

    fn generate_keypair() -> (Vec<u8>, Vec<u8>) {
        let dir = tempfile::tempdir().unwrap();
        let private = crate::keys::ensure_keypair(dir.path(), "key.pem", "key.pub.pem").unwrap();
        let public = crate::keys::load_key(&dir.path().join("key.pub.pem")).unwrap();
        (private, public)
    }

    // Keygen is slow; share one pair (plus a foreign pair) across tests.
    fn test_keypair() -> &'static (Vec<u8>, Vec<u8>) {
        static PAIR: OnceLock<(Vec<u8>, Vec<u8>)> = OnceLock::new();
        PAIR.get_or_init(generate_keypair)
    }

    fn foreign_keypair() -> &'static (Vec<u8>, Vec<u8>) {
        static PAIR: OnceLock<(Vec<u8>, Vec<u8>)> = OnceLock::new();
        PAIR.get_or_init(generate_keypair)
    }

    #[test]
    fn issue_then_validate_roundtrips_claims() {
        let (private, public) = test_keypair();
        let issued = issue("gately", private, "user-1", Duration::hours(120)).unwrap();
        assert!(issued.expires_at > Utc::now());

        let claims = validate(&issued.token, "gately", public).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.iss, "gately");
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn validate_rejects_wrong_issuer() {
        let (private, public) = test_keypair();
        let issued = issue("gately", private, "user-1", Duration::hours(1)).unwrap();
        assert!(matches!(
            validate(&issued.token, "someone-else", public),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn validate_rejects_foreign_signing_key() {
        let (private, _) = test_keypair();
        let (_, other_public) = foreign_keypair();
        let issued = issue("gately", private, "user-1", Duration::hours(1)).unwrap();
        assert!(matches!(
            validate(&issued.token, "gately", other_public),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn validate_rejects_expired_token() {
        let (private, public) = test_keypair();
        let issued = issue("gately", private, "user-1", Duration::seconds(-30)).unwrap();
        assert!(matches!(
            validate(&issued.token, "gately", public),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn validate_rejects_expiry_exactly_at_now() {
        let (private, public) = test_keypair();
        let issued = issue("gately", private, "user-1", Duration::zero()).unwrap();
        assert!(matches!(
            validate(&issued.token, "gately", public),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn validate_rejects_hmac_signed_token() {
        let (_, public) = test_keypair();
        // Algorithm-confusion probe: an HS256 token whose secret is the
        // public key bytes must fail at the algorithm allow-list.
        let claims = TokenClaims {
            sub: "user-1".into(),
            iss: "gately".into(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        };
        let forged = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(public),
        )
        .unwrap();
        assert!(matches!(
            validate(&forged, "gately", public),
            Err(AuthError::TokenInvalid)
        ));
    }

    #[test]
    fn validate_rejects_garbage_input() {
        let (_, public) = test_keypair();
        assert!(matches!(
            validate("not.a.token", "gately", public),
            Err(AuthError::TokenInvalid)
        ));
    }
}
