//! Password hashing and verification via bcrypt.

use super::AuthError;

/// Default bcrypt cost factor.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Hash a password with bcrypt at the given cost.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(password, cost).map_err(|e| AuthError::Validation(format!("bcrypt hash: {e}")))
}

/// Verify a password against a bcrypt hash.
///
/// A mismatch and a malformed stored hash both collapse to
/// [`AuthError::CredentialMismatch`]; the plaintext never appears in
/// errors or logs.
pub fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    match bcrypt::verify(password, hash) {
        Ok(true) => Ok(()),
        Ok(false) => Err(AuthError::CredentialMismatch),
        Err(e) => {
            tracing::debug!(error = %e, "stored password hash failed to parse");
            Err(AuthError::CredentialMismatch)
        }
    }
}
