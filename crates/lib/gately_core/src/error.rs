//! Core authentication errors.

use thiserror::Error;

/// Errors produced by the auth core.
///
/// Credential and token failures deliberately carry no detail: the
/// distinct cause is logged where it occurs, never surfaced.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    CredentialMismatch,

    #[error("Invalid token")]
    TokenInvalid,

    #[error("Key provisioning failed: {0}")]
    KeyProvisioning(String),

    #[error("Token signing failed: {0}")]
    TokenSigning(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}
