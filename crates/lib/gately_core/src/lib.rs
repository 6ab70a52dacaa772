//! # gately_core
//!
//! Core auth domain logic for Gately: signing-key provisioning,
//! credential verification, the signed-token codec, and the token
//! store contract shared by `gately_api` and `gately_server`.

pub mod error;
pub mod keys;
pub mod migrate;
pub mod models;
pub mod password;
pub mod store;
pub mod token;
pub mod uuid;

pub use error::AuthError;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
