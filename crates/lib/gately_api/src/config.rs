//! API server configuration.

use std::path::PathBuf;

use gately_core::password::DEFAULT_BCRYPT_COST;

/// Default token lifetime: 120 hours.
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 120 * 60 * 60;

/// Configuration for the API server.
///
/// Loaded once at process start and passed by reference into the auth
/// flows; never mutated afterwards.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:4000").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub pg_connection_url: String,
    /// Issuer embedded in minted tokens and checked at validation time.
    pub issuer: String,
    /// Directory holding the signing keypair.
    pub key_dir: PathBuf,
    /// Private key file name within `key_dir`.
    pub private_key_file: String,
    /// Public key file name within `key_dir`.
    pub public_key_file: String,
    /// Token lifetime in seconds.
    pub token_ttl_secs: i64,
    /// bcrypt cost factor for newly registered passwords.
    pub bcrypt_cost: u32,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable           | Default                                  |
    /// |--------------------|------------------------------------------|
    /// | `BIND_ADDR`        | `127.0.0.1:4000`                         |
    /// | `DATABASE_URL`     | `postgres://localhost:5432/gately`       |
    /// | `TOKEN_ISSUER`     | `gately`                                 |
    /// | `KEY_DIR`          | `./keys`                                 |
    /// | `PRIVATE_KEY_FILE` | `gately.rsa`                             |
    /// | `PUBLIC_KEY_FILE`  | `gately.rsa.pub`                         |
    /// | `TOKEN_TTL_SECS`   | `432000` (120 h)                         |
    /// | `BCRYPT_COST`      | `10`                                     |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:4000".into()),
            pg_connection_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/gately".into()),
            issuer: std::env::var("TOKEN_ISSUER").unwrap_or_else(|_| "gately".into()),
            key_dir: std::env::var("KEY_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./keys")),
            private_key_file: std::env::var("PRIVATE_KEY_FILE")
                .unwrap_or_else(|_| "gately.rsa".into()),
            public_key_file: std::env::var("PUBLIC_KEY_FILE")
                .unwrap_or_else(|_| "gately.rsa.pub".into()),
            token_ttl_secs: std::env::var("TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_TTL_SECS),
            bcrypt_cost: std::env::var("BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_BCRYPT_COST),
        }
    }

    /// Token lifetime as a chrono duration.
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.token_ttl_secs)
    }
}
