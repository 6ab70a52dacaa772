//! Gately authentication server binary.
//!
//! Wires configuration, the connection pool, migrations, and startup
//! key provisioning, then serves the API until ctrl-c.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use gately_api::AppState;
use gately_api::config::{ApiConfig, DEFAULT_TOKEN_TTL_SECS};
use gately_core::keys::KeyMaterial;
use gately_core::store::PgAuthStore;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

/// CLI arguments for the auth server.
#[derive(Parser, Debug)]
#[command(name = "gately_server", about = "Gately authentication server")]
struct Args {
    /// Address to bind the HTTP listener.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:4000")]
    bind_addr: String,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/gately"
    )]
    database_url: String,

    /// Issuer embedded in minted tokens.
    #[arg(long, env = "TOKEN_ISSUER", default_value = "gately")]
    issuer: String,

    /// Directory holding the signing keypair (created if absent).
    #[arg(long, env = "KEY_DIR", default_value = "./keys")]
    key_dir: PathBuf,

    /// Token lifetime in seconds.
    #[arg(long, env = "TOKEN_TTL_SECS", default_value_t = DEFAULT_TOKEN_TTL_SECS)]
    token_ttl_secs: i64,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gately_api=debug,gately_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let config = ApiConfig {
        bind_addr: args.bind_addr,
        pg_connection_url: args.database_url,
        issuer: args.issuer,
        key_dir: args.key_dir,
        token_ttl_secs: args.token_ttl_secs,
        ..ApiConfig::from_env()
    };

    info!(bind_addr = %config.bind_addr, issuer = %config.issuer, "starting gately_server");

    let pool = PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&config.pg_connection_url)
        .await?;

    info!("running database migrations");
    gately_api::migrate(&pool).await?;

    // Provision the signing keypair before the listener starts, so no
    // two requests can ever race the first-time key generation.
    info!(key_dir = %config.key_dir.display(), "provisioning signing keys");
    let keys = KeyMaterial::provision(
        &config.key_dir,
        &config.private_key_file,
        &config.public_key_file,
    )?;

    let state = AppState {
        store: Arc::new(PgAuthStore::new(pool)),
        config: config.clone(),
        keys: Arc::new(keys),
    };

    let app = gately_api::router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
    }
}
