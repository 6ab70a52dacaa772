//! User and token persistence.
//!
//! [`AuthStore`] is the collaborator contract the auth flows are
//! written against; [`PgAuthStore`] is the PostgreSQL implementation.
//! Tests substitute an in-memory store.

use async_trait::async_trait;
use sqlx::PgPool;

use super::AuthError;
use crate::models::{NewUser, TokenRecord, User, UserWithPassword};

/// Persistence operations required by the auth flows.
///
/// `fetch_latest_token` returns the most recent record for a user (or
/// `None`); the caller decides freshness — an expired record and an
/// absent one are both re-issuance triggers.
#[async_trait]
pub trait AuthStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str)
    -> Result<Option<UserWithPassword>, AuthError>;

    async fn create_user(&self, new_user: &NewUser) -> Result<User, AuthError>;

    /// Delete a user by ID, returning whether a row was removed.
    async fn delete_user(&self, user_id: &str) -> Result<bool, AuthError>;

    async fn fetch_latest_token(&self, user_id: &str) -> Result<Option<TokenRecord>, AuthError>;

    async fn save_token(&self, record: &TokenRecord) -> Result<(), AuthError>;
}

/// PostgreSQL-backed [`AuthStore`].
#[derive(Clone)]
pub struct PgAuthStore {
    pool: PgPool,
}

impl PgAuthStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

type UserRow = (
    String,
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    bool,
    String,
);

fn user_from_row(row: UserRow) -> UserWithPassword {
    let (id, email, first_name, last_name, company, post_code, terms_accepted, password_hash) = row;
    UserWithPassword {
        user: User {
            id,
            email,
            first_name,
            last_name,
            company,
            post_code,
            terms_accepted,
        },
        password_hash,
    }
}

#[async_trait]
impl AuthStore for PgAuthStore {
    async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserWithPassword>, AuthError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id::text, email, first_name, last_name, company, post_code, \
                    terms_accepted, password_hash \
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(user_from_row))
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<User, AuthError> {
        let id = sqlx::query_scalar::<_, String>(
            "INSERT INTO users \
                 (email, first_name, last_name, password_hash, company, post_code, terms_accepted) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id::text",
        )
        .bind(&new_user.email)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.password_hash)
        .bind(&new_user.company)
        .bind(&new_user.post_code)
        .bind(new_user.terms_accepted)
        .fetch_one(&self.pool)
        .await?;
        Ok(User {
            id,
            email: new_user.email.clone(),
            first_name: new_user.first_name.clone(),
            last_name: new_user.last_name.clone(),
            company: new_user.company.clone(),
            post_code: new_user.post_code.clone(),
            terms_accepted: new_user.terms_accepted,
        })
    }

    async fn delete_user(&self, user_id: &str) -> Result<bool, AuthError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1::uuid")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn fetch_latest_token(&self, user_id: &str) -> Result<Option<TokenRecord>, AuthError> {
        let row = sqlx::query_as::<_, (String, String, String, chrono::DateTime<chrono::Utc>, i64)>(
            "SELECT id::text, user_id::text, token, expires_at, ttl_seconds \
             FROM token_records \
             WHERE user_id = $1::uuid \
             ORDER BY expires_at DESC \
             LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(id, user_id, token, expires_at, ttl_seconds)| TokenRecord {
            id,
            user_id,
            token,
            expires_at,
            ttl_seconds,
        }))
    }

    async fn save_token(&self, record: &TokenRecord) -> Result<(), AuthError> {
        sqlx::query(
            "INSERT INTO token_records (id, user_id, token, expires_at, ttl_seconds) \
             VALUES ($1::uuid, $2::uuid, $3, $4, $5)",
        )
        .bind(&record.id)
        .bind(&record.user_id)
        .bind(&record.token)
        .bind(record.expires_at)
        .bind(record.ttl_seconds)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
