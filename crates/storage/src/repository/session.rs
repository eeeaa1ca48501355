use chrono::Duration;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{AuthSession, User};

pub struct SessionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SessionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a login session with a fresh opaque token.
    pub async fn create(&self, user_id: Uuid, ttl_hours: i64) -> Result<AuthSession> {
        let expires_at = chrono::Utc::now().naive_utc() + Duration::hours(ttl_hours);

        let session = sqlx::query_as::<_, AuthSession>(
            r#"
            INSERT INTO auth_sessions (token, user_id, expires_at)
            VALUES ($1, $2, $3)
            RETURNING token, user_id, created_at, expires_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(self.pool)
        .await?;

        Ok(session)
    }

    /// Resolve a session token to its user, ignoring expired sessions.
    pub async fn find_user_by_token(&self, token: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.user_id, u.email, u.password_hash, u.name, u.birth_date,
                   u.height, u.created_at, u.last_login_at
            FROM auth_sessions s
            JOIN users u ON u.user_id = s.user_id
            WHERE s.token = $1 AND s.expires_at > now()
            "#,
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Remove a session on logout. Deleting an unknown token is not an error.
    pub async fn delete(&self, token: Uuid) -> Result<()> {
        sqlx::query("DELETE FROM auth_sessions WHERE token = $1")
            .bind(token)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
