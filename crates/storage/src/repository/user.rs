use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::User;

const USER_COLUMNS: &str =
    "user_id, email, password_hash, name, birth_date, height, created_at, last_login_at";

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by login email. Returns `None` for unknown addresses so
    /// the caller can decide between 401 (login) and 409 (registration).
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(self.pool)
            .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, user_id: Uuid) -> Result<User> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE user_id = $1");

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(user)
    }

    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
        birth_date: NaiveDate,
        height: Decimal,
    ) -> Result<User> {
        let sql = format!(
            r#"
            INSERT INTO users (user_id, email, password_hash, name, birth_date, height)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        );

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(Uuid::new_v4())
            .bind(email)
            .bind(password_hash)
            .bind(name)
            .bind(birth_date)
            .bind(height)
            .fetch_one(self.pool)
            .await
            .map_err(|e| StorageError::on_constraint(e, "Email already registered"))?;

        Ok(user)
    }

    /// Stamp the login time.
    pub async fn touch_last_login(&self, user_id: Uuid) -> Result<()> {
        let result = sqlx::query("UPDATE users SET last_login_at = now() WHERE user_id = $1")
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
