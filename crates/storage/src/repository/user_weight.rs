use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::user_weight::{CreateUserWeightRequest, UpdateUserWeightRequest};
use crate::error::{Result, StorageError};
use crate::models::UserWeight;

const WEIGHT_COLUMNS: &str =
    "user_weight_id, user_id, weight, measured_at, created_at, updated_at";

pub struct UserWeightRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserWeightRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Measurements newest first.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<UserWeight>> {
        let sql = format!(
            "SELECT {WEIGHT_COLUMNS} FROM user_weights WHERE user_id = $1 \
             ORDER BY measured_at DESC"
        );

        let weights = sqlx::query_as::<_, UserWeight>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(weights)
    }

    pub async fn find_by_id(&self, user_id: Uuid, user_weight_id: Uuid) -> Result<UserWeight> {
        let sql = format!(
            "SELECT {WEIGHT_COLUMNS} FROM user_weights WHERE user_weight_id = $1 AND user_id = $2"
        );

        let weight = sqlx::query_as::<_, UserWeight>(&sql)
            .bind(user_weight_id)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(weight)
    }

    pub async fn create(&self, user_id: Uuid, req: &CreateUserWeightRequest) -> Result<UserWeight> {
        let sql = format!(
            r#"
            INSERT INTO user_weights (user_weight_id, user_id, weight, measured_at)
            VALUES ($1, $2, $3, $4)
            RETURNING {WEIGHT_COLUMNS}
            "#
        );

        let weight = sqlx::query_as::<_, UserWeight>(&sql)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(req.weight)
            .bind(req.measured_at)
            .fetch_one(self.pool)
            .await?;

        Ok(weight)
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        user_weight_id: Uuid,
        req: &UpdateUserWeightRequest,
    ) -> Result<UserWeight> {
        let sql = format!(
            r#"
            UPDATE user_weights
            SET weight = $3, measured_at = $4, updated_at = now()
            WHERE user_weight_id = $1 AND user_id = $2
            RETURNING {WEIGHT_COLUMNS}
            "#
        );

        let weight = sqlx::query_as::<_, UserWeight>(&sql)
            .bind(user_weight_id)
            .bind(user_id)
            .bind(req.weight)
            .bind(req.measured_at)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(weight)
    }

    pub async fn delete(&self, user_id: Uuid, user_weight_id: Uuid) -> Result<()> {
        let result =
            sqlx::query("DELETE FROM user_weights WHERE user_weight_id = $1 AND user_id = $2")
                .bind(user_weight_id)
                .bind(user_id)
                .execute(self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
