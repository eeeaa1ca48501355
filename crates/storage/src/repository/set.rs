use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::set::{CreateExerciseSetRequest, UpdateExerciseSetRequest};
use crate::error::{Result, StorageError};
use crate::models::ExerciseSetWithContext;

/// Base query joining a set with everything the one-rep-max estimate needs:
/// the parent entry's creation time, the exercise's body-weight percentage,
/// and the most recent body-weight measurement at or before that time.
const SET_CONTEXT_SELECT: &str = r#"
    SELECT s.set_id, s.entry_id, s.user_id, s.order_index, s.reps, s.weight, s.rir,
           s.created_at, s.updated_at,
           e.created_at AS entry_created_at,
           x.body_weight_percentage,
           (SELECT uw.weight
            FROM user_weights uw
            WHERE uw.user_id = s.user_id AND uw.measured_at <= e.created_at
            ORDER BY uw.measured_at DESC
            LIMIT 1) AS body_weight
    FROM exercise_sets s
    JOIN exercise_entries e ON e.entry_id = s.entry_id
    JOIN exercises x ON x.exercise_id = e.exercise_id
"#;

pub struct SetRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SetRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Sets of one entry in workout order, with derivation context.
    pub async fn list_for_entry(
        &self,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> Result<Vec<ExerciseSetWithContext>> {
        let sql = format!(
            "{SET_CONTEXT_SELECT} WHERE s.user_id = $1 AND s.entry_id = $2 \
             ORDER BY s.order_index, s.created_at"
        );

        let sets = sqlx::query_as::<_, ExerciseSetWithContext>(&sql)
            .bind(user_id)
            .bind(entry_id)
            .fetch_all(self.pool)
            .await?;

        Ok(sets)
    }

    pub async fn find_by_id(&self, user_id: Uuid, set_id: Uuid) -> Result<ExerciseSetWithContext> {
        let sql = format!("{SET_CONTEXT_SELECT} WHERE s.user_id = $1 AND s.set_id = $2");

        let set = sqlx::query_as::<_, ExerciseSetWithContext>(&sql)
            .bind(user_id)
            .bind(set_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(set)
    }

    /// Insert a set and re-read it with its derivation context.
    pub async fn create(
        &self,
        user_id: Uuid,
        req: &CreateExerciseSetRequest,
    ) -> Result<ExerciseSetWithContext> {
        let (set_id,): (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO exercise_sets (set_id, entry_id, user_id, order_index, reps, weight, rir)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING set_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(req.entry_id)
        .bind(user_id)
        .bind(req.order_index)
        .bind(req.reps)
        .bind(req.weight)
        .bind(req.rir)
        .fetch_one(self.pool)
        .await?;

        self.find_by_id(user_id, set_id).await
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        set_id: Uuid,
        req: &UpdateExerciseSetRequest,
    ) -> Result<ExerciseSetWithContext> {
        let updated: Option<(Uuid,)> = sqlx::query_as(
            r#"
            UPDATE exercise_sets
            SET order_index = $3, reps = $4, weight = $5, rir = $6, updated_at = now()
            WHERE set_id = $1 AND user_id = $2
            RETURNING set_id
            "#,
        )
        .bind(set_id)
        .bind(user_id)
        .bind(req.order_index)
        .bind(req.reps)
        .bind(req.weight)
        .bind(req.rir)
        .fetch_optional(self.pool)
        .await?;

        let (set_id,) = updated.ok_or(StorageError::NotFound)?;

        self.find_by_id(user_id, set_id).await
    }

    pub async fn delete(&self, user_id: Uuid, set_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM exercise_sets WHERE set_id = $1 AND user_id = $2")
            .bind(set_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
