use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::training::{
    CreateTrainingExerciseRequest, CreateTrainingRequest, TrainingExerciseItem,
    UpdateTrainingExerciseRequest, UpdateTrainingRequest,
};
use crate::error::{Result, StorageError};
use crate::models::{Training, TrainingExercise};

const TRAINING_COLUMNS: &str = "training_id, user_id, name, description, created_at, updated_at";

const ITEM_COLUMNS: &str = "training_exercise_id, training_id, exercise_id, order_index, notes, \
                            created_at, updated_at";

pub struct TrainingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TrainingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Training>> {
        let sql = format!(
            "SELECT {TRAINING_COLUMNS} FROM trainings WHERE user_id = $1 ORDER BY created_at DESC"
        );

        let trainings = sqlx::query_as::<_, Training>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(trainings)
    }

    pub async fn find_by_id(&self, user_id: Uuid, training_id: Uuid) -> Result<Training> {
        let sql = format!(
            "SELECT {TRAINING_COLUMNS} FROM trainings WHERE training_id = $1 AND user_id = $2"
        );

        let training = sqlx::query_as::<_, Training>(&sql)
            .bind(training_id)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(training)
    }

    /// Create a training together with its ordered exercise slots.
    pub async fn create(
        &self,
        user_id: Uuid,
        req: &CreateTrainingRequest,
    ) -> Result<(Training, Vec<TrainingExercise>)> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            INSERT INTO trainings (training_id, user_id, name, description)
            VALUES ($1, $2, $3, $4)
            RETURNING {TRAINING_COLUMNS}
            "#
        );

        let training = sqlx::query_as::<_, Training>(&sql)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(&req.name)
            .bind(&req.description)
            .fetch_one(&mut *tx)
            .await?;

        let items = insert_items(&mut tx, training.training_id, &req.exercises).await?;

        tx.commit().await?;

        Ok((training, items))
    }

    pub async fn update(
        &self,
        user_id: Uuid,
        training_id: Uuid,
        req: &UpdateTrainingRequest,
    ) -> Result<Training> {
        let sql = format!(
            r#"
            UPDATE trainings
            SET name = $3, description = $4, updated_at = now()
            WHERE training_id = $1 AND user_id = $2
            RETURNING {TRAINING_COLUMNS}
            "#
        );

        let training = sqlx::query_as::<_, Training>(&sql)
            .bind(training_id)
            .bind(user_id)
            .bind(&req.name)
            .bind(&req.description)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(training)
    }

    /// Delete a training; its exercise slots cascade.
    pub async fn delete(&self, user_id: Uuid, training_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM trainings WHERE training_id = $1 AND user_id = $2")
            .bind(training_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Exercise slots of one training, in template order.
    pub async fn list_items(&self, user_id: Uuid, training_id: Uuid) -> Result<Vec<TrainingExercise>> {
        let items = sqlx::query_as::<_, TrainingExercise>(
            r#"
            SELECT i.training_exercise_id, i.training_id, i.exercise_id, i.order_index,
                   i.notes, i.created_at, i.updated_at
            FROM training_exercises i
            JOIN trainings t ON t.training_id = i.training_id
            WHERE t.user_id = $1 AND i.training_id = $2
            ORDER BY i.order_index, i.created_at
            "#,
        )
        .bind(user_id)
        .bind(training_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// All slots across the caller's trainings, for list responses.
    pub async fn list_items_for_user(&self, user_id: Uuid) -> Result<Vec<TrainingExercise>> {
        let items = sqlx::query_as::<_, TrainingExercise>(
            r#"
            SELECT i.training_exercise_id, i.training_id, i.exercise_id, i.order_index,
                   i.notes, i.created_at, i.updated_at
            FROM training_exercises i
            JOIN trainings t ON t.training_id = i.training_id
            WHERE t.user_id = $1
            ORDER BY i.order_index, i.created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    pub async fn create_item(
        &self,
        req: &CreateTrainingExerciseRequest,
    ) -> Result<TrainingExercise> {
        let sql = format!(
            r#"
            INSERT INTO training_exercises
                (training_exercise_id, training_id, exercise_id, order_index, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {ITEM_COLUMNS}
            "#
        );

        let item = sqlx::query_as::<_, TrainingExercise>(&sql)
            .bind(Uuid::new_v4())
            .bind(req.training_id)
            .bind(req.exercise_id)
            .bind(req.order_index)
            .bind(&req.notes)
            .fetch_one(self.pool)
            .await?;

        Ok(item)
    }

    pub async fn update_item(
        &self,
        user_id: Uuid,
        training_exercise_id: Uuid,
        req: &UpdateTrainingExerciseRequest,
    ) -> Result<TrainingExercise> {
        let item = sqlx::query_as::<_, TrainingExercise>(
            r#"
            UPDATE training_exercises i
            SET order_index = $3, notes = $4, updated_at = now()
            FROM trainings t
            WHERE t.training_id = i.training_id
              AND t.user_id = $1
              AND i.training_exercise_id = $2
            RETURNING i.training_exercise_id, i.training_id, i.exercise_id, i.order_index,
                      i.notes, i.created_at, i.updated_at
            "#,
        )
        .bind(user_id)
        .bind(training_exercise_id)
        .bind(req.order_index)
        .bind(&req.notes)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(item)
    }

    pub async fn delete_item(&self, user_id: Uuid, training_exercise_id: Uuid) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM training_exercises i
            USING trainings t
            WHERE t.training_id = i.training_id
              AND t.user_id = $1
              AND i.training_exercise_id = $2
            "#,
        )
        .bind(user_id)
        .bind(training_exercise_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

async fn insert_items(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    training_id: Uuid,
    items: &[TrainingExerciseItem],
) -> Result<Vec<TrainingExercise>> {
    let sql = format!(
        r#"
        INSERT INTO training_exercises
            (training_exercise_id, training_id, exercise_id, order_index, notes)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {ITEM_COLUMNS}
        "#
    );

    let mut inserted = Vec::with_capacity(items.len());

    for item in items {
        let row = sqlx::query_as::<_, TrainingExercise>(&sql)
            .bind(Uuid::new_v4())
            .bind(training_id)
            .bind(item.exercise_id)
            .bind(item.order_index)
            .bind(&item.notes)
            .fetch_one(&mut **tx)
            .await?;

        inserted.push(row);
    }

    Ok(inserted)
}
