use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::exercise::{
    CreateExerciseMuscleGroupRequest, CreateExerciseRequest, MuscleGroupTag, UpdateExerciseRequest,
};
use crate::error::{Result, StorageError};
use crate::models::{Exercise, ExerciseMuscleGroup};

const EXERCISE_COLUMNS: &str = "exercise_id, user_id, name, description, body_weight_percentage, \
                                created_at, updated_at";

const TAG_COLUMNS: &str = "exercise_muscle_group_id, exercise_id, muscle_group, muscle_role";

pub struct ExerciseRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ExerciseRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the caller's exercises, newest first.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<Exercise>> {
        let sql = format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE user_id = $1 \
             ORDER BY created_at DESC"
        );

        let exercises = sqlx::query_as::<_, Exercise>(&sql)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        Ok(exercises)
    }

    pub async fn find_by_id(&self, user_id: Uuid, exercise_id: Uuid) -> Result<Exercise> {
        let sql =
            format!("SELECT {EXERCISE_COLUMNS} FROM exercises WHERE exercise_id = $1 AND user_id = $2");

        let exercise = sqlx::query_as::<_, Exercise>(&sql)
            .bind(exercise_id)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(exercise)
    }

    /// Create an exercise together with its muscle-group tags in one
    /// transaction.
    pub async fn create(
        &self,
        user_id: Uuid,
        req: &CreateExerciseRequest,
    ) -> Result<(Exercise, Vec<ExerciseMuscleGroup>)> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            INSERT INTO exercises (exercise_id, user_id, name, description, body_weight_percentage)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {EXERCISE_COLUMNS}
            "#
        );

        let exercise = sqlx::query_as::<_, Exercise>(&sql)
            .bind(Uuid::new_v4())
            .bind(user_id)
            .bind(&req.name)
            .bind(&req.description)
            .bind(req.body_weight_percentage)
            .fetch_one(&mut *tx)
            .await?;

        let tags = insert_tags(&mut tx, exercise.exercise_id, &req.muscle_groups).await?;

        tx.commit().await?;

        Ok((exercise, tags))
    }

    /// Update an exercise. The tag set is replaced wholesale: existing tags
    /// are deleted and the requested ones recreated.
    pub async fn update(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
        req: &UpdateExerciseRequest,
    ) -> Result<(Exercise, Vec<ExerciseMuscleGroup>)> {
        let mut tx = self.pool.begin().await?;

        let sql = format!(
            r#"
            UPDATE exercises
            SET name = $3, description = $4, body_weight_percentage = $5, updated_at = now()
            WHERE exercise_id = $1 AND user_id = $2
            RETURNING {EXERCISE_COLUMNS}
            "#
        );

        let exercise = sqlx::query_as::<_, Exercise>(&sql)
            .bind(exercise_id)
            .bind(user_id)
            .bind(&req.name)
            .bind(&req.description)
            .bind(req.body_weight_percentage)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(StorageError::NotFound)?;

        sqlx::query("DELETE FROM exercise_muscle_groups WHERE exercise_id = $1")
            .bind(exercise_id)
            .execute(&mut *tx)
            .await?;

        let tags = insert_tags(&mut tx, exercise_id, &req.muscle_groups).await?;

        tx.commit().await?;

        Ok((exercise, tags))
    }

    /// Delete an exercise. Tags cascade; entries and training slots restrict,
    /// surfacing as a constraint violation.
    pub async fn delete(&self, user_id: Uuid, exercise_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM exercises WHERE exercise_id = $1 AND user_id = $2")
            .bind(exercise_id)
            .bind(user_id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                StorageError::on_constraint(e, "Exercise is still referenced by entries or trainings")
            })?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// All tags belonging to the caller's exercises, for assembling list
    /// responses in one round trip.
    pub async fn list_muscle_groups_for_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ExerciseMuscleGroup>> {
        let tags = sqlx::query_as::<_, ExerciseMuscleGroup>(
            r#"
            SELECT t.exercise_muscle_group_id, t.exercise_id, t.muscle_group, t.muscle_role
            FROM exercise_muscle_groups t
            JOIN exercises e ON e.exercise_id = t.exercise_id
            WHERE e.user_id = $1
            ORDER BY t.muscle_group
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(tags)
    }

    /// Tags of a single exercise. Ownership is implied by the join.
    pub async fn list_muscle_groups(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
    ) -> Result<Vec<ExerciseMuscleGroup>> {
        let tags = sqlx::query_as::<_, ExerciseMuscleGroup>(
            r#"
            SELECT t.exercise_muscle_group_id, t.exercise_id, t.muscle_group, t.muscle_role
            FROM exercise_muscle_groups t
            JOIN exercises e ON e.exercise_id = t.exercise_id
            WHERE e.user_id = $1 AND t.exercise_id = $2
            ORDER BY t.muscle_group
            "#,
        )
        .bind(user_id)
        .bind(exercise_id)
        .fetch_all(self.pool)
        .await?;

        Ok(tags)
    }

    pub async fn muscle_group_exists(&self, exercise_id: Uuid, muscle_group: &str) -> Result<bool> {
        let row: Option<(i64,)> = sqlx::query_as(
            "SELECT 1::bigint FROM exercise_muscle_groups \
             WHERE exercise_id = $1 AND muscle_group = $2",
        )
        .bind(exercise_id)
        .bind(muscle_group)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.is_some())
    }

    pub async fn add_muscle_group(
        &self,
        req: &CreateExerciseMuscleGroupRequest,
    ) -> Result<ExerciseMuscleGroup> {
        let sql = format!(
            r#"
            INSERT INTO exercise_muscle_groups
                (exercise_muscle_group_id, exercise_id, muscle_group, muscle_role)
            VALUES ($1, $2, $3, $4)
            RETURNING {TAG_COLUMNS}
            "#
        );

        let tag = sqlx::query_as::<_, ExerciseMuscleGroup>(&sql)
            .bind(Uuid::new_v4())
            .bind(req.exercise_id)
            .bind(&req.muscle_group)
            .bind(&req.muscle_role)
            .fetch_one(self.pool)
            .await?;

        Ok(tag)
    }

    /// Remove one tag. The join keeps callers inside their own exercises.
    pub async fn delete_muscle_group(
        &self,
        user_id: Uuid,
        exercise_muscle_group_id: Uuid,
    ) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM exercise_muscle_groups t
            USING exercises e
            WHERE t.exercise_id = e.exercise_id
              AND e.user_id = $1
              AND t.exercise_muscle_group_id = $2
            "#,
        )
        .bind(user_id)
        .bind(exercise_muscle_group_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

async fn insert_tags(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    exercise_id: Uuid,
    tags: &[MuscleGroupTag],
) -> Result<Vec<ExerciseMuscleGroup>> {
    let sql = format!(
        r#"
        INSERT INTO exercise_muscle_groups
            (exercise_muscle_group_id, exercise_id, muscle_group, muscle_role)
        VALUES ($1, $2, $3, $4)
        RETURNING {TAG_COLUMNS}
        "#
    );

    let mut inserted = Vec::with_capacity(tags.len());

    for tag in tags {
        let row = sqlx::query_as::<_, ExerciseMuscleGroup>(&sql)
            .bind(Uuid::new_v4())
            .bind(exercise_id)
            .bind(&tag.muscle_group)
            .bind(&tag.muscle_role)
            .fetch_one(&mut **tx)
            .await?;

        inserted.push(row);
    }

    Ok(inserted)
}
