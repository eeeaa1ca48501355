use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::entry::CreateExerciseEntryRequest;
use crate::error::{Result, StorageError};
use crate::models::ExerciseEntry;

const ENTRY_COLUMNS: &str = "entry_id, exercise_id, user_id, notes, created_at, updated_at";

pub struct EntryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EntryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List the caller's entries, optionally narrowed to one exercise.
    pub async fn list(&self, user_id: Uuid, exercise_id: Option<Uuid>) -> Result<Vec<ExerciseEntry>> {
        let entries = match exercise_id {
            Some(exercise_id) => {
                let sql = format!(
                    "SELECT {ENTRY_COLUMNS} FROM exercise_entries \
                     WHERE user_id = $1 AND exercise_id = $2 ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, ExerciseEntry>(&sql)
                    .bind(user_id)
                    .bind(exercise_id)
                    .fetch_all(self.pool)
                    .await?
            }
            None => {
                let sql = format!(
                    "SELECT {ENTRY_COLUMNS} FROM exercise_entries \
                     WHERE user_id = $1 ORDER BY created_at DESC"
                );
                sqlx::query_as::<_, ExerciseEntry>(&sql)
                    .bind(user_id)
                    .fetch_all(self.pool)
                    .await?
            }
        };

        Ok(entries)
    }

    pub async fn find_by_id(&self, user_id: Uuid, entry_id: Uuid) -> Result<ExerciseEntry> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM exercise_entries WHERE entry_id = $1 AND user_id = $2"
        );

        let entry = sqlx::query_as::<_, ExerciseEntry>(&sql)
            .bind(entry_id)
            .bind(user_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(entry)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        req: &CreateExerciseEntryRequest,
    ) -> Result<ExerciseEntry> {
        let sql = format!(
            r#"
            INSERT INTO exercise_entries (entry_id, exercise_id, user_id, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING {ENTRY_COLUMNS}
            "#
        );

        let entry = sqlx::query_as::<_, ExerciseEntry>(&sql)
            .bind(Uuid::new_v4())
            .bind(req.exercise_id)
            .bind(user_id)
            .bind(&req.notes)
            .fetch_one(self.pool)
            .await?;

        Ok(entry)
    }

    pub async fn update(&self, user_id: Uuid, entry_id: Uuid, notes: &str) -> Result<ExerciseEntry> {
        let sql = format!(
            r#"
            UPDATE exercise_entries
            SET notes = $3, updated_at = now()
            WHERE entry_id = $1 AND user_id = $2
            RETURNING {ENTRY_COLUMNS}
            "#
        );

        let entry = sqlx::query_as::<_, ExerciseEntry>(&sql)
            .bind(entry_id)
            .bind(user_id)
            .bind(notes)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        Ok(entry)
    }

    /// Delete an entry; its sets cascade.
    pub async fn delete(&self, user_id: Uuid, entry_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM exercise_entries WHERE entry_id = $1 AND user_id = $2")
            .bind(entry_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
