use sqlx::PgPool;
use storage::{
    dto::entry::{CreateExerciseEntryRequest, ExerciseEntryResponse, UpdateExerciseEntryRequest},
    repository::{entry::EntryRepository, exercise::ExerciseRepository},
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

pub async fn list_entries(
    pool: &PgPool,
    user_id: Uuid,
    exercise_id: Option<Uuid>,
) -> WebResult<Vec<ExerciseEntryResponse>> {
    let entries = EntryRepository::new(pool).list(user_id, exercise_id).await?;

    Ok(entries.into_iter().map(ExerciseEntryResponse::from).collect())
}

pub async fn get_entry(pool: &PgPool, user_id: Uuid, entry_id: Uuid) -> WebResult<ExerciseEntryResponse> {
    let entry = EntryRepository::new(pool).find_by_id(user_id, entry_id).await?;

    Ok(ExerciseEntryResponse::from(entry))
}

/// Log a new session. The referenced exercise must belong to the caller.
pub async fn create_entry(
    pool: &PgPool,
    user_id: Uuid,
    req: &CreateExerciseEntryRequest,
) -> WebResult<ExerciseEntryResponse> {
    ExerciseRepository::new(pool)
        .find_by_id(user_id, req.exercise_id)
        .await
        .map_err(|e| WebError::bad_reference(e, "Unknown exercise"))?;

    let entry = EntryRepository::new(pool).create(user_id, req).await?;

    Ok(ExerciseEntryResponse::from(entry))
}

pub async fn update_entry(
    pool: &PgPool,
    user_id: Uuid,
    entry_id: Uuid,
    req: &UpdateExerciseEntryRequest,
) -> WebResult<ExerciseEntryResponse> {
    let entry = EntryRepository::new(pool)
        .update(user_id, entry_id, &req.notes)
        .await?;

    Ok(ExerciseEntryResponse::from(entry))
}

pub async fn delete_entry(pool: &PgPool, user_id: Uuid, entry_id: Uuid) -> WebResult<()> {
    EntryRepository::new(pool).delete(user_id, entry_id).await?;

    Ok(())
}
