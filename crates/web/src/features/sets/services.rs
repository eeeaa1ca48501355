use sqlx::PgPool;
use storage::{
    dto::set::{CreateExerciseSetRequest, ExerciseSetResponse, UpdateExerciseSetRequest},
    repository::{entry::EntryRepository, set::SetRepository},
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// Sets of one owned entry, in workout order, with derived estimates.
pub async fn list_sets(
    pool: &PgPool,
    user_id: Uuid,
    entry_id: Uuid,
) -> WebResult<Vec<ExerciseSetResponse>> {
    EntryRepository::new(pool).find_by_id(user_id, entry_id).await?;

    let sets = SetRepository::new(pool).list_for_entry(user_id, entry_id).await?;

    Ok(sets.into_iter().map(ExerciseSetResponse::from).collect())
}

pub async fn get_set(pool: &PgPool, user_id: Uuid, set_id: Uuid) -> WebResult<ExerciseSetResponse> {
    let set = SetRepository::new(pool).find_by_id(user_id, set_id).await?;

    Ok(ExerciseSetResponse::from(set))
}

/// Log a set. The referenced entry must belong to the caller.
pub async fn create_set(
    pool: &PgPool,
    user_id: Uuid,
    req: &CreateExerciseSetRequest,
) -> WebResult<ExerciseSetResponse> {
    EntryRepository::new(pool)
        .find_by_id(user_id, req.entry_id)
        .await
        .map_err(|e| WebError::bad_reference(e, "Unknown exercise entry"))?;

    let set = SetRepository::new(pool).create(user_id, req).await?;

    Ok(ExerciseSetResponse::from(set))
}

pub async fn update_set(
    pool: &PgPool,
    user_id: Uuid,
    set_id: Uuid,
    req: &UpdateExerciseSetRequest,
) -> WebResult<ExerciseSetResponse> {
    let set = SetRepository::new(pool).update(user_id, set_id, req).await?;

    Ok(ExerciseSetResponse::from(set))
}

pub async fn delete_set(pool: &PgPool, user_id: Uuid, set_id: Uuid) -> WebResult<()> {
    SetRepository::new(pool).delete(user_id, set_id).await?;

    Ok(())
}
