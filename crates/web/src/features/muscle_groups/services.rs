use sqlx::PgPool;
use storage::{
    dto::exercise::{CreateExerciseMuscleGroupRequest, ExerciseMuscleGroupResponse},
    repository::exercise::ExerciseRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// Tags of one owned exercise. A foreign or unknown exercise is a 404.
pub async fn list_muscle_groups(
    pool: &PgPool,
    user_id: Uuid,
    exercise_id: Uuid,
) -> WebResult<Vec<ExerciseMuscleGroupResponse>> {
    let repo = ExerciseRepository::new(pool);

    repo.find_by_id(user_id, exercise_id).await?;

    let tags = repo.list_muscle_groups(user_id, exercise_id).await?;

    Ok(tags
        .into_iter()
        .map(ExerciseMuscleGroupResponse::from)
        .collect())
}

/// Tag an exercise with one muscle group. The same muscle group must not be
/// tagged twice on an exercise; the check runs here, not in the schema.
pub async fn create_muscle_group(
    pool: &PgPool,
    user_id: Uuid,
    req: &CreateExerciseMuscleGroupRequest,
) -> WebResult<ExerciseMuscleGroupResponse> {
    let repo = ExerciseRepository::new(pool);

    repo.find_by_id(user_id, req.exercise_id)
        .await
        .map_err(|e| WebError::bad_reference(e, "Unknown exercise"))?;

    if repo
        .muscle_group_exists(req.exercise_id, &req.muscle_group)
        .await?
    {
        return Err(WebError::BadRequest(format!(
            "Muscle group {} is already tagged on this exercise",
            req.muscle_group
        )));
    }

    let tag = repo.add_muscle_group(req).await?;

    Ok(ExerciseMuscleGroupResponse::from(tag))
}

pub async fn delete_muscle_group(
    pool: &PgPool,
    user_id: Uuid,
    exercise_muscle_group_id: Uuid,
) -> WebResult<()> {
    ExerciseRepository::new(pool)
        .delete_muscle_group(user_id, exercise_muscle_group_id)
        .await?;

    Ok(())
}
