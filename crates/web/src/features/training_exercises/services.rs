use sqlx::PgPool;
use storage::{
    dto::training::{
        CreateTrainingExerciseRequest, TrainingExerciseResponse, UpdateTrainingExerciseRequest,
    },
    repository::{exercise::ExerciseRepository, training::TrainingRepository},
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// Attach an exercise to a training. Both rows must belong to the caller.
pub async fn create_training_exercise(
    pool: &PgPool,
    user_id: Uuid,
    req: &CreateTrainingExerciseRequest,
) -> WebResult<TrainingExerciseResponse> {
    let trainings = TrainingRepository::new(pool);

    trainings
        .find_by_id(user_id, req.training_id)
        .await
        .map_err(|e| WebError::bad_reference(e, "Unknown training"))?;

    ExerciseRepository::new(pool)
        .find_by_id(user_id, req.exercise_id)
        .await
        .map_err(|e| WebError::bad_reference(e, "Unknown exercise"))?;

    let item = trainings.create_item(req).await?;

    Ok(TrainingExerciseResponse::from(item))
}

pub async fn update_training_exercise(
    pool: &PgPool,
    user_id: Uuid,
    training_exercise_id: Uuid,
    req: &UpdateTrainingExerciseRequest,
) -> WebResult<TrainingExerciseResponse> {
    let item = TrainingRepository::new(pool)
        .update_item(user_id, training_exercise_id, req)
        .await?;

    Ok(TrainingExerciseResponse::from(item))
}

pub async fn delete_training_exercise(
    pool: &PgPool,
    user_id: Uuid,
    training_exercise_id: Uuid,
) -> WebResult<()> {
    TrainingRepository::new(pool)
        .delete_item(user_id, training_exercise_id)
        .await?;

    Ok(())
}
