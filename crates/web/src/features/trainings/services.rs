use std::collections::HashMap;

use sqlx::PgPool;
use storage::{
    dto::training::{CreateTrainingRequest, TrainingResponse, UpdateTrainingRequest},
    models::TrainingExercise,
    repository::{exercise::ExerciseRepository, training::TrainingRepository},
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// List the caller's training templates with their ordered exercise slots.
pub async fn list_trainings(pool: &PgPool, user_id: Uuid) -> WebResult<Vec<TrainingResponse>> {
    let repo = TrainingRepository::new(pool);

    let trainings = repo.list(user_id).await?;
    let mut items_by_training = group_by_training(repo.list_items_for_user(user_id).await?);

    Ok(trainings
        .into_iter()
        .map(|training| {
            let items = items_by_training
                .remove(&training.training_id)
                .unwrap_or_default();
            TrainingResponse::from_parts(training, items)
        })
        .collect())
}

pub async fn get_training(
    pool: &PgPool,
    user_id: Uuid,
    training_id: Uuid,
) -> WebResult<TrainingResponse> {
    let repo = TrainingRepository::new(pool);

    let training = repo.find_by_id(user_id, training_id).await?;
    let items = repo.list_items(user_id, training_id).await?;

    Ok(TrainingResponse::from_parts(training, items))
}

/// Create a training template. Every referenced exercise must belong to the
/// caller.
pub async fn create_training(
    pool: &PgPool,
    user_id: Uuid,
    req: &CreateTrainingRequest,
) -> WebResult<TrainingResponse> {
    let exercises = ExerciseRepository::new(pool);

    for item in &req.exercises {
        exercises
            .find_by_id(user_id, item.exercise_id)
            .await
            .map_err(|e| WebError::bad_reference(e, "Unknown exercise in training"))?;
    }

    let (training, items) = TrainingRepository::new(pool).create(user_id, req).await?;

    Ok(TrainingResponse::from_parts(training, items))
}

/// Update the template's own fields; exercise slots are managed through the
/// training-exercises resource.
pub async fn update_training(
    pool: &PgPool,
    user_id: Uuid,
    training_id: Uuid,
    req: &UpdateTrainingRequest,
) -> WebResult<TrainingResponse> {
    let repo = TrainingRepository::new(pool);

    let training = repo.update(user_id, training_id, req).await?;
    let items = repo.list_items(user_id, training_id).await?;

    Ok(TrainingResponse::from_parts(training, items))
}

pub async fn delete_training(pool: &PgPool, user_id: Uuid, training_id: Uuid) -> WebResult<()> {
    TrainingRepository::new(pool).delete(user_id, training_id).await?;

    Ok(())
}

fn group_by_training(items: Vec<TrainingExercise>) -> HashMap<Uuid, Vec<TrainingExercise>> {
    let mut grouped: HashMap<Uuid, Vec<TrainingExercise>> = HashMap::new();

    for item in items {
        grouped.entry(item.training_id).or_default().push(item);
    }

    grouped
}
