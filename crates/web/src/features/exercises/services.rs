use std::collections::{HashMap, HashSet};

use sqlx::PgPool;
use storage::{
    dto::exercise::{
        CreateExerciseRequest, ExerciseResponse, MuscleGroupTag, UpdateExerciseRequest,
    },
    models::ExerciseMuscleGroup,
    repository::exercise::ExerciseRepository,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};

/// List the caller's exercises with their muscle-group tags.
pub async fn list_exercises(pool: &PgPool, user_id: Uuid) -> WebResult<Vec<ExerciseResponse>> {
    let repo = ExerciseRepository::new(pool);

    let exercises = repo.list(user_id).await?;
    let mut tags_by_exercise = group_by_exercise(repo.list_muscle_groups_for_user(user_id).await?);

    Ok(exercises
        .into_iter()
        .map(|exercise| {
            let tags = tags_by_exercise
                .remove(&exercise.exercise_id)
                .unwrap_or_default();
            ExerciseResponse::from_parts(exercise, tags)
        })
        .collect())
}

pub async fn get_exercise(
    pool: &PgPool,
    user_id: Uuid,
    exercise_id: Uuid,
) -> WebResult<ExerciseResponse> {
    let repo = ExerciseRepository::new(pool);

    let exercise = repo.find_by_id(user_id, exercise_id).await?;
    let tags = repo.list_muscle_groups(user_id, exercise_id).await?;

    Ok(ExerciseResponse::from_parts(exercise, tags))
}

pub async fn create_exercise(
    pool: &PgPool,
    user_id: Uuid,
    req: &CreateExerciseRequest,
) -> WebResult<ExerciseResponse> {
    ensure_unique_muscle_groups(&req.muscle_groups)?;

    let (exercise, tags) = ExerciseRepository::new(pool).create(user_id, req).await?;

    Ok(ExerciseResponse::from_parts(exercise, tags))
}

/// Update an exercise. Tags are replaced wholesale with the requested set.
pub async fn update_exercise(
    pool: &PgPool,
    user_id: Uuid,
    exercise_id: Uuid,
    req: &UpdateExerciseRequest,
) -> WebResult<ExerciseResponse> {
    ensure_unique_muscle_groups(&req.muscle_groups)?;

    let (exercise, tags) = ExerciseRepository::new(pool)
        .update(user_id, exercise_id, req)
        .await?;

    Ok(ExerciseResponse::from_parts(exercise, tags))
}

pub async fn delete_exercise(pool: &PgPool, user_id: Uuid, exercise_id: Uuid) -> WebResult<()> {
    ExerciseRepository::new(pool)
        .delete(user_id, exercise_id)
        .await?;

    Ok(())
}

fn ensure_unique_muscle_groups(tags: &[MuscleGroupTag]) -> WebResult<()> {
    let mut seen = HashSet::new();

    for tag in tags {
        if !seen.insert(tag.muscle_group.as_str()) {
            return Err(WebError::BadRequest(format!(
                "Muscle group {} is tagged more than once",
                tag.muscle_group
            )));
        }
    }

    Ok(())
}

fn group_by_exercise(
    tags: Vec<ExerciseMuscleGroup>,
) -> HashMap<Uuid, Vec<ExerciseMuscleGroup>> {
    let mut grouped: HashMap<Uuid, Vec<ExerciseMuscleGroup>> = HashMap::new();

    for tag in tags {
        grouped.entry(tag.exercise_id).or_default().push(tag);
    }

    grouped
}
