use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::{
    Database,
    dto::exercise::{CreateExerciseMuscleGroupRequest, ExerciseMuscleGroupResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::WebError;

use super::services;

#[derive(Debug, Deserialize)]
pub struct MuscleGroupListQuery {
    pub exercise_id: Uuid,
}

#[utoipa::path(
    get,
    path = "/api/exercise-muscle-groups",
    params(
        ("exercise_id" = Uuid, Query, description = "Exercise to list tags for")
    ),
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Tags of the exercise", body = Vec<ExerciseMuscleGroupResponse>),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercise-muscle-groups"
)]
pub async fn list_muscle_groups(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<MuscleGroupListQuery>,
) -> Result<Response, WebError> {
    let tags = services::list_muscle_groups(db.pool(), user.user_id, query.exercise_id).await?;

    Ok(Json(tags).into_response())
}

#[utoipa::path(
    post,
    path = "/api/exercise-muscle-groups",
    request_body = CreateExerciseMuscleGroupRequest,
    security(("session_cookie" = [])),
    responses(
        (status = 201, description = "Tag created", body = ExerciseMuscleGroupResponse),
        (status = 400, description = "Validation error, unknown exercise or duplicate muscle group"),
        (status = 401, description = "No valid session")
    ),
    tag = "exercise-muscle-groups"
)]
pub async fn create_muscle_group(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateExerciseMuscleGroupRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let tag = services::create_muscle_group(db.pool(), user.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(tag)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/exercise-muscle-groups/{id}",
    params(
        ("id" = Uuid, Path, description = "Tag id")
    ),
    security(("session_cookie" = [])),
    responses(
        (status = 204, description = "Tag deleted"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Tag not found")
    ),
    tag = "exercise-muscle-groups"
)]
pub async fn delete_muscle_group(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_muscle_group(db.pool(), user.user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
