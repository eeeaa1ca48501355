use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::exercise::{CreateExerciseRequest, ExerciseResponse, UpdateExerciseRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/exercises",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "The caller's exercises", body = Vec<ExerciseResponse>),
        (status = 401, description = "No valid session")
    ),
    tag = "exercises"
)]
pub async fn list_exercises(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
) -> Result<Response, WebError> {
    let exercises = services::list_exercises(db.pool(), user.user_id).await?;

    Ok(Json(exercises).into_response())
}

#[utoipa::path(
    get,
    path = "/api/exercises/{id}",
    params(
        ("id" = Uuid, Path, description = "Exercise id")
    ),
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Exercise found", body = ExerciseResponse),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn get_exercise(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let exercise = services::get_exercise(db.pool(), user.user_id, id).await?;

    Ok(Json(exercise).into_response())
}

#[utoipa::path(
    post,
    path = "/api/exercises",
    request_body = CreateExerciseRequest,
    security(("session_cookie" = [])),
    responses(
        (status = 201, description = "Exercise created", body = ExerciseResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "No valid session")
    ),
    tag = "exercises"
)]
pub async fn create_exercise(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateExerciseRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let exercise = services::create_exercise(db.pool(), user.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(exercise)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/exercises/{id}",
    params(
        ("id" = Uuid, Path, description = "Exercise id")
    ),
    request_body = UpdateExerciseRequest,
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Exercise updated", body = ExerciseResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn update_exercise(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateExerciseRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let exercise = services::update_exercise(db.pool(), user.user_id, id, &req).await?;

    Ok(Json(exercise).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/exercises/{id}",
    params(
        ("id" = Uuid, Path, description = "Exercise id")
    ),
    security(("session_cookie" = [])),
    responses(
        (status = 204, description = "Exercise deleted"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Exercise not found"),
        (status = 409, description = "Exercise is still referenced")
    ),
    tag = "exercises"
)]
pub async fn delete_exercise(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_exercise(db.pool(), user.user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
