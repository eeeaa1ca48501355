use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::training::{
        CreateTrainingExerciseRequest, TrainingExerciseResponse, UpdateTrainingExerciseRequest,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/training-exercises",
    request_body = CreateTrainingExerciseRequest,
    security(("session_cookie" = [])),
    responses(
        (status = 201, description = "Exercise attached to training", body = TrainingExerciseResponse),
        (status = 400, description = "Validation error, unknown training or unknown exercise"),
        (status = 401, description = "No valid session")
    ),
    tag = "training-exercises"
)]
pub async fn create_training_exercise(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateTrainingExerciseRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let item = services::create_training_exercise(db.pool(), user.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(item)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/training-exercises/{id}",
    params(
        ("id" = Uuid, Path, description = "Training exercise id")
    ),
    request_body = UpdateTrainingExerciseRequest,
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Training exercise updated", body = TrainingExerciseResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Training exercise not found")
    ),
    tag = "training-exercises"
)]
pub async fn update_training_exercise(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTrainingExerciseRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let item = services::update_training_exercise(db.pool(), user.user_id, id, &req).await?;

    Ok(Json(item).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/training-exercises/{id}",
    params(
        ("id" = Uuid, Path, description = "Training exercise id")
    ),
    security(("session_cookie" = [])),
    responses(
        (status = 204, description = "Training exercise removed"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Training exercise not found")
    ),
    tag = "training-exercises"
)]
pub async fn delete_training_exercise(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_training_exercise(db.pool(), user.user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
