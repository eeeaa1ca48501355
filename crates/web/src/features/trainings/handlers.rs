use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::training::{CreateTrainingRequest, TrainingResponse, UpdateTrainingRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/trainings",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "The caller's training templates", body = Vec<TrainingResponse>),
        (status = 401, description = "No valid session")
    ),
    tag = "trainings"
)]
pub async fn list_trainings(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
) -> Result<Response, WebError> {
    let trainings = services::list_trainings(db.pool(), user.user_id).await?;

    Ok(Json(trainings).into_response())
}

#[utoipa::path(
    get,
    path = "/api/trainings/{id}",
    params(
        ("id" = Uuid, Path, description = "Training id")
    ),
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Training found", body = TrainingResponse),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Training not found")
    ),
    tag = "trainings"
)]
pub async fn get_training(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let training = services::get_training(db.pool(), user.user_id, id).await?;

    Ok(Json(training).into_response())
}

#[utoipa::path(
    post,
    path = "/api/trainings",
    request_body = CreateTrainingRequest,
    security(("session_cookie" = [])),
    responses(
        (status = 201, description = "Training created", body = TrainingResponse),
        (status = 400, description = "Validation error or unknown exercise"),
        (status = 401, description = "No valid session")
    ),
    tag = "trainings"
)]
pub async fn create_training(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateTrainingRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let training = services::create_training(db.pool(), user.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(training)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/trainings/{id}",
    params(
        ("id" = Uuid, Path, description = "Training id")
    ),
    request_body = UpdateTrainingRequest,
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Training updated", body = TrainingResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Training not found")
    ),
    tag = "trainings"
)]
pub async fn update_training(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTrainingRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let training = services::update_training(db.pool(), user.user_id, id, &req).await?;

    Ok(Json(training).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/trainings/{id}",
    params(
        ("id" = Uuid, Path, description = "Training id")
    ),
    security(("session_cookie" = [])),
    responses(
        (status = 204, description = "Training deleted"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Training not found")
    ),
    tag = "trainings"
)]
pub async fn delete_training(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_training(db.pool(), user.user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
