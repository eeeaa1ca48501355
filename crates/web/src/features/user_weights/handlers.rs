use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::user_weight::{CreateUserWeightRequest, UpdateUserWeightRequest, UserWeightResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/user-weights",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "The caller's measurements, newest first", body = Vec<UserWeightResponse>),
        (status = 401, description = "No valid session")
    ),
    tag = "user-weights"
)]
pub async fn list_user_weights(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
) -> Result<Response, WebError> {
    let weights = services::list_user_weights(db.pool(), user.user_id).await?;

    Ok(Json(weights).into_response())
}

#[utoipa::path(
    get,
    path = "/api/user-weights/{id}",
    params(
        ("id" = Uuid, Path, description = "Measurement id")
    ),
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Measurement found", body = UserWeightResponse),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Measurement not found")
    ),
    tag = "user-weights"
)]
pub async fn get_user_weight(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let weight = services::get_user_weight(db.pool(), user.user_id, id).await?;

    Ok(Json(weight).into_response())
}

#[utoipa::path(
    post,
    path = "/api/user-weights",
    request_body = CreateUserWeightRequest,
    security(("session_cookie" = [])),
    responses(
        (status = 201, description = "Measurement recorded", body = UserWeightResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "No valid session")
    ),
    tag = "user-weights"
)]
pub async fn create_user_weight(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateUserWeightRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let weight = services::create_user_weight(db.pool(), user.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(weight)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/user-weights/{id}",
    params(
        ("id" = Uuid, Path, description = "Measurement id")
    ),
    request_body = UpdateUserWeightRequest,
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Measurement updated", body = UserWeightResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Measurement not found")
    ),
    tag = "user-weights"
)]
pub async fn update_user_weight(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserWeightRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let weight = services::update_user_weight(db.pool(), user.user_id, id, &req).await?;

    Ok(Json(weight).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/user-weights/{id}",
    params(
        ("id" = Uuid, Path, description = "Measurement id")
    ),
    security(("session_cookie" = [])),
    responses(
        (status = 204, description = "Measurement deleted"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Measurement not found")
    ),
    tag = "user-weights"
)]
pub async fn delete_user_weight(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_user_weight(db.pool(), user.user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
