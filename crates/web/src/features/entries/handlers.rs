use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::{
    Database,
    dto::entry::{CreateExerciseEntryRequest, ExerciseEntryResponse, UpdateExerciseEntryRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::WebError;

use super::services;

#[derive(Debug, Deserialize)]
pub struct EntryListQuery {
    pub exercise_id: Option<Uuid>,
}

#[utoipa::path(
    get,
    path = "/api/exercise-entries",
    params(
        ("exercise_id" = Option<Uuid>, Query, description = "Narrow the list to one exercise")
    ),
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "The caller's entries", body = Vec<ExerciseEntryResponse>),
        (status = 401, description = "No valid session")
    ),
    tag = "exercise-entries"
)]
pub async fn list_entries(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<EntryListQuery>,
) -> Result<Response, WebError> {
    let entries = services::list_entries(db.pool(), user.user_id, query.exercise_id).await?;

    Ok(Json(entries).into_response())
}

#[utoipa::path(
    get,
    path = "/api/exercise-entries/{id}",
    params(
        ("id" = Uuid, Path, description = "Entry id")
    ),
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Entry found", body = ExerciseEntryResponse),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Entry not found")
    ),
    tag = "exercise-entries"
)]
pub async fn get_entry(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let entry = services::get_entry(db.pool(), user.user_id, id).await?;

    Ok(Json(entry).into_response())
}

#[utoipa::path(
    post,
    path = "/api/exercise-entries",
    request_body = CreateExerciseEntryRequest,
    security(("session_cookie" = [])),
    responses(
        (status = 201, description = "Entry created", body = ExerciseEntryResponse),
        (status = 400, description = "Validation error or unknown exercise"),
        (status = 401, description = "No valid session")
    ),
    tag = "exercise-entries"
)]
pub async fn create_entry(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateExerciseEntryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let entry = services::create_entry(db.pool(), user.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/exercise-entries/{id}",
    params(
        ("id" = Uuid, Path, description = "Entry id")
    ),
    request_body = UpdateExerciseEntryRequest,
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Entry updated", body = ExerciseEntryResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Entry not found")
    ),
    tag = "exercise-entries"
)]
pub async fn update_entry(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateExerciseEntryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let entry = services::update_entry(db.pool(), user.user_id, id, &req).await?;

    Ok(Json(entry).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/exercise-entries/{id}",
    params(
        ("id" = Uuid, Path, description = "Entry id")
    ),
    security(("session_cookie" = [])),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Entry not found")
    ),
    tag = "exercise-entries"
)]
pub async fn delete_entry(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_entry(db.pool(), user.user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
