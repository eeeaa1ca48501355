use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use storage::{
    Database,
    dto::set::{CreateExerciseSetRequest, ExerciseSetResponse, UpdateExerciseSetRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::error::WebError;

use super::services;

#[derive(Debug, Deserialize)]
pub struct SetListQuery {
    pub entry_id: Uuid,
}

#[utoipa::path(
    get,
    path = "/api/exercise-sets",
    params(
        ("entry_id" = Uuid, Query, description = "Entry to list sets for")
    ),
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Sets of the entry with derived one-rep-max estimates", body = Vec<ExerciseSetResponse>),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Entry not found")
    ),
    tag = "exercise-sets"
)]
pub async fn list_sets(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<SetListQuery>,
) -> Result<Response, WebError> {
    let sets = services::list_sets(db.pool(), user.user_id, query.entry_id).await?;

    Ok(Json(sets).into_response())
}

#[utoipa::path(
    get,
    path = "/api/exercise-sets/{id}",
    params(
        ("id" = Uuid, Path, description = "Set id")
    ),
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Set found", body = ExerciseSetResponse),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Set not found")
    ),
    tag = "exercise-sets"
)]
pub async fn get_set(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let set = services::get_set(db.pool(), user.user_id, id).await?;

    Ok(Json(set).into_response())
}

#[utoipa::path(
    post,
    path = "/api/exercise-sets",
    request_body = CreateExerciseSetRequest,
    security(("session_cookie" = [])),
    responses(
        (status = 201, description = "Set created", body = ExerciseSetResponse),
        (status = 400, description = "Validation error or unknown entry"),
        (status = 401, description = "No valid session")
    ),
    tag = "exercise-sets"
)]
pub async fn create_set(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<CreateExerciseSetRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let set = services::create_set(db.pool(), user.user_id, &req).await?;

    Ok((StatusCode::CREATED, Json(set)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/exercise-sets/{id}",
    params(
        ("id" = Uuid, Path, description = "Set id")
    ),
    request_body = UpdateExerciseSetRequest,
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Set updated", body = ExerciseSetResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Set not found")
    ),
    tag = "exercise-sets"
)]
pub async fn update_set(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateExerciseSetRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let set = services::update_set(db.pool(), user.user_id, id, &req).await?;

    Ok(Json(set).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/exercise-sets/{id}",
    params(
        ("id" = Uuid, Path, description = "Set id")
    ),
    security(("session_cookie" = [])),
    responses(
        (status = 204, description = "Set deleted"),
        (status = 401, description = "No valid session"),
        (status = 404, description = "Set not found")
    ),
    tag = "exercise-sets"
)]
pub async fn delete_set(
    State(db): State<Database>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_set(db.pool(), user.user_id, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
