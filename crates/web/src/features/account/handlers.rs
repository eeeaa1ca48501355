use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use storage::{
    Database,
    dto::account::{LoginRequest, RegisterRequest, UserResponse},
};
use uuid::Uuid;
use validator::Validate;

use crate::auth::{self, CurrentUser, SESSION_COOKIE};
use crate::config::Config;
use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/account/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "account"
)]
pub async fn register(
    State(db): State<Database>,
    Json(req): Json<RegisterRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let user = services::register(db.pool(), &req).await?;

    tracing::info!(user_id = %user.user_id, "account registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/account/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "account"
)]
pub async fn login(
    State(db): State<Database>,
    Extension(config): Extension<Config>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let (user, session) = services::login(db.pool(), &req, config.session_ttl_hours).await?;

    tracing::info!(user_id = %user.user_id, "user logged in");

    let jar = jar.add(auth::session_cookie(session.token));

    Ok((jar, Json(UserResponse::from(user))).into_response())
}

#[utoipa::path(
    post,
    path = "/api/account/logout",
    responses(
        (status = 204, description = "Session ended, cookie cleared")
    ),
    tag = "account"
)]
pub async fn logout(State(db): State<Database>, jar: CookieJar) -> Result<Response, WebError> {
    if let Some(token) = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
    {
        services::logout(db.pool(), token).await?;
    }

    let jar = jar.remove(auth::removal_cookie());

    Ok((jar, StatusCode::NO_CONTENT).into_response())
}

#[utoipa::path(
    get,
    path = "/api/account",
    security(("session_cookie" = [])),
    responses(
        (status = 200, description = "Current user's profile", body = UserResponse),
        (status = 401, description = "No valid session")
    ),
    tag = "account"
)]
pub async fn get_account(CurrentUser(user): CurrentUser) -> Result<Response, WebError> {
    Ok(Json(UserResponse::from(user)).into_response())
}
