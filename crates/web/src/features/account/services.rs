use sqlx::PgPool;
use storage::{
    dto::account::{LoginRequest, RegisterRequest},
    models::{AuthSession, User},
    repository::{session::SessionRepository, user::UserRepository},
};
use uuid::Uuid;

use crate::auth::password;
use crate::error::{WebError, WebResult};

/// Register a new account. A duplicate email surfaces as a constraint
/// violation from the unique index, not a pre-check.
pub async fn register(pool: &PgPool, req: &RegisterRequest) -> WebResult<User> {
    let password_hash = password::hash_password(&req.password)?;

    let user = UserRepository::new(pool)
        .create(&req.email, &password_hash, &req.name, req.birth_date, req.height)
        .await?;

    Ok(user)
}

/// Verify credentials and open a session. Unknown email and wrong password
/// are indistinguishable to the caller.
pub async fn login(
    pool: &PgPool,
    req: &LoginRequest,
    session_ttl_hours: i64,
) -> WebResult<(User, AuthSession)> {
    let users = UserRepository::new(pool);

    let Some(user) = users.find_by_email(&req.email).await? else {
        return Err(WebError::Unauthorized);
    };

    if !password::verify_password(&req.password, &user.password_hash)? {
        tracing::warn!(user_id = %user.user_id, "login with invalid password");
        return Err(WebError::Unauthorized);
    }

    users.touch_last_login(user.user_id).await?;
    let user = users.find_by_id(user.user_id).await?;

    let session = SessionRepository::new(pool)
        .create(user.user_id, session_ttl_hours)
        .await?;

    Ok((user, session))
}

/// Drop the session row. Idempotent: logging out twice is not an error.
pub async fn logout(pool: &PgPool, token: Uuid) -> WebResult<()> {
    SessionRepository::new(pool).delete(token).await?;
    Ok(())
}
