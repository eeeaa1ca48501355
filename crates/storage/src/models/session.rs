use chrono::NaiveDateTime;
use sqlx::FromRow;
use uuid::Uuid;

/// A browser login session backing the authentication cookie.
///
/// The token is an opaque value; expired rows are ignored on lookup and
/// removed on logout.
#[derive(Debug, Clone, FromRow)]
pub struct AuthSession {
    pub token: Uuid,
    pub user_id: Uuid,
    pub created_at: NaiveDateTime,
    pub expires_at: NaiveDateTime,
}
