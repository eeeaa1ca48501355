use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub birth_date: NaiveDate,
    /// Body height in centimeters.
    pub height: Decimal,
    pub created_at: NaiveDateTime,
    pub last_login_at: Option<NaiveDateTime>,
}
