use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A body-weight measurement. `measured_at` is when the measurement was
/// taken, independent of when the row was created.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserWeight {
    pub user_weight_id: Uuid,
    pub user_id: Uuid,
    pub weight: Decimal,
    pub measured_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
