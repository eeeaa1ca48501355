use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One logged set. One-rep-max values are not stored; they are derived at
/// read time from the joined context (see `ExerciseSetWithContext`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ExerciseSet {
    pub set_id: Uuid,
    pub entry_id: Uuid,
    pub user_id: Uuid,
    pub order_index: i32,
    pub reps: i32,
    /// External load in kilograms, excluding any body-weight contribution.
    pub weight: Decimal,
    /// Reps in reserve: self-reported distance from failure.
    pub rir: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A set joined with everything the one-rep-max estimate needs: the parent
/// entry's creation time, the exercise's body-weight percentage, and the
/// user's most recent body-weight measurement taken at or before that time.
///
/// `body_weight` is `None` when the user had no measurement yet.
#[derive(Debug, Clone, FromRow)]
pub struct ExerciseSetWithContext {
    pub set_id: Uuid,
    pub entry_id: Uuid,
    pub user_id: Uuid,
    pub order_index: i32,
    pub reps: i32,
    pub weight: Decimal,
    pub rir: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub entry_created_at: NaiveDateTime,
    pub body_weight_percentage: Decimal,
    pub body_weight: Option<Decimal>,
}
