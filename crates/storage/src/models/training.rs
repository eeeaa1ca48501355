use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A reusable workout template.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Training {
    pub training_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Ordered association of an exercise within a training template.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TrainingExercise {
    pub training_exercise_id: Uuid,
    pub training_id: Uuid,
    pub exercise_id: Uuid,
    pub order_index: i32,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
