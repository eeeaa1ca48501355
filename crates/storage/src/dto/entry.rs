use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::ExerciseEntry;

/// Request payload for logging a new exercise session
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseEntryRequest {
    pub exercise_id: Uuid,

    #[validate(length(max = 2000))]
    #[serde(default)]
    pub notes: String,
}

/// Request payload for updating an entry's notes
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateExerciseEntryRequest {
    #[validate(length(max = 2000))]
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseEntryResponse {
    pub entry_id: Uuid,
    pub exercise_id: Uuid,
    pub notes: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<ExerciseEntry> for ExerciseEntryResponse {
    fn from(entry: ExerciseEntry) -> Self {
        Self {
            entry_id: entry.entry_id,
            exercise_id: entry.exercise_id,
            notes: entry.notes,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}
