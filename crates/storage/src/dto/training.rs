use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Training, TrainingExercise};

/// One exercise slot inside a training payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TrainingExerciseItem {
    pub exercise_id: Uuid,

    #[validate(range(min = 0, max = 1000, message = "Order index must be between 0 and 1000"))]
    #[serde(default)]
    pub order_index: i32,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// Request payload for creating a training template
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTrainingRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: String,

    #[validate(nested)]
    #[serde(default)]
    pub exercises: Vec<TrainingExerciseItem>,
}

/// Request payload for updating a training template's own fields
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTrainingRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: String,
}

/// Request payload for attaching an exercise to a training
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTrainingExerciseRequest {
    pub training_id: Uuid,
    pub exercise_id: Uuid,

    #[validate(range(min = 0, max = 1000, message = "Order index must be between 0 and 1000"))]
    #[serde(default)]
    pub order_index: i32,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

/// Request payload for reordering or annotating a training exercise
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTrainingExerciseRequest {
    #[validate(range(min = 0, max = 1000, message = "Order index must be between 0 and 1000"))]
    pub order_index: i32,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingExerciseResponse {
    pub training_exercise_id: Uuid,
    pub training_id: Uuid,
    pub exercise_id: Uuid,
    pub order_index: i32,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<TrainingExercise> for TrainingExerciseResponse {
    fn from(row: TrainingExercise) -> Self {
        Self {
            training_exercise_id: row.training_exercise_id,
            training_id: row.training_id,
            exercise_id: row.exercise_id,
            order_index: row.order_index,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainingResponse {
    pub training_id: Uuid,
    pub name: String,
    pub description: String,
    pub exercises: Vec<TrainingExerciseResponse>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TrainingResponse {
    pub fn from_parts(training: Training, exercises: Vec<TrainingExercise>) -> Self {
        Self {
            training_id: training.training_id,
            name: training.name,
            description: training.description,
            exercises: exercises
                .into_iter()
                .map(TrainingExerciseResponse::from)
                .collect(),
            created_at: training.created_at,
            updated_at: training.updated_at,
        }
    }
}
