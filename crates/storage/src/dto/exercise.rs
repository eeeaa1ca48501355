use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::{Exercise, ExerciseMuscleGroup, MuscleGroup, MuscleRole};

/// One muscle-group tag inside an exercise payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct MuscleGroupTag {
    #[validate(custom(function = "validate_muscle_group"))]
    pub muscle_group: String,

    #[validate(custom(function = "validate_muscle_role"))]
    pub muscle_role: String,
}

/// Request payload for creating a new exercise
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: String,

    #[validate(custom(function = "validate_body_weight_percentage"))]
    pub body_weight_percentage: Decimal,

    #[validate(nested)]
    #[serde(default)]
    pub muscle_groups: Vec<MuscleGroupTag>,
}

/// Request payload for updating an exercise. The muscle-group tag set is
/// replaced wholesale with the one given here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateExerciseRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    pub name: String,

    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: String,

    #[validate(custom(function = "validate_body_weight_percentage"))]
    pub body_weight_percentage: Decimal,

    #[validate(nested)]
    #[serde(default)]
    pub muscle_groups: Vec<MuscleGroupTag>,
}

/// Request payload for tagging an exercise with one muscle group
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseMuscleGroupRequest {
    pub exercise_id: Uuid,

    #[validate(custom(function = "validate_muscle_group"))]
    pub muscle_group: String,

    #[validate(custom(function = "validate_muscle_role"))]
    pub muscle_role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseMuscleGroupResponse {
    pub exercise_muscle_group_id: Uuid,
    pub exercise_id: Uuid,
    pub muscle_group: String,
    pub muscle_role: String,
}

impl From<ExerciseMuscleGroup> for ExerciseMuscleGroupResponse {
    fn from(tag: ExerciseMuscleGroup) -> Self {
        Self {
            exercise_muscle_group_id: tag.exercise_muscle_group_id,
            exercise_id: tag.exercise_id,
            muscle_group: tag.muscle_group,
            muscle_role: tag.muscle_role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResponse {
    pub exercise_id: Uuid,
    pub name: String,
    pub description: String,
    pub body_weight_percentage: Decimal,
    pub muscle_groups: Vec<ExerciseMuscleGroupResponse>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl ExerciseResponse {
    pub fn from_parts(exercise: Exercise, tags: Vec<ExerciseMuscleGroup>) -> Self {
        Self {
            exercise_id: exercise.exercise_id,
            name: exercise.name,
            description: exercise.description,
            body_weight_percentage: exercise.body_weight_percentage,
            muscle_groups: tags
                .into_iter()
                .map(ExerciseMuscleGroupResponse::from)
                .collect(),
            created_at: exercise.created_at,
            updated_at: exercise.updated_at,
        }
    }
}

fn validate_muscle_group(value: &str) -> Result<(), ValidationError> {
    if MuscleGroup::from_str(value).is_err() {
        let mut error = ValidationError::new("unknown_muscle_group");
        error.message = Some("Unknown muscle group".into());
        return Err(error);
    }
    Ok(())
}

fn validate_muscle_role(value: &str) -> Result<(), ValidationError> {
    if MuscleRole::from_str(value).is_err() {
        let mut error = ValidationError::new("unknown_muscle_role");
        error.message = Some("Role must be primary or secondary".into());
        return Err(error);
    }
    Ok(())
}

fn validate_body_weight_percentage(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO || *value > Decimal::from(2) {
        let mut error = ValidationError::new("body_weight_percentage_out_of_range");
        error.message = Some("Body weight percentage must be between 0 and 2".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateExerciseRequest {
        CreateExerciseRequest {
            name: "Push-up".to_string(),
            description: String::new(),
            body_weight_percentage: Decimal::new(64, 2),
            muscle_groups: vec![
                MuscleGroupTag {
                    muscle_group: "chest".to_string(),
                    muscle_role: "primary".to_string(),
                },
                MuscleGroupTag {
                    muscle_group: "triceps".to_string(),
                    muscle_role: "secondary".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_valid_exercise_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_unknown_muscle_group_rejected() {
        let mut req = request();
        req.muscle_groups[0].muscle_group = "wings".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_unknown_muscle_role_rejected() {
        let mut req = request();
        req.muscle_groups[1].muscle_role = "tertiary".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_body_weight_percentage_range() {
        let mut req = request();
        req.body_weight_percentage = Decimal::from(2);
        assert!(req.validate().is_ok());

        req.body_weight_percentage = Decimal::new(21, 1);
        assert!(req.validate().is_err());

        req.body_weight_percentage = Decimal::from(-1);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut req = request();
        req.name = String::new();
        assert!(req.validate().is_err());
    }
}
