use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Exercise {
    pub exercise_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    /// Fraction of the user's body weight counted as load for this movement,
    /// e.g. 0.64 for push-ups. Zero for purely external-load exercises.
    pub body_weight_percentage: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Tagging row associating a muscle group with an exercise.
///
/// `muscle_group` and `muscle_role` are stored as text; the enums below are
/// the authoritative value sets.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ExerciseMuscleGroup {
    pub exercise_muscle_group_id: Uuid,
    pub exercise_id: Uuid,
    pub muscle_group: String,
    pub muscle_role: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter, ToSchema)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Neck,
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Abs,
    Glutes,
    Quadriceps,
    Hamstrings,
    Calves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter, ToSchema)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MuscleRole {
    Primary,
    Secondary,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_muscle_group_parses_snake_case() {
        assert_eq!(MuscleGroup::from_str("quadriceps").unwrap(), MuscleGroup::Quadriceps);
        assert_eq!(MuscleGroup::from_str("abs").unwrap(), MuscleGroup::Abs);
        assert!(MuscleGroup::from_str("wings").is_err());
    }

    #[test]
    fn test_muscle_group_display_round_trips() {
        for group in MuscleGroup::iter() {
            assert_eq!(MuscleGroup::from_str(&group.to_string()).unwrap(), group);
        }
    }

    #[test]
    fn test_muscle_role_values() {
        assert_eq!(MuscleRole::Primary.to_string(), "primary");
        assert_eq!(MuscleRole::from_str("secondary").unwrap(), MuscleRole::Secondary);
        assert!(MuscleRole::from_str("tertiary").is_err());
    }
}
