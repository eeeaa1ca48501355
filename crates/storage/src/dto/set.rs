use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::ExerciseSetWithContext;
use crate::services::one_rep_max;

/// Request payload for logging a set
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateExerciseSetRequest {
    pub entry_id: Uuid,

    #[validate(range(min = 0, max = 1000, message = "Order index must be between 0 and 1000"))]
    #[serde(default)]
    pub order_index: i32,

    #[validate(range(min = 1, max = 100, message = "Reps must be between 1 and 100"))]
    pub reps: i32,

    #[validate(custom(function = "validate_weight"))]
    #[serde(default)]
    pub weight: Decimal,

    #[validate(range(min = 0, max = 10, message = "RIR must be between 0 and 10"))]
    #[serde(default)]
    pub rir: i32,
}

/// Request payload for updating a set
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateExerciseSetRequest {
    #[validate(range(min = 0, max = 1000, message = "Order index must be between 0 and 1000"))]
    pub order_index: i32,

    #[validate(range(min = 1, max = 100, message = "Reps must be between 1 and 100"))]
    pub reps: i32,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Decimal,

    #[validate(range(min = 0, max = 10, message = "RIR must be between 0 and 10"))]
    pub rir: i32,
}

/// Response for a logged set, including the derived one-rep-max estimates
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseSetResponse {
    pub set_id: Uuid,
    pub entry_id: Uuid,
    pub order_index: i32,
    pub reps: i32,
    pub weight: Decimal,
    pub rir: i32,
    pub one_rep_max: Decimal,
    pub perceived_one_rep_max: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<ExerciseSetWithContext> for ExerciseSetResponse {
    fn from(set: ExerciseSetWithContext) -> Self {
        let (estimate, perceived) = one_rep_max::set_estimates(&set);

        Self {
            set_id: set.set_id,
            entry_id: set.entry_id,
            order_index: set.order_index,
            reps: set.reps,
            weight: set.weight,
            rir: set.rir,
            one_rep_max: estimate,
            perceived_one_rep_max: perceived,
            created_at: set.created_at,
            updated_at: set.updated_at,
        }
    }
}

fn validate_weight(weight: &Decimal) -> Result<(), ValidationError> {
    if *weight < Decimal::ZERO || *weight > Decimal::from(1000) {
        let mut error = ValidationError::new("weight_out_of_range");
        error.message = Some("Weight must be between 0 and 1000 kg".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateExerciseSetRequest {
        CreateExerciseSetRequest {
            entry_id: Uuid::new_v4(),
            order_index: 0,
            reps: 10,
            weight: Decimal::from(50),
            rir: 2,
        }
    }

    #[test]
    fn test_valid_set_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_reps_range_enforced() {
        let mut req = request();
        req.reps = 0;
        assert!(req.validate().is_err());

        req.reps = 101;
        assert!(req.validate().is_err());

        req.reps = 100;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_weight_range_enforced() {
        let mut req = request();
        req.weight = Decimal::from(1001);
        assert!(req.validate().is_err());

        req.weight = Decimal::from(-1);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rir_range_enforced() {
        let mut req = request();
        req.rir = 11;
        assert!(req.validate().is_err());
    }
}
