use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::UserWeight;

/// Request payload for recording a body-weight measurement
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserWeightRequest {
    #[validate(custom(function = "validate_body_weight"))]
    pub weight: Decimal,

    /// When the measurement was taken, not when it was recorded.
    pub measured_at: NaiveDateTime,
}

/// Request payload for correcting a measurement
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserWeightRequest {
    #[validate(custom(function = "validate_body_weight"))]
    pub weight: Decimal,

    pub measured_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserWeightResponse {
    pub user_weight_id: Uuid,
    pub weight: Decimal,
    pub measured_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<UserWeight> for UserWeightResponse {
    fn from(row: UserWeight) -> Self {
        Self {
            user_weight_id: row.user_weight_id,
            weight: row.weight,
            measured_at: row.measured_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

fn validate_body_weight(weight: &Decimal) -> Result<(), ValidationError> {
    if *weight < Decimal::ONE || *weight > Decimal::from(1000) {
        let mut error = ValidationError::new("weight_out_of_range");
        error.message = Some("Weight must be between 1 and 1000 kg".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_weight_range_enforced() {
        let mut req = CreateUserWeightRequest {
            weight: Decimal::from(80),
            measured_at: chrono::NaiveDate::from_ymd_opt(2025, 3, 1)
                .unwrap()
                .and_hms_opt(8, 0, 0)
                .unwrap(),
        };
        assert!(req.validate().is_ok());

        req.weight = Decimal::ZERO;
        assert!(req.validate().is_err());

        req.weight = Decimal::from(1001);
        assert!(req.validate().is_err());
    }
}
