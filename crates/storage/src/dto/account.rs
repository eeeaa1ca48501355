use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::User;

/// Request payload for registering a new account
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email(message = "Email must be a valid address"))]
    #[validate(length(max = 255))]
    pub email: String,

    #[validate(length(
        min = 8,
        max = 128,
        message = "Password must be at least 8 characters"
    ))]
    pub password: String,

    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = "validate_birth_date"))]
    pub birth_date: NaiveDate,

    /// Body height in centimeters
    #[validate(custom(function = "validate_height"))]
    pub height: Decimal,
}

/// Request payload for logging in
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response containing the authenticated user's profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub height: Decimal,
    pub created_at: NaiveDateTime,
    pub last_login_at: Option<NaiveDateTime>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            name: user.name,
            birth_date: user.birth_date,
            height: user.height,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

fn validate_birth_date(birth_date: &NaiveDate) -> Result<(), ValidationError> {
    if *birth_date > chrono::Utc::now().date_naive() {
        let mut error = ValidationError::new("birth_date_in_future");
        error.message = Some("Birth date must not be in the future".into());
        return Err(error);
    }
    Ok(())
}

fn validate_height(height: &Decimal) -> Result<(), ValidationError> {
    if *height <= Decimal::ZERO || *height > Decimal::from(300) {
        let mut error = ValidationError::new("height_out_of_range");
        error.message = Some("Height must be between 0 and 300 cm".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            email: "lifter@example.com".to_string(),
            password: "correct-horse".to_string(),
            name: "Lifter".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
            height: Decimal::from(180),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let mut req = request();
        req.birth_date = chrono::Utc::now().date_naive() + chrono::Days::new(1);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_non_positive_height_rejected() {
        let mut req = request();
        req.height = Decimal::ZERO;
        assert!(req.validate().is_err());

        req.height = Decimal::from(-5);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        let mut req = request();
        req.password = "short".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let mut req = request();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }
}
