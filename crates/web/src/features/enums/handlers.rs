use axum::{
    Json,
    response::{IntoResponse, Response},
};
use storage::models::{MuscleGroup, MuscleRole};
use strum::IntoEnumIterator;

#[utoipa::path(
    get,
    path = "/api/enums/muscle-groups",
    responses(
        (status = 200, description = "Allowed muscle-group values", body = Vec<String>)
    ),
    tag = "enums"
)]
pub async fn muscle_group_values() -> Response {
    let values: Vec<String> = MuscleGroup::iter().map(|value| value.to_string()).collect();

    Json(values).into_response()
}

#[utoipa::path(
    get,
    path = "/api/enums/muscle-roles",
    responses(
        (status = 200, description = "Allowed muscle-role values", body = Vec<String>)
    ),
    tag = "enums"
)]
pub async fn muscle_role_values() -> Response {
    let values: Vec<String> = MuscleRole::iter().map(|value| value.to_string()).collect();

    Json(values).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muscle_group_values_are_snake_case() {
        let values: Vec<String> = MuscleGroup::iter().map(|value| value.to_string()).collect();

        assert!(values.contains(&"quadriceps".to_string()));
        assert!(
            values
                .iter()
                .all(|v| v.chars().all(|c| c.is_ascii_lowercase() || c == '_'))
        );
    }

    #[test]
    fn test_muscle_role_values() {
        let values: Vec<String> = MuscleRole::iter().map(|value| value.to_string()).collect();

        assert_eq!(values, vec!["primary".to_string(), "secondary".to_string()]);
    }
}
