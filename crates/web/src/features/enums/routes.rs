use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{muscle_group_values, muscle_role_values};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/muscle-groups", get(muscle_group_values))
        .route("/muscle-roles", get(muscle_role_values))
}
