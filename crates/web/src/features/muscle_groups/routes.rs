use axum::{
    Router,
    routing::{delete, get, post},
};
use storage::Database;

use super::handlers::{create_muscle_group, delete_muscle_group, list_muscle_groups};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_muscle_groups))
        .route("/", post(create_muscle_group))
        .route("/:id", delete(delete_muscle_group))
}
