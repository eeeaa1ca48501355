use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_exercise, delete_exercise, get_exercise, list_exercises, update_exercise,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_exercises))
        .route("/", post(create_exercise))
        .route("/:id", get(get_exercise))
        .route("/:id", put(update_exercise))
        .route("/:id", delete(delete_exercise))
}
