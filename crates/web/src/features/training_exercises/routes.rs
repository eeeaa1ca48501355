use axum::{
    Router,
    routing::{delete, post, put},
};
use storage::Database;

use super::handlers::{
    create_training_exercise, delete_training_exercise, update_training_exercise,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_training_exercise))
        .route("/:id", put(update_training_exercise))
        .route("/:id", delete(delete_training_exercise))
}
