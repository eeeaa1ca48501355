use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_training, delete_training, get_training, list_trainings, update_training,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_trainings))
        .route("/", post(create_training))
        .route("/:id", get(get_training))
        .route("/:id", put(update_training))
        .route("/:id", delete(delete_training))
}
