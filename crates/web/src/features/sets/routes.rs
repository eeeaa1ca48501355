use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{create_set, delete_set, get_set, list_sets, update_set};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_sets))
        .route("/", post(create_set))
        .route("/:id", get(get_set))
        .route("/:id", put(update_set))
        .route("/:id", delete(delete_set))
}
