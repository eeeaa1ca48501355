use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{
    create_user_weight, delete_user_weight, get_user_weight, list_user_weights, update_user_weight,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_user_weights))
        .route("/", post(create_user_weight))
        .route("/:id", get(get_user_weight))
        .route("/:id", put(update_user_weight))
        .route("/:id", delete(delete_user_weight))
}
