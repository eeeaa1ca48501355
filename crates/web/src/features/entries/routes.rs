use axum::{
    Router,
    routing::{delete, get, post, put},
};
use storage::Database;

use super::handlers::{create_entry, delete_entry, get_entry, list_entries, update_entry};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_entries))
        .route("/", post(create_entry))
        .route("/:id", get(get_entry))
        .route("/:id", put(update_entry))
        .route("/:id", delete(delete_entry))
}
