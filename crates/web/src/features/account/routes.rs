use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{get_account, login, logout, register};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(get_account))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
}
