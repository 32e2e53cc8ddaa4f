use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_event, get_event, join_event, list_events, list_participants};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/:id", get(get_event))
        .route("/:id/join", post(join_event))
        .route("/:id/participants", get(list_participants))
}
