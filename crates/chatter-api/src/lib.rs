pub mod error;
pub mod extract;
pub mod messages;
pub mod status;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use chatter_store::MessageStore;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: MessageStore,
}

impl AppStateInner {
    pub fn new(store: MessageStore) -> AppState {
        Arc::new(Self { store })
    }
}

/// All application routes, without transport layers (tracing, CORS).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status::welcome))
        .route("/health", get(status::health))
        .route("/messages", get(messages::list_messages))
        .route("/messages", post(messages::create_message))
        .route("/messages/{id}", get(messages::get_message))
        .route("/messages/{id}", put(messages::update_message))
        .route("/messages/{id}", delete(messages::delete_message))
        .with_state(state)
}
