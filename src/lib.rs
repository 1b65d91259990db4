use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod seeder;
pub mod service;
pub mod store;
pub mod utils;

use handlers::{
    category_handlers::list_categories_handler,
    message_handlers::{create_message_handler, delete_message_handler, list_messages_handler},
    thread_handlers::{create_thread_handler, list_threads_handler},
};
use store::RecordStore;

// Define the application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

// Generous cap for JSON payloads; there are no file uploads.
const MAX_BODY_SIZE: usize = 64 * 1024;

/// Builds the application router on top of the given record store.
///
/// The static presentation client under `public/` is served for every path
/// the API does not claim.
pub fn create_router(store: Arc<dyn RecordStore>) -> Router {
    let app_state = AppState { store };

    Router::new()
        .route("/api/categories", get(list_categories_handler))
        .route(
            "/api/threads",
            get(list_threads_handler).post(create_thread_handler),
        )
        .route(
            "/api/threads/:thread_id/messages",
            get(list_messages_handler).post(create_message_handler),
        )
        .route("/api/messages/:message_id", delete(delete_message_handler))
        .fallback_service(ServeDir::new("public"))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
}
