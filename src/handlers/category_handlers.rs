use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::{service, AppState};

/// Handler to list all categories.
pub async fn list_categories_handler(State(state): State<AppState>) -> Response {
    match service::list_categories(state.store.as_ref()) {
        Ok(categories) => (StatusCode::OK, Json(categories)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to fetch categories");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch categories").into_response()
        }
    }
}
