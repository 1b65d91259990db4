use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::{
    errors::ServiceError,
    service::{self, CreateThreadData},
    AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadListParams {
    category_id: Option<String>,
}

/// Handler to list threads, optionally filtered by category.
pub async fn list_threads_handler(
    State(state): State<AppState>,
    Query(params): Query<ThreadListParams>,
) -> Response {
    // An absent or empty categoryId means "all threads"; a present but
    // unparsable one is a client error rather than a silent non-match.
    let category_id = match params.category_id.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid categoryId" })),
                )
                    .into_response()
            }
        },
    };

    match service::list_threads(state.store.as_ref(), category_id) {
        Ok(threads) => (StatusCode::OK, Json(threads)).into_response(),
        Err(e) => {
            error!(error = %e, ?category_id, "Failed to fetch threads");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch threads").into_response()
        }
    }
}

/// Handler to create a new thread with its seed message.
pub async fn create_thread_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateThreadData>,
) -> Response {
    match service::create_thread(state.store.as_ref(), payload) {
        Ok(thread) => {
            info!(thread_id = thread.id, category_id = thread.category_id, "Successfully created thread");
            (StatusCode::CREATED, Json(thread)).into_response()
        }
        Err(ServiceError::Validation) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing required fields" })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to create thread");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create thread").into_response()
        }
    }
}
