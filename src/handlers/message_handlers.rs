use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info, warn};

use crate::{
    errors::ServiceError,
    service::{self, CreateMessageData},
    AppState,
};

/// Handler to list all messages within a thread.
pub async fn list_messages_handler(
    State(state): State<AppState>,
    Path(thread_id): Path<i64>,
) -> Response {
    match service::list_messages(state.store.as_ref(), thread_id) {
        Ok(messages) => (StatusCode::OK, Json(messages)).into_response(),
        Err(e) => {
            error!(error = %e, thread_id, "Failed to fetch messages for thread");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch messages").into_response()
        }
    }
}

/// Handler to append a reply to a thread.
pub async fn create_message_handler(
    State(state): State<AppState>,
    Path(thread_id): Path<i64>,
    Json(payload): Json<CreateMessageData>,
) -> Response {
    match service::append_message(state.store.as_ref(), thread_id, payload) {
        Ok(message) => {
            info!(message_id = message.id, thread_id, "Successfully created message");
            (StatusCode::CREATED, Json(message)).into_response()
        }
        Err(ServiceError::Validation) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing required fields" })),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, thread_id, "Failed to create message");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create message").into_response()
        }
    }
}

/// Handler to delete a message by id.
pub async fn delete_message_handler(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Response {
    match service::delete_message(state.store.as_ref(), message_id) {
        Ok(()) => {
            info!(message_id, "Successfully deleted message");
            (StatusCode::OK, Json(json!({ "success": true }))).into_response()
        }
        Err(ServiceError::NotFound(_)) => {
            warn!(message_id, "Attempted to delete non-existent message");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Message not found" })),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, message_id, "Failed to delete message");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete message").into_response()
        }
    }
}
