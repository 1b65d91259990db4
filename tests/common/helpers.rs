// tests/common/helpers.rs
//! Shared helper functions for integration tests

use axum::{
    body::Body,
    http::{self, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use mini_forum::{
    create_router,
    models::{Message, Thread},
    seeder,
    store::MemoryStore,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Builds a router backed by a fresh, seeded in-memory store.
pub fn create_test_app() -> Router {
    let store = Arc::new(MemoryStore::new());
    seeder::seed_store(store.as_ref()).expect("Failed to seed test store");
    create_router(store)
}

/// Collects a response body and parses it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response body was not valid JSON")
}

pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(http::Method::GET)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, uri: &str, payload: Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(http::Method::POST)
                .uri(uri)
                .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(http::Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Creates a thread through the API and returns it.
pub async fn create_test_thread(
    app: &Router,
    category_id: i64,
    title: &str,
    content: &str,
    author: &str,
) -> Thread {
    let response = post_json(
        app,
        "/api/threads",
        json!({
            "categoryId": category_id,
            "title": title,
            "content": content,
            "author": author,
        }),
    )
    .await;

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(
        status,
        StatusCode::CREATED,
        "Failed to create thread in helper: {}",
        String::from_utf8_lossy(&bytes)
    );
    serde_json::from_slice(&bytes).expect("Failed to deserialize thread in helper")
}

/// Posts a reply to a thread through the API and returns it.
pub async fn create_test_message(
    app: &Router,
    thread_id: i64,
    author: &str,
    content: &str,
) -> Message {
    let response = post_json(
        app,
        &format!("/api/threads/{}/messages", thread_id),
        json!({ "author": author, "content": content }),
    )
    .await;

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(
        status,
        StatusCode::CREATED,
        "Failed to create message in helper: {}",
        String::from_utf8_lossy(&bytes)
    );
    serde_json::from_slice(&bytes).expect("Failed to deserialize message in helper")
}
