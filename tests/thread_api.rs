// tests/thread_api.rs
mod common;

use axum::http::StatusCode;
use mini_forum::models::{Message, Thread};
use serde_json::json;

use common::helpers::{body_json, create_test_app, create_test_thread, get, post_json};

#[tokio::test]
async fn test_create_thread_success() {
    let app = create_test_app();

    let response = post_json(
        &app,
        "/api/threads",
        json!({
            "categoryId": 1,
            "title": "My First Thread",
            "content": "Hello everyone",
            "author": "Bob",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let thread: Thread =
        serde_json::from_value(body_json(response).await).expect("Failed to deserialize thread");

    assert_eq!(thread.title, "My First Thread");
    assert_eq!(thread.author, "Bob");
    assert_eq!(thread.category_id, 1);
    assert_eq!(thread.replies, 0);
}

#[tokio::test]
async fn test_create_thread_writes_seed_message() {
    let app = create_test_app();
    let thread = create_test_thread(&app, 1, "Seeded", "Hello", "Bob").await;

    let response = get(&app, &format!("/api/threads/{}/messages", thread.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let messages: Vec<Message> =
        serde_json::from_value(body_json(response).await).expect("Failed to deserialize messages");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].author, "Bob");
    assert_eq!(messages[0].content, "Hello");
    assert_eq!(messages[0].thread_id, thread.id);
}

#[tokio::test]
async fn test_create_thread_missing_fields() {
    let app = create_test_app();

    let incomplete_payloads = [
        json!({ "title": "t", "content": "c", "author": "a" }),
        json!({ "categoryId": 1, "content": "c", "author": "a" }),
        json!({ "categoryId": 1, "title": "t", "author": "a" }),
        json!({ "categoryId": 1, "title": "t", "content": "c" }),
        json!({ "categoryId": 1, "title": "   ", "content": "c", "author": "a" }),
    ];

    for payload in incomplete_payloads {
        let response = post_json(&app, "/api/threads", payload.clone()).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "Payload should have been rejected: {payload}"
        );
        let body = body_json(response).await;
        assert_eq!(body["error"], "Missing required fields");
    }
}

#[tokio::test]
async fn test_create_thread_accepts_numeric_string_category() {
    let app = create_test_app();

    let response = post_json(
        &app,
        "/api/threads",
        json!({ "categoryId": "2", "title": "Coerced", "content": "c", "author": "a" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let thread: Thread = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(thread.category_id, 2);
}

#[tokio::test]
async fn test_create_thread_rejects_unparsable_category() {
    let app = create_test_app();

    let response = post_json(
        &app,
        "/api/threads",
        json!({ "categoryId": "general", "title": "t", "content": "c", "author": "a" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_threads_unfiltered_returns_all() {
    let app = create_test_app();
    create_test_thread(&app, 1, "One", "c", "a").await;
    create_test_thread(&app, 2, "Two", "c", "a").await;

    let response = get(&app, "/api/threads").await;
    assert_eq!(response.status(), StatusCode::OK);

    let threads: Vec<Thread> = serde_json::from_value(body_json(response).await).unwrap();
    // Seeded welcome thread plus the two created above, in insertion order.
    assert_eq!(threads.len(), 3);
    assert_eq!(threads[0].title, "Welcome!");
    assert_eq!(threads[1].title, "One");
    assert_eq!(threads[2].title, "Two");
}

#[tokio::test]
async fn test_list_threads_filters_by_category() {
    let app = create_test_app();
    create_test_thread(&app, 2, "Help wanted", "c", "a").await;

    let response = get(&app, "/api/threads?categoryId=2").await;
    let threads: Vec<Thread> = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(threads.len(), 1);
    assert_eq!(threads[0].title, "Help wanted");

    // A category with no threads yields an empty array, not an error.
    let response = get(&app, "/api/threads?categoryId=99").await;
    assert_eq!(response.status(), StatusCode::OK);
    let threads: Vec<Thread> = serde_json::from_value(body_json(response).await).unwrap();
    assert!(threads.is_empty());
}

#[tokio::test]
async fn test_list_threads_empty_category_param_means_all() {
    let app = create_test_app();

    let response = get(&app, "/api/threads?categoryId=").await;
    assert_eq!(response.status(), StatusCode::OK);
    let threads: Vec<Thread> = serde_json::from_value(body_json(response).await).unwrap();
    assert_eq!(threads.len(), 1);
}

#[tokio::test]
async fn test_list_threads_rejects_unparsable_category_param() {
    let app = create_test_app();

    let response = get(&app, "/api/threads?categoryId=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_thread_ids_are_ascending_and_unique() {
    let app = create_test_app();

    let mut ids = Vec::new();
    for i in 0..4 {
        let thread = create_test_thread(&app, 1, &format!("Thread {i}"), "c", "a").await;
        ids.push(thread.id);
    }

    for pair in ids.windows(2) {
        assert!(pair[0] < pair[1], "ids not strictly increasing: {ids:?}");
    }
}
