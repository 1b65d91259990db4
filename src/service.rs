//! Forum operations, built directly on the record store.
//!
//! Every operation reads a whole collection, works on it in memory and
//! writes it back. There is no cross-request locking; overlapping writers
//! resolve as last-writer-wins (see the `RecordStore` contract).

use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::errors::ServiceError;
use crate::models::{Category, Message, Thread};
use crate::store::RecordStore;
use crate::utils::coerce_id;

// Input data for creating a new thread. All fields are optional at the
// deserialization layer so that absence is reported as a validation failure
// rather than a body-rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThreadData {
    #[serde(default)]
    pub category_id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

// Input data for appending a message to a thread.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageData {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

fn require(value: Option<String>) -> Result<String, ServiceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ServiceError::Validation),
    }
}

/// Fetches all categories in seed order.
pub fn list_categories(store: &dyn RecordStore) -> Result<Vec<Category>, ServiceError> {
    Ok(store.categories()?)
}

/// Fetches all threads, or only those in the given category. Insertion
/// order, not sorted by date or activity.
pub fn list_threads(
    store: &dyn RecordStore,
    category_id: Option<i64>,
) -> Result<Vec<Thread>, ServiceError> {
    let threads = store.threads()?;
    Ok(match category_id {
        Some(id) => threads.into_iter().filter(|t| t.category_id == id).collect(),
        None => threads,
    })
}

/// Fetches all messages of a thread in insertion order, which is
/// chronological since messages are never reordered.
pub fn list_messages(
    store: &dyn RecordStore,
    thread_id: i64,
) -> Result<Vec<Message>, ServiceError> {
    let messages = store.messages()?;
    Ok(messages
        .into_iter()
        .filter(|m| m.thread_id == thread_id)
        .collect())
}

/// Creates a thread together with its seed message.
///
/// The seed message carries the thread's author and content and is not
/// counted in `replies`. Both writes are applied before the call returns.
pub fn create_thread(
    store: &dyn RecordStore,
    data: CreateThreadData,
) -> Result<Thread, ServiceError> {
    let category_id = data
        .category_id
        .as_ref()
        .and_then(coerce_id)
        .ok_or(ServiceError::Validation)?;
    let title = require(data.title)?;
    let content = require(data.content)?;
    let author = require(data.author)?;

    let thread = Thread {
        id: store.next_thread_id()?,
        category_id,
        title,
        author: author.clone(),
        content: content.clone(),
        created_at: Utc::now(),
        replies: 0,
    };

    let mut threads = store.threads()?;
    threads.push(thread.clone());
    store.replace_threads(threads)?;

    let seed = Message {
        id: store.next_message_id()?,
        thread_id: thread.id,
        author,
        content,
        created_at: thread.created_at,
    };

    let mut messages = store.messages()?;
    messages.push(seed);
    store.replace_messages(messages)?;

    Ok(thread)
}

/// Appends a message to a thread and bumps the thread's reply counter.
///
/// When the thread does not exist the counter update is skipped but the
/// message is stored anyway, mirroring the original behavior of the system.
/// The dangling reference is logged so operators can spot it.
pub fn append_message(
    store: &dyn RecordStore,
    thread_id: i64,
    data: CreateMessageData,
) -> Result<Message, ServiceError> {
    let author = require(data.author)?;
    let content = require(data.content)?;

    let mut threads = store.threads()?;
    match threads.iter_mut().find(|t| t.id == thread_id) {
        Some(thread) => {
            thread.replies += 1;
            store.replace_threads(threads)?;
        }
        None => {
            warn!(thread_id, "message appended to a thread that does not exist");
        }
    }

    let message = Message {
        id: store.next_message_id()?,
        thread_id,
        author,
        content,
        created_at: Utc::now(),
    };

    let mut messages = store.messages()?;
    messages.push(message.clone());
    store.replace_messages(messages)?;

    Ok(message)
}

/// Removes a message and decrements the owning thread's reply counter.
///
/// The counter never goes below zero, so deleting a thread's seed message
/// leaves `replies` untouched.
pub fn delete_message(store: &dyn RecordStore, message_id: i64) -> Result<(), ServiceError> {
    let mut messages = store.messages()?;
    let index = messages
        .iter()
        .position(|m| m.id == message_id)
        .ok_or(ServiceError::NotFound("message"))?;

    let removed = messages.remove(index);
    store.replace_messages(messages)?;

    let mut threads = store.threads()?;
    if let Some(thread) = threads.iter_mut().find(|t| t.id == removed.thread_id) {
        if thread.replies > 0 {
            thread.replies -= 1;
            store.replace_threads(threads)?;
        }
    }

    Ok(())
}
