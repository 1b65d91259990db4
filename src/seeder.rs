use chrono::Utc;
use tracing::info;

use crate::models::{Category, Message, Thread};
use crate::store::{RecordStore, StoreError};

/// Seed the store with the default categories and a welcome thread.
///
/// This function is idempotent – when categories are already present it
/// returns without writing, so it can safely run on every startup.
pub fn seed_store(store: &dyn RecordStore) -> Result<(), StoreError> {
    if !store.categories()?.is_empty() {
        return Ok(());
    }

    store.replace_categories(vec![
        Category {
            id: 1,
            name: "General".to_string(),
            description: "General discussion".to_string(),
        },
        Category {
            id: 2,
            name: "Help".to_string(),
            description: "Questions and troubleshooting".to_string(),
        },
        Category {
            id: 3,
            name: "Announcements".to_string(),
            description: "News and announcements".to_string(),
        },
    ])?;

    // Allocate the seed ids through the counters so later allocations
    // continue after them.
    let now = Utc::now();
    let thread_id = store.next_thread_id()?;
    store.replace_threads(vec![Thread {
        id: thread_id,
        category_id: 1,
        title: "Welcome!".to_string(),
        author: "Admin".to_string(),
        content: "Welcome to the forum. Feel free to start new topics!".to_string(),
        created_at: now,
        replies: 0,
    }])?;

    let message_id = store.next_message_id()?;
    store.replace_messages(vec![Message {
        id: message_id,
        thread_id,
        author: "Admin".to_string(),
        content: "First welcome message!".to_string(),
        created_at: now,
    }])?;

    info!("Seeded store with default categories and welcome thread");
    Ok(())
}
