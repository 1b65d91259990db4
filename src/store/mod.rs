use thiserror::Error;

use crate::models::{Category, Message, Thread};

pub mod memory;
pub mod rocks;

pub use memory::MemoryStore;
pub use rocks::RocksStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("key-value store failure: {0}")]
    Backend(#[from] rocksdb::Error),
    #[error("stored record could not be decoded: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Persistence boundary for the forum collections.
///
/// Collections are read and written whole, in insertion order. There is no
/// optimistic concurrency check on `replace_*`: two overlapping
/// read-modify-write cycles resolve as last-writer-wins.
///
/// `next_thread_id` / `next_message_id` return the current counter value and
/// advance it by one, persisting the new value immediately. Counters start
/// at 1 on a fresh store and are never rewound, so allocated ids are unique
/// and strictly increasing even after deletions.
pub trait RecordStore: Send + Sync {
    fn categories(&self) -> Result<Vec<Category>, StoreError>;
    fn replace_categories(&self, categories: Vec<Category>) -> Result<(), StoreError>;

    fn threads(&self) -> Result<Vec<Thread>, StoreError>;
    fn replace_threads(&self, threads: Vec<Thread>) -> Result<(), StoreError>;

    fn messages(&self) -> Result<Vec<Message>, StoreError>;
    fn replace_messages(&self, messages: Vec<Message>) -> Result<(), StoreError>;

    fn next_thread_id(&self) -> Result<i64, StoreError>;
    fn next_message_id(&self) -> Result<i64, StoreError>;
}
