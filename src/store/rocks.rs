//! Durable key-value backend.
//!
//! Each collection is stored as one JSON blob under a string key, and the id
//! counters as JSON numbers under their own keys:
//!
//! - `categories` / `threads` / `messages` -> serialized `Vec<T>`
//! - `next_thread_id` / `next_message_id` -> next unallocated id
//!
//! Counter advancement is a plain read-modify-write without a
//! compare-and-swap, matching the rest of the store contract.

use std::path::Path;

use rocksdb::{Options, DB};
use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use crate::models::{Category, Message, Thread};
use crate::store::{RecordStore, StoreError};

const KEY_CATEGORIES: &str = "categories";
const KEY_THREADS: &str = "threads";
const KEY_MESSAGES: &str = "messages";
const KEY_NEXT_THREAD_ID: &str = "next_thread_id";
const KEY_NEXT_MESSAGE_ID: &str = "next_message_id";

/// RocksDB-backed store. Collections survive process restarts, including the
/// id counters.
pub struct RocksStore {
    db: DB,
}

impl RocksStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.set_keep_log_file_num(2);
        opts.set_max_total_wal_size(8 * 1024 * 1024);

        let db = DB::open(&opts, path.as_ref())?;
        info!(path = %path.as_ref().display(), "Opened forum RocksDB");

        Ok(Self { db })
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.db.get(key)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_collection<T: Serialize>(&self, key: &str, records: &[T]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(records)?;
        self.db.put(key, bytes)?;
        Ok(())
    }

    fn advance_counter(&self, key: &str) -> Result<i64, StoreError> {
        let current: i64 = match self.db.get(key)? {
            Some(bytes) => serde_json::from_slice(&bytes)?,
            None => 1,
        };
        self.db.put(key, serde_json::to_vec(&(current + 1))?)?;
        Ok(current)
    }
}

impl RecordStore for RocksStore {
    fn categories(&self) -> Result<Vec<Category>, StoreError> {
        self.read_collection(KEY_CATEGORIES)
    }

    fn replace_categories(&self, categories: Vec<Category>) -> Result<(), StoreError> {
        self.write_collection(KEY_CATEGORIES, &categories)
    }

    fn threads(&self) -> Result<Vec<Thread>, StoreError> {
        self.read_collection(KEY_THREADS)
    }

    fn replace_threads(&self, threads: Vec<Thread>) -> Result<(), StoreError> {
        self.write_collection(KEY_THREADS, &threads)
    }

    fn messages(&self) -> Result<Vec<Message>, StoreError> {
        self.read_collection(KEY_MESSAGES)
    }

    fn replace_messages(&self, messages: Vec<Message>) -> Result<(), StoreError> {
        self.write_collection(KEY_MESSAGES, &messages)
    }

    fn next_thread_id(&self) -> Result<i64, StoreError> {
        self.advance_counter(KEY_NEXT_THREAD_ID)
    }

    fn next_message_id(&self) -> Result<i64, StoreError> {
        self.advance_counter(KEY_NEXT_MESSAGE_ID)
    }
}
