use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::{Category, Message, Thread};
use crate::store::{RecordStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    categories: Vec<Category>,
    threads: Vec<Thread>,
    messages: Vec<Message>,
    next_thread_id: i64,
    next_message_id: i64,
}

/// Transient in-process backend. All records live behind a single mutex and
/// disappear when the process exits.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_thread_id: 1,
                next_message_id: 1,
                ..Inner::default()
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicking writer cannot leave a half-written collection behind
        // (replacements swap whole Vecs), so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.lock().categories.clone())
    }

    fn replace_categories(&self, categories: Vec<Category>) -> Result<(), StoreError> {
        self.lock().categories = categories;
        Ok(())
    }

    fn threads(&self) -> Result<Vec<Thread>, StoreError> {
        Ok(self.lock().threads.clone())
    }

    fn replace_threads(&self, threads: Vec<Thread>) -> Result<(), StoreError> {
        self.lock().threads = threads;
        Ok(())
    }

    fn messages(&self) -> Result<Vec<Message>, StoreError> {
        Ok(self.lock().messages.clone())
    }

    fn replace_messages(&self, messages: Vec<Message>) -> Result<(), StoreError> {
        self.lock().messages = messages;
        Ok(())
    }

    fn next_thread_id(&self) -> Result<i64, StoreError> {
        let mut inner = self.lock();
        let id = inner.next_thread_id;
        inner.next_thread_id += 1;
        Ok(id)
    }

    fn next_message_id(&self) -> Result<i64, StoreError> {
        let mut inner = self.lock();
        let id = inner.next_message_id;
        inner.next_message_id += 1;
        Ok(id)
    }
}
