//! Keyed store for accumulated pages
//!
//! Each logical query owns one slot, keyed by a query identity that ignores
//! the `after` argument so that successive fetches of the same query land in
//! the same accumulation. Replace-on-merge semantics: the driver reads the
//! slot, merges, and writes the result back; there is no ambient shared list.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::page::Page;

/// Store of accumulated pages, one slot per logical query.
pub struct AccumulatorStore<T> {
    slots: Arc<Mutex<HashMap<String, Page<T>>>>,
}

impl<T: Clone> AccumulatorStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Current accumulated page for a query, if any fetch has completed
    pub async fn get(&self, key: &str) -> Option<Page<T>> {
        let slots = self.slots.lock().await;
        slots.get(key).cloned()
    }

    /// Replace a query's accumulated page with a freshly merged one
    pub async fn replace(&self, key: &str, page: Page<T>) {
        let mut slots = self.slots.lock().await;
        slots.insert(key.to_string(), page);
    }

    /// Discard one query's accumulation (query teardown)
    pub async fn remove(&self, key: &str) -> Option<Page<T>> {
        let mut slots = self.slots.lock().await;
        slots.remove(key)
    }

    /// Discard all accumulations
    pub async fn clear(&self) {
        let mut slots = self.slots.lock().await;
        slots.clear();
    }
}

impl<T: Clone> Default for AccumulatorStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for AccumulatorStore<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}
