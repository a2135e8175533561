//! Single-flight "load more" driver
//!
//! One driver instance per logical query. It owns that query's slot in the
//! [`AccumulatorStore`] and is the slot's only writer: the busy flag makes
//! overlapping triggers no-ops, so merges can never interleave and append
//! pages out of order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::merge::merge_pages;
use crate::page::Page;
use crate::source::PageSource;
use crate::store::AccumulatorStore;

/// Outcome of one "load more" trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMore {
    /// A page was fetched and merged into the accumulation.
    Applied { appended: usize, has_more: bool },
    /// Another fetch is outstanding; this trigger was ignored.
    InFlight,
    /// The accumulation already holds the full collection.
    Exhausted,
}

/// Drives paginated fetches for one logical query.
pub struct FetchMoreDriver<T, S> {
    source: Arc<S>,
    store: AccumulatorStore<T>,
    query_key: String,
    page_size: usize,
    in_flight: Arc<AtomicBool>,
}

/// Clears the busy flag however `load_more` exits.
struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<T, S> FetchMoreDriver<T, S>
where
    T: Clone + Send + Sync,
    S: PageSource<T>,
{
    pub fn new(
        source: S,
        store: AccumulatorStore<T>,
        query_key: impl Into<String>,
        page_size: usize,
    ) -> crate::Result<Self> {
        if page_size == 0 {
            return Err(crate::PaginationError::InvalidPageSize(0));
        }
        Ok(Self {
            source: Arc::new(source),
            store,
            query_key: query_key.into(),
            page_size,
            in_flight: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Whether a fetch is currently outstanding.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Current accumulated page, if any fetch has completed.
    pub async fn accumulated(&self) -> Option<Page<T>> {
        self.store.get(&self.query_key).await
    }

    /// Discard this query's accumulation so the next trigger starts over.
    pub async fn reset(&self) {
        self.store.remove(&self.query_key).await;
    }

    /// Fetch the next page and merge it into the accumulation.
    ///
    /// At most one fetch is in flight at a time: a trigger arriving while
    /// another is outstanding returns [`LoadMore::InFlight`] without
    /// touching anything. A failed fetch leaves the accumulation unchanged
    /// and clears the busy flag, so the caller can simply retry.
    pub async fn load_more(&self) -> crate::Result<LoadMore> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!(query = %self.query_key, "load_more suppressed, fetch already in flight");
            return Ok(LoadMore::InFlight);
        }
        let _guard = FlightGuard(&self.in_flight);

        let existing = self.store.get(&self.query_key).await;
        if let Some(page) = &existing {
            if !page.has_more {
                return Ok(LoadMore::Exhausted);
            }
        }

        let after = existing.as_ref().and_then(|page| page.cursor.clone());
        debug!(query = %self.query_key, after = after.as_deref(), "fetching next page");
        let incoming = self
            .source
            .fetch_page(after.as_deref(), self.page_size)
            .await?;

        let merged = merge_pages(existing.as_ref(), incoming)?;
        let appended = merged.len() - existing.as_ref().map(Page::len).unwrap_or(0);
        let has_more = merged.has_more;
        self.store.replace(&self.query_key, merged).await;

        debug!(query = %self.query_key, appended, has_more, "page merged");
        Ok(LoadMore::Applied { appended, has_more })
    }
}

impl<T, S> Clone for FetchMoreDriver<T, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            store: self.store.clone(),
            query_key: self.query_key.clone(),
            page_size: self.page_size,
            in_flight: self.in_flight.clone(),
        }
    }
}
