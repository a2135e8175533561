//! Capability traits the pagination helpers compose against
//!
//! Upstream adapters (REST clients, database readers) are modeled as plain
//! capabilities rather than stateful base classes: the paginator only ever
//! needs "give me the full ordered collection", and the fetch-more driver
//! only ever needs "give me the page after this cursor".

use async_trait::async_trait;

use crate::page::{Cursored, Page};
use crate::paginate::{paginate_results, PaginationArgs};

/// Provider of the complete, ordered collection.
///
/// Implementations re-derive the collection on every call; no pagination
/// state lives behind this trait. The ordering must be deterministic across
/// calls for cursors to stay meaningful.
#[async_trait]
pub trait CollectionSource<T>: Send + Sync
where
    T: Send + Sync,
{
    async fn fetch_all(&self) -> crate::Result<Vec<T>>;
}

/// One paginated round-trip, as seen from the client side.
///
/// In production this is a network fetch carrying `{after, page_size}` out
/// and `{items, cursor, has_more}` back; the encoding is up to the
/// transport as long as cursors survive as opaque strings.
#[async_trait]
pub trait PageSource<T>: Send + Sync
where
    T: Send + Sync,
{
    async fn fetch_page(&self, after: Option<&str>, page_size: usize) -> crate::Result<Page<T>>;
}

/// Fetch the full collection and slice the requested window out of it.
///
/// This is the whole server-side resolver path: validate the arguments,
/// materialize the collection, paginate. Upstream failures propagate
/// unchanged.
pub async fn paginate_source<S, T>(source: &S, args: &PaginationArgs) -> crate::Result<Page<T>>
where
    S: CollectionSource<T>,
    T: Cursored + Clone + Send + Sync,
{
    args.validate()?;
    let collection = source.fetch_all().await?;
    paginate_results(&collection, args.after.as_deref(), args.limit())
}

/// Adapter turning a [`CollectionSource`] into a [`PageSource`] by slicing
/// in-process. Useful when server and client share an address space, and in
/// tests.
pub struct CollectionPager<S> {
    source: S,
}

impl<S> CollectionPager<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S, T> PageSource<T> for CollectionPager<S>
where
    S: CollectionSource<T>,
    T: Cursored + Clone + Send + Sync,
{
    async fn fetch_page(&self, after: Option<&str>, page_size: usize) -> crate::Result<Page<T>> {
        let collection = self.source.fetch_all().await?;
        paginate_results(&collection, after, page_size)
    }
}
