//! Server-side page slicing over a fully-materialized collection

use async_graphql::InputObject;
use tracing::warn;

use crate::page::{Cursored, Page};

/// Page size applied when the client does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Slice the window of up to `page_size` items strictly after `after`.
///
/// The collection is expected to arrive already ordered (the caller decides
/// the ordering, reverse-chronological in practice) and is re-derived on
/// every call, so there is no pagination state held server-side. Identical
/// inputs always produce the identical page.
///
/// `after = None` starts at the beginning. An `after` that matches no item
/// also starts at the beginning rather than failing; that can mask a
/// client/server desync if the upstream collection was reordered between
/// calls, so it is logged.
///
/// The returned page carries the cursor of its last item (`None` when the
/// window is empty) and `has_more` set iff items remain beyond the window.
pub fn paginate_results<T>(
    collection: &[T],
    after: Option<&str>,
    page_size: usize,
) -> crate::Result<Page<T>>
where
    T: Cursored + Clone,
{
    if page_size == 0 {
        return Err(crate::PaginationError::InvalidPageSize(0));
    }

    if collection.is_empty() {
        return Ok(Page::empty());
    }

    let start = match after {
        None => 0,
        Some(cursor) => match collection.iter().position(|item| item.cursor() == cursor) {
            Some(idx) => idx + 1,
            None => {
                warn!(cursor, "after cursor not found in collection, restarting from the beginning");
                0
            }
        },
    };

    let end = (start + page_size).min(collection.len());
    let items: Vec<T> = collection[start..end].to_vec();

    let cursor = items.last().map(|item| item.cursor().to_string());
    let last_in_collection = collection
        .last()
        .map(|item| item.cursor())
        .unwrap_or_default();
    let has_more = cursor
        .as_deref()
        .map(|c| c != last_in_collection)
        .unwrap_or(false);

    Ok(Page {
        items,
        cursor,
        has_more,
    })
}

/// Pagination arguments for GraphQL queries
#[derive(InputObject, Debug, Clone, Default)]
pub struct PaginationArgs {
    /// Cursor of the last item already held by the client
    pub after: Option<String>,

    /// Number of items to return
    pub page_size: Option<i32>,
}

impl PaginationArgs {
    /// Validate pagination arguments
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(page_size) = self.page_size {
            if page_size <= 0 {
                return Err(crate::PaginationError::InvalidPageSize(page_size as i64));
            }
        }
        Ok(())
    }

    /// Effective page size, defaulting when unspecified
    pub fn limit(&self) -> usize {
        self.page_size
            .map(|n| n as usize)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
