//! # graphql-pagination-helpers
//!
//! Cursor pagination utilities shared between a GraphQL server and an
//! incremental-fetch client.
//!
//! ## Features
//!
//! - **Page Slicing** - pure, cursor-addressed windows over an ordered collection
//! - **Incremental Merge** - grow one logical list across repeated fetches
//! - **Fetch-More Driver** - single-flight "load more" loop over a page source
//! - **Cursor Codec** - opaque base64 tokens, structured and timestamp cursors
//! - **Accumulator Store** - keyed-by-query slots for accumulated pages
//!
//! ## Usage
//!
//! ```rust,ignore
//! use graphql_pagination_helpers::{paginate_results, merge_pages};
//!
//! // Slice the next page strictly after a cursor
//! let page = paginate_results(&launches, Some("1581951955"), 20)?;
//!
//! // Fold it into what the client already holds
//! let merged = merge_pages(Some(&accumulated), page)?;
//! ```

pub mod cursor;
pub mod driver;
pub mod merge;
pub mod page;
pub mod paginate;
pub mod source;
pub mod store;

pub use cursor::CursorCodec;
pub use driver::{FetchMoreDriver, LoadMore};
pub use merge::merge_pages;
pub use page::{Cursored, Page};
pub use paginate::{paginate_results, PaginationArgs, DEFAULT_PAGE_SIZE};
pub use source::{paginate_source, CollectionPager, CollectionSource, PageSource};
pub use store::AccumulatorStore;

use thiserror::Error;

/// Pagination errors
#[derive(Error, Debug)]
pub enum PaginationError {
    #[error("Invalid page size: {0}")]
    InvalidPageSize(i64),

    #[error("Invalid cursor: {0}")]
    InvalidCursor(String),

    #[error("Malformed page: {0}")]
    MalformedPage(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),
}

/// Result type for pagination operations
pub type Result<T> = std::result::Result<T, PaginationError>;
