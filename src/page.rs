//! Paginated page type and the cursor-bearing item trait

use async_graphql::Object;
use serde::{Deserialize, Serialize};

/// An item addressable by a stable, order-inducing cursor.
///
/// Cursors must be unique per item and the collection ordering must be
/// consistent with cursor progression, otherwise `has_more` comparisons
/// lose their meaning.
pub trait Cursored {
    fn cursor(&self) -> &str;
}

/// One bounded slice of a collection plus pagination metadata.
///
/// `cursor` points at the last item in this slice and is what the client
/// sends back as `after` to fetch the next slice. `has_more` tells the
/// client whether another fetch is worthwhile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub cursor: Option<String>,
    pub has_more: bool,
}

#[Object]
impl<T: async_graphql::OutputType> Page<T> {
    async fn items(&self) -> &[T] {
        &self.items
    }

    async fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    async fn has_more(&self) -> bool {
        self.has_more
    }
}

impl<T> Page<T> {
    /// Create empty page
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
            has_more: false,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check the page's internal consistency.
    ///
    /// A page claiming `has_more` without carrying a cursor would send the
    /// next fetch back to the start of the collection and loop forever, so
    /// that combination is rejected at the boundary.
    pub fn validate(&self) -> crate::Result<()> {
        if self.has_more && self.cursor.is_none() {
            return Err(crate::PaginationError::MalformedPage(
                "has_more is set but cursor is null".to_string(),
            ));
        }
        Ok(())
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page() {
        let page: Page<String> = Page::empty();
        assert!(page.is_empty());
        assert_eq!(page.cursor, None);
        assert!(!page.has_more);
        assert!(page.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_has_more_without_cursor() {
        let page: Page<String> = Page {
            items: vec!["a".to_string()],
            cursor: None,
            has_more: true,
        };
        assert!(matches!(
            page.validate(),
            Err(crate::PaginationError::MalformedPage(_))
        ));
    }

    #[test]
    fn test_validate_accepts_final_page() {
        let page = Page {
            items: vec!["a".to_string()],
            cursor: Some("1".to_string()),
            has_more: false,
        };
        assert!(page.validate().is_ok());
    }
}
