//! Client-side incremental merge of fetched pages

use crate::page::Page;

/// Concatenate a newly fetched page onto the accumulated list so far.
///
/// The result keeps items in arrival order: everything already held, then
/// everything incoming. `cursor` and `has_more` always come from the
/// incoming page, since the freshest fetch carries the authoritative
/// pagination pointer. When nothing has been fetched yet, pass `None` and
/// the incoming page is returned as-is.
///
/// The merge is identity-agnostic: it concatenates whatever two pages it
/// is given, so the caller must only feed it pages belonging to the same
/// logical query (same filter arguments, ignoring `after`). It does not
/// re-sort and does not deduplicate; fetching the same page twice appends
/// its items twice.
///
/// The incoming page is validated first. A page with `has_more` set but no
/// cursor would make the next fetch restart from the top and loop, so it
/// is rejected rather than merged.
pub fn merge_pages<T: Clone>(
    existing: Option<&Page<T>>,
    incoming: Page<T>,
) -> crate::Result<Page<T>> {
    incoming.validate()?;

    let mut items = match existing {
        Some(page) => page.items.clone(),
        None => Vec::new(),
    };
    items.extend(incoming.items);

    Ok(Page {
        items,
        cursor: incoming.cursor,
        has_more: incoming.has_more,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: &[&str], cursor: Option<&str>, has_more: bool) -> Page<String> {
        Page {
            items: items.iter().map(|s| s.to_string()).collect(),
            cursor: cursor.map(|s| s.to_string()),
            has_more,
        }
    }

    #[test]
    fn test_merge_without_existing_returns_incoming() {
        let incoming = page(&["5", "4"], Some("4"), true);
        let merged = merge_pages(None, incoming.clone()).unwrap();
        assert_eq!(merged, incoming);
    }

    #[test]
    fn test_merge_appends_in_arrival_order() {
        let first = page(&["5", "4"], Some("4"), true);
        let second = page(&["3", "2"], Some("2"), true);
        let third = page(&["1"], Some("1"), false);

        let acc = merge_pages(None, first).unwrap();
        let acc = merge_pages(Some(&acc), second).unwrap();
        let acc = merge_pages(Some(&acc), third).unwrap();

        assert_eq!(acc.items, vec!["5", "4", "3", "2", "1"]);
        assert_eq!(acc.cursor.as_deref(), Some("1"));
        assert!(!acc.has_more);
    }

    #[test]
    fn test_merge_takes_metadata_from_incoming() {
        let existing = page(&["5", "4"], Some("4"), true);
        let incoming = page(&["3"], Some("3"), false);
        let merged = merge_pages(Some(&existing), incoming).unwrap();
        assert_eq!(merged.cursor.as_deref(), Some("3"));
        assert!(!merged.has_more);
    }

    #[test]
    fn test_merge_of_empty_incoming_appends_nothing_and_stops() {
        let existing = page(&["5", "4"], Some("4"), true);
        let incoming: Page<String> = Page::empty();
        let merged = merge_pages(Some(&existing), incoming).unwrap();
        assert_eq!(merged.items, vec!["5", "4"]);
        assert!(!merged.has_more);
    }

    #[test]
    fn test_merge_is_idempotent_over_same_arguments() {
        let existing = page(&["5", "4"], Some("4"), true);
        let incoming = page(&["3", "2"], Some("2"), true);
        let a = merge_pages(Some(&existing), incoming.clone()).unwrap();
        let b = merge_pages(Some(&existing), incoming).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_merge_does_not_deduplicate_repeated_fetches() {
        let existing = page(&["3", "2"], Some("2"), true);
        let replayed = page(&["3", "2"], Some("2"), true);
        let merged = merge_pages(Some(&existing), replayed).unwrap();
        assert_eq!(merged.items, vec!["3", "2", "3", "2"]);
    }

    #[test]
    fn test_merge_rejects_malformed_incoming() {
        let existing = page(&["5"], Some("5"), true);
        let malformed = page(&["4"], None, true);
        assert!(matches!(
            merge_pages(Some(&existing), malformed),
            Err(crate::PaginationError::MalformedPage(_))
        ));
    }
}
