use crate::models::{Bookmark, BookmarkStore};
use std::collections::BTreeSet;

/// Parse a whitespace-separated tag list into a set
pub fn parse_tags(tags_str: &str) -> BTreeSet<String> {
    tags_str.split_whitespace().map(str::to_string).collect()
}

/// Select every bookmark carrying all of the requested tags.
///
/// Matching is case-sensitive. An empty request selects the whole store.
/// Results follow the store's iteration order.
pub fn filter_bookmarks<'a>(tags_str: &str, store: &'a BookmarkStore) -> Vec<&'a Bookmark> {
    let requested = parse_tags(tags_str);
    store
        .iter()
        .filter(|bookmark| requested.is_subset(bookmark.tags()))
        .collect()
}
