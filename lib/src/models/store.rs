use super::bookmark::Bookmark;
use std::collections::hash_set::{self, HashSet};

/// The bookmarks available to one generation run
///
/// Built once during setup and only read afterwards. Iteration order is
/// unspecified.
#[derive(Debug, Clone, Default)]
pub struct BookmarkStore {
    bookmarks: HashSet<Bookmark>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bookmark, returning false if an equal one was already present
    pub fn insert(&mut self, bookmark: Bookmark) -> bool {
        self.bookmarks.insert(bookmark)
    }

    pub fn contains(&self, bookmark: &Bookmark) -> bool {
        self.bookmarks.contains(bookmark)
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Bookmark> {
        self.bookmarks.iter()
    }
}

impl FromIterator<Bookmark> for BookmarkStore {
    fn from_iter<I: IntoIterator<Item = Bookmark>>(iter: I) -> Self {
        Self {
            bookmarks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BookmarkStore {
    type Item = &'a Bookmark;
    type IntoIter = hash_set::Iter<'a, Bookmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for BookmarkStore {
    fn eq(&self, other: &Self) -> bool {
        self.bookmarks == other.bookmarks
    }
}

impl Eq for BookmarkStore {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_store_deduplicates_structurally() {
        let mut store = BookmarkStore::new();
        assert!(store.insert(Bookmark::from_source(Some(&json!({"href": "u", "tag": "a"})))));
        assert!(!store.insert(Bookmark::from_source(Some(&json!({"href": "u", "tag": "b"})))));
        assert!(store.insert(Bookmark::from_source(Some(&json!({"href": "v"})))));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_store_from_iterator() {
        let store: BookmarkStore = ["a", "b", "a"]
            .iter()
            .map(|u| Bookmark::from_source(Some(&json!({ "href": u }))))
            .collect();
        assert_eq!(store.len(), 2);
        assert!(store.contains(&Bookmark::from_source(Some(&json!({"href": "a"})))));
        assert_eq!((&store).into_iter().count(), 2);
    }

    #[test]
    fn test_empty_store() {
        let store = BookmarkStore::new();
        assert!(store.is_empty());
        assert_eq!(store, BookmarkStore::default());
    }
}
