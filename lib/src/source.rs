//! Where the bookmark store comes from
//!
//! Every source degrades to an empty store on failure and logs the reason,
//! so page generation always goes ahead.

use crate::error::Result;
use crate::fetch::{parse_export, DeliciousApi};
use crate::models::BookmarkStore;
use log::{error, info};
use std::fs;
use std::path::PathBuf;

/// Something that can produce the bookmark store for a generation run
pub trait BookmarkSource {
    /// Short label used in log lines
    fn name(&self) -> String;

    /// Load the store, never failing
    fn load(&self) -> BookmarkStore;
}

fn degrade(source: &str, result: Result<BookmarkStore>) -> BookmarkStore {
    match result {
        Ok(store) => {
            info!("Loaded {} bookmarks from {}", store.len(), source);
            store
        }
        Err(e) => {
            error!("{}", e);
            BookmarkStore::new()
        }
    }
}

impl BookmarkSource for DeliciousApi {
    fn name(&self) -> String {
        self.endpoint.clone()
    }

    fn load(&self) -> BookmarkStore {
        degrade(&self.name(), self.fetch())
    }
}

/// A previously downloaded export body on disk
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub path: PathBuf,
}

impl ExportFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn read(&self) -> Result<BookmarkStore> {
        let body = fs::read_to_string(&self.path)?;
        parse_export(&body)
    }
}

impl BookmarkSource for ExportFile {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> BookmarkStore {
        degrade(&self.name(), self.read())
    }
}

/// An already-built store
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    pub store: BookmarkStore,
}

impl StaticSource {
    pub fn new(store: BookmarkStore) -> Self {
        Self { store }
    }
}

impl BookmarkSource for StaticSource {
    fn name(&self) -> String {
        "static store".to_string()
    }

    fn load(&self) -> BookmarkStore {
        self.store.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeliciousError;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            r#"<posts><post description="d" href="u" tag="a b"/></posts>"#,
        )
        .unwrap();

        let store = ExportFile::new(file.path()).load();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_export_file_missing_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let source = ExportFile::new(dir.path().join("missing.xml"));

        assert!(matches!(source.read(), Err(DeliciousError::Io(_))));
        assert!(source.load().is_empty());
    }

    #[test]
    fn test_export_file_without_posts_degrades() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "").unwrap();

        let source = ExportFile::new(file.path());
        assert!(matches!(source.read(), Err(DeliciousError::NoData)));
        assert!(source.load().is_empty());
    }

    #[test]
    fn test_unreachable_api_degrades() {
        let api = DeliciousApi {
            endpoint: "http://127.0.0.1:9/posts".to_string(),
            username: Some("user".to_string()),
            password: Some("pass".to_string()),
            user_agent: "test".to_string(),
        };
        assert!(api.load().is_empty());
    }
}
