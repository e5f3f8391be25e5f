//! Pages handed to the substitution pass by the host site generator

use crate::error::Result;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use tera::Context;

/// File extensions treated as page sources when loading a content directory
pub const PAGE_EXTENSIONS: &[&str] = &["md", "markdown", "html", "htm", "rst", "txt"];

/// A single page with mutable source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Path relative to the content root
    pub source_path: PathBuf,
    pub content: String,
}

impl Page {
    pub fn new(source_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            content: content.into(),
        }
    }
}

/// The pages of one generation run plus the ambient template context
#[derive(Debug, Clone, Default)]
pub struct PageGenerator {
    pub pages: Vec<Page>,
    pub context: Context,
}

impl PageGenerator {
    pub fn new(context: Context) -> Self {
        Self {
            pages: Vec::new(),
            context,
        }
    }

    pub fn with_pages(mut self, pages: Vec<Page>) -> Self {
        self.pages = pages;
        self
    }

    /// Load every page source under `root`, sorted by path
    pub fn load_dir(root: &Path, context: Context) -> Result<Self> {
        let mut pages = Vec::new();
        collect_pages(root, root, &mut pages)?;
        pages.sort_by(|a, b| a.source_path.cmp(&b.source_path));
        debug!("Loaded {} pages from {:?}", pages.len(), root);
        Ok(Self { pages, context })
    }

    /// Write every page below `output_dir`, mirroring the source layout
    pub fn write_to(&self, output_dir: &Path) -> Result<()> {
        for page in &self.pages {
            let target = output_dir.join(&page.source_path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, &page.content)?;
        }
        Ok(())
    }
}

fn is_page_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| PAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn collect_pages(root: &Path, dir: &Path, pages: &mut Vec<Page>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_pages(root, &path, pages)?;
        } else if is_page_source(&path) {
            let content = fs::read_to_string(&path)?;
            let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            pages.push(Page::new(relative, content));
        }
    }
    Ok(())
}
