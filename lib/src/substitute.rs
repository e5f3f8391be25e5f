//! Replaces `[delicious ...]` markers in pages with rendered bookmarks

use crate::error::Result;
use crate::generator::{Page, PageGenerator};
use crate::marker::find_markers;
use crate::models::BookmarkStore;
use crate::render::{BookmarkRenderer, DEFAULT_TEMPLATE};
use crate::tags::filter_bookmarks;
use log::{debug, info};
use tera::Context;

/// Everything the substitution pass needs from setup
#[derive(Debug, Clone)]
pub struct DeliciousSettings {
    pub template: String,
    pub bookmarks: BookmarkStore,
}

impl Default for DeliciousSettings {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            bookmarks: BookmarkStore::new(),
        }
    }
}

impl DeliciousSettings {
    pub fn new(template: impl Into<String>, bookmarks: BookmarkStore) -> Self {
        Self {
            template: template.into(),
            bookmarks,
        }
    }
}

/// Replace the markers of a single page, returning how many were rendered.
///
/// Markers are located once in the text as it is on entry and each one is
/// spliced out at its own position, so rendered output is never rescanned.
/// On a render error the page is left untouched.
pub fn replace_in_page(
    page: &mut Page,
    bookmarks: &BookmarkStore,
    renderer: &BookmarkRenderer,
    context: &Context,
) -> Result<usize> {
    let markers = find_markers(&page.content);
    if markers.is_empty() {
        return Ok(0);
    }

    let mut output = String::with_capacity(page.content.len());
    let mut last = 0;
    for marker in &markers {
        let matched = filter_bookmarks(marker.tags, bookmarks);
        debug!(
            "{:?}: '{}' matched {} bookmarks",
            page.source_path,
            marker.tags,
            matched.len()
        );
        output.push_str(&page.content[last..marker.span.start]);
        output.push_str(&renderer.render_bookmarks(context, &matched)?);
        last = marker.span.end;
    }
    output.push_str(&page.content[last..]);

    let count = markers.len();
    page.content = output;
    Ok(count)
}

/// Run the substitution over every page of the generator.
///
/// Stops at the first render error, leaving the pages processed so far rewritten.
pub fn replace_delicious_tags(
    generator: &mut PageGenerator,
    settings: &DeliciousSettings,
) -> Result<()> {
    let renderer = BookmarkRenderer::new(&settings.template)?;
    let PageGenerator { pages, context } = generator;

    let mut total = 0;
    for page in pages.iter_mut() {
        total += replace_in_page(page, &settings.bookmarks, &renderer, context)?;
    }

    info!(
        "Embedded bookmarks for {} markers across {} pages",
        total,
        pages.len()
    );
    Ok(())
}
