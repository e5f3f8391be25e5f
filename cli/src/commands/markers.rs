use super::{AppContext, DeliciousCommand};
use crate::fetch_ui::SpinnerSource;
use crate::output::colorize::{Colorize, ColorizeBookmark, ColorizeMarker};
use deliciousrs::error::Result;
use deliciousrs::marker::{find_markers, Marker};
use deliciousrs::source::BookmarkSource;
use deliciousrs::tags::filter_bookmarks;
use std::fs;
use std::path::PathBuf;

/// Print the markers of a page, optionally with the bookmarks they select
pub struct MarkersCommand {
    pub file: PathBuf,
    pub resolve: bool,
    pub nc: bool,
}

/// 1-based line number of a marker within `text`
pub fn line_of(text: &str, marker: &Marker) -> usize {
    text[..marker.span.start].matches('\n').count() + 1
}

impl DeliciousCommand for MarkersCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let text = fs::read_to_string(&self.file)?;
        let markers = find_markers(&text);
        if markers.is_empty() {
            eprintln!("No markers in {}", self.file.display());
            return Ok(());
        }

        let store = if self.resolve {
            Some(SpinnerSource::new(ctx.source()).load())
        } else {
            None
        };

        for marker in &markers {
            let line = line_of(&text, marker);
            print!("{}", ColorizeMarker { line, marker }.render(self.nc));
            if let Some(store) = &store {
                for bookmark in filter_bookmarks(marker.tags, store) {
                    print!("{}", ColorizeBookmark(bookmark).render(self.nc));
                }
            }
        }
        Ok(())
    }
}
