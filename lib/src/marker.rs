//! Inline `[delicious tag1 tag2]` markers in page text

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Marker syntax. Only spaces, ASCII digits and ASCII letters are allowed
/// between the keyword and the closing bracket.
pub const MARKER_PATTERN: &str = r"\[delicious ([ 0-9A-Za-z]+)\]";

fn marker_regex() -> &'static Regex {
    static MARKER_RE: OnceLock<Regex> = OnceLock::new();
    MARKER_RE.get_or_init(|| Regex::new(MARKER_PATTERN).expect("marker pattern is valid"))
}

/// A marker located in page text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker<'a> {
    /// The whole marker, brackets included
    pub raw: &'a str,
    /// The requested tag list between the keyword and the closing bracket
    pub tags: &'a str,
    /// Byte range of `raw` within the scanned text
    pub span: Range<usize>,
}

/// Find every marker in `text`, left to right
pub fn find_markers(text: &str) -> Vec<Marker<'_>> {
    marker_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let tags = caps.get(1)?;
            Some(Marker {
                raw: whole.as_str(),
                tags: tags.as_str(),
                span: whole.range(),
            })
        })
        .collect()
}

/// The captured tag lists only, in order of appearance
pub fn marker_tags(text: &str) -> Vec<&str> {
    marker_regex()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}
