use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One bookmark from the Delicious export
///
/// Identity is (title, description, url). Two records that differ only in
/// their tags are the same bookmark as far as `Eq` and `Hash` are concerned.
#[derive(Debug, Clone, Default)]
pub struct Bookmark {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    tags: BTreeSet<String>,
}

impl Bookmark {
    /// Build a bookmark from a loosely-typed export record.
    ///
    /// Keys follow the export attribute names: `description` is the title,
    /// `extended` the description, `href` the url and `tag` the space
    /// separated tag list. Absent or non-string fields come out empty.
    pub fn from_source(source: Option<&Value>) -> Self {
        let field = |key: &str| -> Option<String> {
            source
                .and_then(|s| s.get(key))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            title: field("description"),
            description: field("extended"),
            url: field("href"),
            tags: field("tag")
                .map(|t| crate::tags::parse_tags(&t))
                .unwrap_or_default(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

impl PartialEq for Bookmark {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.description == other.description
            && self.url == other.url
    }
}

impl Eq for Bookmark {}

impl Hash for Bookmark {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.description.hash(state);
        self.url.hash(state);
    }
}

/// Template view of a bookmark. `href` repeats `url` for templates written
/// against the export's attribute name.
impl Serialize for Bookmark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Bookmark", 5)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("url", &self.url)?;
        state.serialize_field("href", &self.url)?;
        state.serialize_field("tags", &self.tags)?;
        state.end()
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
        write!(
            f,
            "{} - {} - {}",
            self.title().unwrap_or_default(),
            self.url().unwrap_or_default(),
            tags.join(" ")
        )
    }
}
