//! Template rendering for matched bookmarks

use crate::error::Result;
use crate::models::Bookmark;
use tera::{Context, Tera};

/// Template used when the configuration does not provide one
pub const DEFAULT_TEMPLATE: &str = r#"<div class="delicious">
{% for bookmark in bookmarks %}
    <dl>
        <dt>Title</dt>
        <dd>{{ bookmark.title }}</dd>
        {% if bookmark.description %}
        <dt>Description</dt>
        <dd>{{ bookmark.description }}</dd>
        {% endif %}
        <dt>URL</dt>
        <dd><a href="{{ bookmark.url }}">{{ bookmark.url }}</a></dd>
    </dl>
{% endfor %}
</div>"#;

const TEMPLATE_NAME: &str = "delicious";

/// A compiled bookmark template
///
/// Compiled once per generation pass, rendered once per marker.
#[derive(Debug)]
pub struct BookmarkRenderer {
    tera: Tera,
}

impl BookmarkRenderer {
    /// Compile `template`. Syntax errors are reported here rather than at render time.
    pub fn new(template: &str) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, template)?;
        Ok(Self { tera })
    }

    /// Render with an explicit context
    pub fn render(&self, context: &Context) -> Result<String> {
        Ok(self.tera.render(TEMPLATE_NAME, context)?)
    }

    /// Render `bookmarks` on top of a copy of the ambient context
    pub fn render_bookmarks(&self, ambient: &Context, bookmarks: &[&Bookmark]) -> Result<String> {
        let mut context = ambient.clone();
        context.insert("bookmarks", bookmarks);
        self.render(&context)
    }
}

/// Compile and render a template in one go
pub fn render(template: &str, context: &Context) -> Result<String> {
    BookmarkRenderer::new(template)?.render(context)
}
