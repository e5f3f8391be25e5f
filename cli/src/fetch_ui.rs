use deliciousrs::error::{DeliciousError, Result};
use deliciousrs::fetch::DeliciousApi;
use deliciousrs::models::BookmarkStore;
use deliciousrs::source::BookmarkSource;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

fn spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Wraps a source with a spinner shown while it loads
pub struct SpinnerSource {
    inner: Box<dyn BookmarkSource>,
}

impl SpinnerSource {
    pub fn new(inner: Box<dyn BookmarkSource>) -> Self {
        Self { inner }
    }
}

impl BookmarkSource for SpinnerSource {
    fn name(&self) -> String {
        self.inner.name()
    }

    fn load(&self) -> BookmarkStore {
        let name = truncate_url(&self.inner.name(), 60);
        let spinner = spinner(format!("Loading bookmarks: {}", name));
        let store = self.inner.load();
        spinner.finish_with_message(format!("✓ {} bookmarks from {}", store.len(), name));
        store
    }
}

/// Download the raw export with visual spinner feedback
pub fn download_with_spinner(api: &DeliciousApi) -> Result<String> {
    let url_display = truncate_url(&api.endpoint, 60);
    let spinner = spinner(format!("Fetching: {}", url_display));

    let result = api.download();

    match &result {
        Ok(_) => spinner.finish_with_message(format!("✓ {}", url_display)),
        Err(e) => {
            spinner.finish_with_message(format!("✗ {} ({})", url_display, categorize_error(e)));
        }
    }

    result
}

/// Truncate URL to specified length with ellipsis
pub fn truncate_url(url: &str, max_len: usize) -> String {
    if url.len() > max_len {
        let mut truncate_at = max_len.saturating_sub(3); // Reserve 3 chars for "..."
        while !url.is_char_boundary(truncate_at) {
            truncate_at -= 1;
        }
        format!("{}...", &url[..truncate_at])
    } else {
        url.to_string()
    }
}

/// Categorize error for user-friendly display
pub fn categorize_error(error: &DeliciousError) -> &'static str {
    match error {
        DeliciousError::Credentials => "unauthorized",
        DeliciousError::NoData => "no bookmarks",
        DeliciousError::Http(e) if e.is_timeout() => "timeout",
        DeliciousError::Http(e) if e.is_connect() => "connection error",
        DeliciousError::Http(_) => "fetch error",
        DeliciousError::HtmlParse(_) => "unreadable export",
        DeliciousError::Io(_) => "i/o error",
        _ => "error",
    }
}
