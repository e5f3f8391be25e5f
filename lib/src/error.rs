/// Error type for the deliciousrs library
///
/// Fetch-side variants (`Credentials`, `NoData`, `Http`, `HtmlParse`) are logged
/// and degraded to an empty store at the fetch boundary. `Render` is never
/// caught inside the library and aborts the current generation pass.
#[derive(Debug, thiserror::Error)]
pub enum DeliciousError {
    /// I/O errors (page files, export files, config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The export endpoint rejected the credentials (HTTP 401)
    #[error("Wrong Delicious credentials")]
    Credentials,

    /// The export body carried no bookmark list
    #[error("No bookmarks downloaded")]
    NoData,

    /// Markup parsing errors
    #[error("HTML parse error: {0}")]
    HtmlParse(String),

    /// Template compilation or rendering errors
    #[error("Template error: {0}")]
    Render(#[from] tera::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Plugin registration or lifecycle errors
    #[error("Plugin error: {0}")]
    Plugin(String),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Generic error for cases that don't fit other categories
    #[error("{0}")]
    Other(String),
}

/// Result type alias using DeliciousError
pub type Result<T> = std::result::Result<T, DeliciousError>;

impl From<serde_yaml::Error> for DeliciousError {
    fn from(err: serde_yaml::Error) -> Self {
        DeliciousError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for DeliciousError {
    fn from(err: serde_json::Error) -> Self {
        DeliciousError::Json(err.to_string())
    }
}

impl From<tl::ParseError> for DeliciousError {
    fn from(err: tl::ParseError) -> Self {
        DeliciousError::HtmlParse(err.to_string())
    }
}
