pub mod config;
pub mod error;
pub mod fetch;
pub mod generator;
pub mod marker;
pub mod models;
pub mod plugin;
pub mod render;
pub mod source;
pub mod substitute;
pub mod tags;
pub mod utils;

// Re-export error types for convenience
pub use error::{DeliciousError, Result};
