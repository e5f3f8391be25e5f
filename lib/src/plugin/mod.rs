//! Host-side plugin surface
//!
//! A site generator drives plugins through two signals: `initialized`, fired
//! once before any page is generated, and `page_generator_finalized`, fired
//! with the finished pages. The Delicious plugin fetches bookmarks on the
//! first and rewrites markers on the second.
//!
//! # Example
//!
//! ```rust,ignore
//! use deliciousrs::config::Config;
//! use deliciousrs::generator::PageGenerator;
//! use deliciousrs::plugin::{DeliciousPlugin, PluginManager};
//! use deliciousrs::source::ExportFile;
//!
//! let mut manager = PluginManager::new(Config::load());
//! manager.register(Box::new(DeliciousPlugin::new(Box::new(ExportFile::new("posts.xml")))))?;
//! manager.initialize()?;
//!
//! let mut generator = PageGenerator::load_dir("content".as_ref(), Default::default())?;
//! manager.finalize_pages(&mut generator)?;
//! ```

mod delicious;
mod hooks;
mod manager;
mod traits;

pub use delicious::*;
pub use hooks::*;
pub use manager::*;
pub use traits::*;
