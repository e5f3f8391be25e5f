use deliciousrs::config::Config;
use deliciousrs::error::Result;
use deliciousrs::fetch::DeliciousApi;
use deliciousrs::source::{BookmarkSource, ExportFile};
use std::path::Path;

pub struct AppContext<'a> {
    pub config: &'a Config,
    pub export: Option<&'a Path>,
}

impl AppContext<'_> {
    /// The configured bookmark source: a saved export if given, the API otherwise
    pub fn source(&self) -> Box<dyn BookmarkSource> {
        match self.export {
            Some(path) => Box::new(ExportFile::new(path)),
            None => Box::new(DeliciousApi::from_config(self.config)),
        }
    }
}

pub mod build;
pub mod fetch;
pub mod markers;

pub trait DeliciousCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()>;
}

/// Enum-based dispatch for commands (avoids Box<dyn DeliciousCommand>)
pub enum CommandEnum {
    Build(build::BuildCommand),
    Markers(markers::MarkersCommand),
    Fetch(fetch::FetchCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            Self::Build(cmd) => cmd.execute(ctx),
            Self::Markers(cmd) => cmd.execute(ctx),
            Self::Fetch(cmd) => cmd.execute(ctx),
        }
    }
}
