//! Core plugin traits and types

use crate::config::Config;
use crate::error::Result;
use crate::generator::PageGenerator;
use std::fmt;

/// Information about a plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginInfo {
    /// Unique name/identifier for the plugin
    pub name: String,
    /// Version string (semver recommended)
    pub version: String,
    /// Human-readable description
    pub description: String,
}

impl fmt::Display for PluginInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{} - {}", self.name, self.version, self.description)
    }
}

/// Result of a setup hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookResult {
    /// Continue with the run
    Continue,
    /// The plugin opts out of this run
    Skip,
    /// Stop processing and return an error
    Error(String),
}

impl HookResult {
    pub fn is_continue(&self) -> bool {
        matches!(self, HookResult::Continue)
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, HookResult::Skip)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, HookResult::Error(_))
    }
}

/// Context passed to plugins during hook execution
#[derive(Debug, Clone, Default)]
pub struct PluginContext {
    /// Site configuration
    pub config: Config,
}

impl PluginContext {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// Generation signals a plugin can react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Initialized,
    PageGeneratorFinalized,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Initialized => write!(f, "initialized"),
            Signal::PageGeneratorFinalized => write!(f, "page_generator_finalized"),
        }
    }
}

/// The core plugin trait that all plugins must implement
pub trait Plugin {
    /// Returns information about the plugin
    fn info(&self) -> PluginInfo;

    /// Called once before any page is generated
    fn on_initialized(&mut self, _ctx: &PluginContext) -> HookResult {
        HookResult::Continue
    }

    /// Called with the generated pages; errors abort the generation run
    fn on_page_generator_finalized(
        &self,
        _ctx: &PluginContext,
        _generator: &mut PageGenerator,
    ) -> Result<()> {
        Ok(())
    }
}
