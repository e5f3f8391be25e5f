//! Signal dispatch across registered plugins

use super::traits::{HookResult, Plugin, PluginContext, Signal};
use crate::error::{DeliciousError, Result};
use crate::generator::PageGenerator;
use log::{debug, error, warn};

/// Executes a signal across multiple plugins in registration order
pub struct HookExecutor<'a> {
    plugins: &'a mut [Box<dyn Plugin>],
    ctx: &'a PluginContext,
}

impl<'a> HookExecutor<'a> {
    pub fn new(plugins: &'a mut [Box<dyn Plugin>], ctx: &'a PluginContext) -> Self {
        Self { plugins, ctx }
    }

    /// Run every setup hook.
    ///
    /// Returns the names of plugins that opted out with `Skip`. The first
    /// `Error` stops the run.
    pub fn execute_initialized(&mut self) -> Result<Vec<String>> {
        debug!(
            "Dispatching {} to {} plugins",
            Signal::Initialized,
            self.plugins.len()
        );

        let mut skipped = Vec::new();
        for plugin in self.plugins.iter_mut() {
            let plugin_name = plugin.info().name;
            match plugin.on_initialized(self.ctx) {
                HookResult::Continue => {
                    debug!("Plugin '{}' initialized", plugin_name);
                }
                HookResult::Skip => {
                    warn!("Plugin '{}' opted out of this run", plugin_name);
                    skipped.push(plugin_name);
                }
                HookResult::Error(e) => {
                    error!("Plugin '{}' setup error: {}", plugin_name, e);
                    return Err(DeliciousError::Plugin(format!(
                        "Plugin '{}': {}",
                        plugin_name, e
                    )));
                }
            }
        }
        Ok(skipped)
    }

    /// Run every page hook except for the `skipped` plugins.
    ///
    /// Errors propagate untouched so render failures stay fatal.
    pub fn execute_page_generator_finalized(
        &self,
        generator: &mut PageGenerator,
        skipped: &[String],
    ) -> Result<()> {
        debug!(
            "Dispatching {} for {} pages",
            Signal::PageGeneratorFinalized,
            generator.pages.len()
        );

        for plugin in self.plugins.iter() {
            let plugin_name = plugin.info().name;
            if skipped.contains(&plugin_name) {
                continue;
            }
            plugin
                .on_page_generator_finalized(self.ctx, generator)
                .inspect_err(|e| error!("Plugin '{}' failed: {}", plugin_name, e))?;
        }
        Ok(())
    }
}
