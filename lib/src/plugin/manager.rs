//! Plugin manager for registering plugins and driving a generation run

use super::hooks::HookExecutor;
use super::traits::{Plugin, PluginContext, PluginInfo};
use crate::config::Config;
use crate::error::{DeliciousError, Result};
use crate::generator::PageGenerator;
use log::{debug, info};

/// Owns the registered plugins and their shared context
pub struct PluginManager {
    /// All registered plugins, in registration order
    plugins: Vec<Box<dyn Plugin>>,
    /// Plugin context for hook execution
    context: PluginContext,
    /// Plugins that opted out during setup
    skipped: Vec<String>,
    initialized: bool,
}

impl PluginManager {
    /// Create a new plugin manager
    pub fn new(config: Config) -> Self {
        Self {
            plugins: Vec::new(),
            context: PluginContext::new(config),
            skipped: Vec::new(),
            initialized: false,
        }
    }

    /// Register a plugin
    pub fn register(&mut self, plugin: Box<dyn Plugin>) -> Result<()> {
        let info = plugin.info();
        info!("Registering plugin: {}", info);

        if self.initialized {
            return Err(DeliciousError::Plugin(format!(
                "Plugin '{}' registered after initialization",
                info.name
            )));
        }

        // Check for duplicate plugin names
        if self.plugins.iter().any(|p| p.info().name == info.name) {
            return Err(DeliciousError::Plugin(format!(
                "Plugin '{}' is already registered",
                info.name
            )));
        }

        self.plugins.push(plugin);
        debug!("Plugin '{}' registered successfully", info.name);
        Ok(())
    }

    /// Get list of all registered plugins
    pub fn list_plugins(&self) -> Vec<PluginInfo> {
        self.plugins.iter().map(|p| p.info()).collect()
    }

    /// Fire the `initialized` signal. Runs once; later calls are no-ops.
    pub fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            debug!("Plugins already initialized");
            return Ok(());
        }
        self.skipped = HookExecutor::new(&mut self.plugins, &self.context).execute_initialized()?;
        self.initialized = true;
        Ok(())
    }

    /// Fire the `page_generator_finalized` signal
    pub fn finalize_pages(&mut self, generator: &mut PageGenerator) -> Result<()> {
        if !self.initialized {
            return Err(DeliciousError::Plugin(
                "Pages finalized before plugins were initialized".to_string(),
            ));
        }
        HookExecutor::new(&mut self.plugins, &self.context)
            .execute_page_generator_finalized(generator, &self.skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::HookResult;

    struct TestPlugin {
        name: String,
    }

    impl Plugin for TestPlugin {
        fn info(&self) -> PluginInfo {
            PluginInfo {
                name: self.name.clone(),
                version: "1.0.0".to_string(),
                description: "Test plugin".to_string(),
            }
        }

        fn on_initialized(&mut self, _ctx: &PluginContext) -> HookResult {
            HookResult::Continue
        }
    }

    fn plugin(name: &str) -> Box<dyn Plugin> {
        Box::new(TestPlugin {
            name: name.to_string(),
        })
    }

    #[test]
    fn test_register_plugin() {
        let mut manager = PluginManager::new(Config::default());
        assert!(manager.register(plugin("test")).is_ok());
        assert_eq!(manager.list_plugins().len(), 1);
    }

    #[test]
    fn test_duplicate_plugin_rejected() {
        let mut manager = PluginManager::new(Config::default());
        assert!(manager.register(plugin("test")).is_ok());
        assert!(manager.register(plugin("test")).is_err());
    }

    #[test]
    fn test_list_plugins_in_registration_order() {
        let mut manager = PluginManager::new(Config::default());
        manager.register(plugin("first")).unwrap();
        manager.register(plugin("second")).unwrap();
        let names: Vec<String> = manager.list_plugins().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_finalize_requires_initialize() {
        let mut manager = PluginManager::new(Config::default());
        manager.register(plugin("test")).unwrap();
        let mut generator = PageGenerator::default();

        assert!(matches!(
            manager.finalize_pages(&mut generator),
            Err(DeliciousError::Plugin(_))
        ));
        manager.initialize().unwrap();
        assert!(manager.finalize_pages(&mut generator).is_ok());
    }

    #[test]
    fn test_register_after_initialize_rejected() {
        let mut manager = PluginManager::new(Config::default());
        manager.initialize().unwrap();
        assert!(manager.register(plugin("late")).is_err());
    }
}
