use super::traits::{HookResult, Plugin, PluginContext, PluginInfo};
use crate::config::Config;
use crate::error::{DeliciousError, Result};
use crate::generator::PageGenerator;
use crate::source::BookmarkSource;
use crate::substitute::{replace_delicious_tags, DeliciousSettings};
use log::info;

/// Resolve the template and load the bookmark store for one run
pub fn setup_delicious(config: &Config, source: &dyn BookmarkSource) -> Result<DeliciousSettings> {
    let template = config.resolve_template()?;
    let bookmarks = source.load();
    info!(
        "Delicious setup: {} bookmarks from {}",
        bookmarks.len(),
        source.name()
    );
    Ok(DeliciousSettings::new(template, bookmarks))
}

/// Embeds bookmarks into pages wherever a `[delicious ...]` marker appears
pub struct DeliciousPlugin {
    source: Box<dyn BookmarkSource>,
    settings: Option<DeliciousSettings>,
}

impl DeliciousPlugin {
    pub const NAME: &'static str = "delicious";

    pub fn new(source: Box<dyn BookmarkSource>) -> Self {
        Self {
            source,
            settings: None,
        }
    }

    /// Settings produced by the setup hook, if it has run
    pub fn settings(&self) -> Option<&DeliciousSettings> {
        self.settings.as_ref()
    }
}

impl Plugin for DeliciousPlugin {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: Self::NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Embed Delicious bookmarks by tag".to_string(),
        }
    }

    fn on_initialized(&mut self, ctx: &PluginContext) -> HookResult {
        match setup_delicious(&ctx.config, self.source.as_ref()) {
            Ok(settings) => {
                self.settings = Some(settings);
                HookResult::Continue
            }
            Err(e) => HookResult::Error(e.to_string()),
        }
    }

    fn on_page_generator_finalized(
        &self,
        _ctx: &PluginContext,
        generator: &mut PageGenerator,
    ) -> Result<()> {
        let settings = self.settings.as_ref().ok_or_else(|| {
            DeliciousError::Plugin("delicious plugin used before setup".to_string())
        })?;
        replace_delicious_tags(generator, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Page;
    use crate::models::{Bookmark, BookmarkStore};
    use crate::plugin::PluginManager;
    use crate::render::DEFAULT_TEMPLATE;
    use crate::source::StaticSource;
    use serde_json::json;
    use tera::Context;

    fn source() -> Box<dyn BookmarkSource> {
        let store: BookmarkStore = [json!({"description": "Rust", "href": "u", "tag": "lang"})]
            .iter()
            .map(|s| Bookmark::from_source(Some(s)))
            .collect();
        Box::new(StaticSource::new(store))
    }

    #[test]
    fn test_setup_uses_default_template() {
        let settings = setup_delicious(&Config::default(), source().as_ref()).unwrap();
        assert_eq!(settings.template, DEFAULT_TEMPLATE);
        assert_eq!(settings.bookmarks.len(), 1);
    }

    #[test]
    fn test_setup_fails_on_unreadable_template() {
        let config = Config {
            template_path: Some("/nonexistent/template.html".into()),
            ..Config::default()
        };
        let mut plugin = DeliciousPlugin::new(source());
        let result = plugin.on_initialized(&PluginContext::new(config));
        assert!(result.is_error());
        assert!(plugin.settings().is_none());
    }

    #[test]
    fn test_page_hook_before_setup_fails() {
        let plugin = DeliciousPlugin::new(source());
        let mut generator = PageGenerator::default();
        let result = plugin.on_page_generator_finalized(&PluginContext::default(), &mut generator);
        assert!(matches!(result, Err(DeliciousError::Plugin(_))));
    }

    #[test]
    fn test_through_manager() {
        let config = Config {
            template: Some("{% for b in bookmarks %}{{ b.title }}{% endfor %}".to_string()),
            ..Config::default()
        };
        let mut manager = PluginManager::new(config);
        manager
            .register(Box::new(DeliciousPlugin::new(source())))
            .unwrap();
        manager.initialize().unwrap();

        let mut generator = PageGenerator::new(Context::new()).with_pages(vec![
            Page::new("a.md", "see [delicious lang]"),
            Page::new("b.md", "none [delicious other]"),
        ]);
        manager.finalize_pages(&mut generator).unwrap();

        assert_eq!(generator.pages[0].content, "see Rust");
        assert_eq!(generator.pages[1].content, "none ");
    }
}
