use super::{AppContext, DeliciousCommand};
use crate::fetch_ui::SpinnerSource;
use deliciousrs::error::Result;
use deliciousrs::generator::PageGenerator;
use deliciousrs::plugin::{DeliciousPlugin, PluginManager};
use log::debug;
use std::path::PathBuf;
use tera::Context;

/// Load every page, run the plugin signals over them, write the result
pub struct BuildCommand {
    pub content: PathBuf,
    pub output: PathBuf,
    pub context: Context,
}

impl DeliciousCommand for BuildCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let mut generator = PageGenerator::load_dir(&self.content, self.context.clone())?;

        let mut manager = PluginManager::new(ctx.config.clone());
        let source = SpinnerSource::new(ctx.source());
        manager.register(Box::new(DeliciousPlugin::new(Box::new(source))))?;
        for info in manager.list_plugins() {
            debug!("Active plugin: {}", info);
        }
        manager.initialize()?;
        manager.finalize_pages(&mut generator)?;

        generator.write_to(&self.output)?;
        eprintln!(
            "Wrote {} pages to {}",
            generator.pages.len(),
            self.output.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deliciousrs::config::Config;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_from_export() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        let output = dir.path().join("output");
        let export = dir.path().join("posts.xml");

        fs::create_dir_all(content.join("posts")).unwrap();
        fs::write(content.join("posts/links.md"), "Links: [delicious rust]").unwrap();
        fs::write(
            &export,
            r#"<posts><post description="The Book" href="https://doc.rust-lang.org/book/" tag="rust docs"/></posts>"#,
        )
        .unwrap();

        let config = Config {
            template: Some(
                "{% for b in bookmarks %}[{{ b.title }}]({{ b.url }}){% endfor %}".to_string(),
            ),
            ..Config::default()
        };
        let ctx = AppContext {
            config: &config,
            export: Some(export.as_path()),
        };

        BuildCommand {
            content,
            output: output.clone(),
            context: Context::new(),
        }
        .execute(&ctx)
        .unwrap();

        assert_eq!(
            fs::read_to_string(output.join("posts/links.md")).unwrap(),
            "Links: [The Book](https://doc.rust-lang.org/book/)"
        );
    }
}
