use super::{AppContext, DeliciousCommand};
use crate::fetch_ui::download_with_spinner;
use deliciousrs::error::Result;
use deliciousrs::fetch::{parse_export, DeliciousApi};
use std::fs;
use std::path::PathBuf;

/// Download the export, either saving it for `--export` or summarizing it
pub struct FetchCommand {
    pub save: Option<PathBuf>,
}

impl DeliciousCommand for FetchCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let api = DeliciousApi::from_config(ctx.config);
        let body = download_with_spinner(&api)?;

        match &self.save {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, &body)?;
                eprintln!("Saved export to {}", path.display());
            }
            None => {
                let store = parse_export(&body)?;
                println!("{} bookmarks available", store.len());
            }
        }
        Ok(())
    }
}
