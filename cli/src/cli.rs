use crate::commands::{
    build::BuildCommand, fetch::FetchCommand, markers::MarkersCommand, AppContext, CommandEnum,
};
use clap::{Parser, Subcommand};
use deliciousrs::config::Config;
use deliciousrs::error::{DeliciousError, Result};
use std::path::PathBuf;
use tera::Context;

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show the program version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Read bookmarks from a saved export instead of the API
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Ambient template variables, as KEY=VALUE (repeatable)
    #[arg(long = "context", value_name = "KEY=VALUE")]
    pub context: Vec<String>,

    /// Disable color output
    #[arg(long)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite every page under CONTENT into OUTPUT with bookmarks embedded
    Build {
        /// Directory holding page sources
        content: PathBuf,

        /// Directory receiving rewritten pages
        output: PathBuf,
    },

    /// List the markers found in a page
    Markers {
        /// Page source file
        file: PathBuf,

        /// Also show the bookmarks each marker selects
        #[arg(short, long)]
        resolve: bool,
    },

    /// Download the bookmark export
    Fetch {
        /// Save the raw export body to this file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },
}

/// Parse `KEY=VALUE` pairs into a template context.
///
/// Values that parse as JSON keep their type, anything else is a string.
pub fn parse_context(pairs: &[String]) -> Result<Context> {
    let mut context = Context::new();
    for pair in pairs {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            DeliciousError::Config(format!("context entry '{}' is not KEY=VALUE", pair))
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(DeliciousError::Config(format!(
                "context entry '{}' has an empty key",
                pair
            )));
        }
        match serde_json::from_str::<serde_json::Value>(value) {
            Ok(json) => context.insert(key, &json),
            Err(_) => context.insert(key, value),
        }
    }
    Ok(context)
}

pub fn handle_args(cli: Cli, config: &Config) -> Result<()> {
    let command = match cli.command {
        Some(Commands::Build { content, output }) => CommandEnum::Build(BuildCommand {
            content,
            output,
            context: parse_context(&cli.context)?,
        }),
        Some(Commands::Markers { file, resolve }) => CommandEnum::Markers(MarkersCommand {
            file,
            resolve,
            nc: cli.nc,
        }),
        Some(Commands::Fetch { save }) => CommandEnum::Fetch(FetchCommand { save }),
        None => {
            eprintln!("No command given, see --help");
            return Ok(());
        }
    };

    let ctx = AppContext {
        config,
        export: cli.export.as_deref(),
    };
    command.execute(&ctx)
}
