//! Command-line configuration for the interactive browser.

use std::path::PathBuf;

use clap::Parser;

use crate::error::{NavError, NavResult};
use crate::session::DEFAULT_QUEUE_DEPTH;
use crate::sink::RenderFormat;

/// Command-line arguments for foldernav
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "foldernav",
    version = env!("CARGO_PKG_VERSION"),
    about = "Browse an in-memory folder tree and create folders in it",
    long_about = "Loads a folder tree from a JSON document and reads commands from stdin: \
                  `cd <name|#id>`, `back`, `jump <name|#id>`, `mkdir <name>`, `dialog`, \
                  `ls`, `quit`."
)]
pub struct Args {
    /// JSON folder tree to load; the bundled sample when omitted
    #[clap(long, short)]
    pub tree: Option<PathBuf>,

    /// How each view is printed
    #[clap(long, value_enum, default_value_t = RenderFormat::Text)]
    pub format: RenderFormat,

    /// Default log filter, overridden by RUST_LOG
    #[clap(long, default_value = "warn")]
    pub log_level: String,

    /// Commands that may wait while the tree is loading
    #[clap(long, default_value_t = DEFAULT_QUEUE_DEPTH)]
    pub queue_depth: usize,

    /// Clear the terminal before each view
    #[clap(long)]
    pub clear: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub tree_path: Option<PathBuf>,
    pub format: RenderFormat,
    pub log_level: String,
    pub queue_depth: usize,
    pub clear_screen: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Self {
            tree_path: args.tree,
            format: args.format,
            log_level: args.log_level,
            queue_depth: args.queue_depth,
            clear_screen: args.clear,
        }
    }

    pub fn validate(&self) -> NavResult<()> {
        if let Some(path) = &self.tree_path {
            if !path.is_file() {
                return Err(NavError::InvalidConfig(format!(
                    "tree file not found: {}",
                    path.display()
                )));
            }
        }

        if self.queue_depth == 0 {
            return Err(NavError::InvalidConfig("queue depth must be at least 1".into()));
        }

        if self.log_level.trim().is_empty() {
            return Err(NavError::InvalidConfig("log level is empty".into()));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tree_path: None,
            format: RenderFormat::Text,
            log_level: "warn".into(),
            queue_depth: DEFAULT_QUEUE_DEPTH,
            clear_screen: false,
        }
    }
}
