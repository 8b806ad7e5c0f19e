//! wavlist - list `.wav` files in the immediate subfolders of a directory
//!
//! For a root directory, every direct child directory is opened and the
//! regular files inside it with a matching extension are reported as
//! `<subfolder>/<filename>` lines. Nothing deeper is visited.

pub mod config;
pub mod error;
pub mod listing;
pub mod output;

pub use config::{Config, Args};
pub use error::{ListError, Result};
pub use listing::{ExtensionFilter, TwoLevelWalker, WavEntry};
pub use output::ListingSummary;

use std::io::{self, BufWriter, Write};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Logs go to stderr. `RUST_LOG` is honoured; `verbose` forces debug level.
pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.try_init().ok();
}

/// List matching files under `config.root` to stdout.
pub fn run(config: &Config) -> Result<ListingSummary> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_to(config, &mut out)
}

/// Same as [`run`] with an arbitrary sink.
pub fn run_to<W: Write>(config: &Config, out: &mut W) -> Result<ListingSummary> {
    let filter = ExtensionFilter::new(config.extension());
    let mut walker = TwoLevelWalker::open(&config.root, filter)?;
    let summary = output::emit(&mut walker, out, config.sort())?;
    log::info!("{}: {}", config.root.display(), summary);
    Ok(summary)
}

pub fn get_library_info() -> LibraryInfo {
    LibraryInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct LibraryInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl std::fmt::Display for LibraryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{} - {}", self.name, self.version, self.description)
    }
}
