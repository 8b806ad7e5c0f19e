//! Configuration management for directory listing

use crate::error::{ListError, Result};
use clap::Parser;
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSION: &str = "wav";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(skip)]
    pub root: PathBuf,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Extension to match, without the leading dot. Compared case-sensitively.
    pub extension: String,
    pub sort: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            listing: ListingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            sort: false,
        }
    }
}

impl Config {
    pub fn extension(&self) -> &str {
        &self.listing.extension
    }

    pub fn sort(&self) -> bool {
        self.listing.sort
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose
    }
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "list_files",
    about = "List .wav files in the immediate subfolders of a directory",
    after_help = "Put `--` before a ROOT_DIR whose name starts with '-', e.g. `list_files -- -v`.",
    version
)]
pub struct Args {
    /// Root directory whose subfolders are scanned
    #[arg(value_name = "ROOT_DIR")]
    pub root: Option<PathBuf>,

    #[arg(short = 'e', long = "ext", help = "File extension to match (default: wav)")]
    pub extension: Option<String>,

    #[arg(long = "sort", help = "Sort output lines instead of printing in directory order")]
    pub sort: bool,

    #[arg(short = 'v', long = "verbose", help = "Enable debug logging on stderr")]
    pub verbose: bool,

    #[arg(short = 'c', long = "config", help = "Config file path (TOML format)")]
    pub config_file: Option<PathBuf>,

    /// Anything after the root is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<OsString>,
}

impl Config {
    /// Build the config from parsed arguments, layering flags over the config file.
    ///
    /// A missing root argument is a usage error.
    pub fn from_args_and_config(args: Args) -> Result<Self> {
        let root = args.root.ok_or_else(|| ListError::usage("list_files"))?;

        let mut config = if let Some(config_path) = &args.config_file {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        config.root = root;
        if let Some(ext) = args.extension {
            config.listing.extension = ext;
        }
        config.listing.sort |= args.sort;
        config.logging.verbose |= args.verbose;

        config.listing.extension = normalize_extension(&config.listing.extension);
        config.validate()?;

        Ok(config)
    }

    /// Load config from TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ListError::config(format!("Failed to read config file: {}", e)))?;

        Ok(toml::from_str(&content)?)
    }

    pub fn validate(&self) -> Result<()> {
        let ext = &self.listing.extension;
        if ext.is_empty() {
            return Err(ListError::config("Extension cannot be empty"));
        }
        if ext.contains(['/', '\\']) {
            return Err(ListError::config(format!("Extension cannot contain a path separator: {}", ext)));
        }
        // Path::extension only ever sees the part after the last dot
        if ext.contains('.') {
            return Err(ListError::config(format!("Extension must be a single component: {}", ext)));
        }

        Ok(())
    }
}

/// `.wav` and `wav` mean the same thing on the command line.
fn normalize_extension(ext: &str) -> String {
    ext.strip_prefix('.').unwrap_or(ext).to_string()
}
