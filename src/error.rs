//! Error Types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum ListError {
    #[error("Usage: {program} <root_dir>")]
    Usage { program: String },

    #[error("Traversal error: {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Output error: {0}")]
    Output(#[source] io::Error),

    #[error("Config error: {message}")]
    Config { message: String },
}

impl ListError {
    pub fn usage<S: Into<String>>(program: S) -> Self { Self::Usage { program: program.into() } }
    pub fn config<S: Into<String>>(msg: S) -> Self { Self::Config { message: msg.into() } }

    pub fn traversal<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::Traversal { path: path.into(), source }
    }

    /// Process exit status for this error. A missing argument is 1, any failed run is 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 1,
            _ => 2,
        }
    }

    /// True when stdout was closed by the reader (e.g. `list_files dir | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, ListError>;

impl From<toml::de::Error> for ListError {
    fn from(err: toml::de::Error) -> Self { Self::config(format!("Failed to parse config file: {}", err)) }
}
