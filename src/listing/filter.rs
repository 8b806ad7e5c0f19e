//! File name extension matching

use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::config::DEFAULT_EXTENSION;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extension: OsString,
}

impl ExtensionFilter {
    /// `extension` is given without the leading dot.
    pub fn new<S: Into<OsString>>(extension: S) -> Self {
        Self { extension: extension.into() }
    }

    pub fn wav() -> Self {
        Self::new(DEFAULT_EXTENSION)
    }

    pub fn extension(&self) -> &OsStr {
        &self.extension
    }

    /// Case-sensitive match on the last extension of the file name.
    ///
    /// Dotfiles such as `.wav` have no extension and never match.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension() == Some(self.extension.as_os_str())
    }
}
