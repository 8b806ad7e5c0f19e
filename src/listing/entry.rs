//! A matched file and its output line

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io::{self, Write};

/// A matching file, named by its subfolder label and its own file name.
///
/// Ordering is by folder first, then file name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WavEntry {
    folder: OsString,
    file_name: OsString,
}

impl WavEntry {
    pub fn new<F: Into<OsString>, N: Into<OsString>>(folder: F, file_name: N) -> Self {
        Self {
            folder: folder.into(),
            file_name: file_name.into(),
        }
    }

    /// Write `folder/file_name\n`. The separator is always `/`.
    pub fn write_line<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_name(out, &self.folder)?;
        out.write_all(b"/")?;
        write_name(out, &self.file_name)?;
        out.write_all(b"\n")
    }
}

impl fmt::Display for WavEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.folder.to_string_lossy(), self.file_name.to_string_lossy())
    }
}

#[cfg(unix)]
fn write_name<W: Write>(out: &mut W, name: &OsStr) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(name.as_bytes())
}

#[cfg(not(unix))]
fn write_name<W: Write>(out: &mut W, name: &OsStr) -> io::Result<()> {
    out.write_all(name.to_string_lossy().as_bytes())
}
