//! Writing listing results

use std::fmt;
use std::io::Write;

use crate::error::{ListError, Result};
use crate::listing::{TwoLevelWalker, WavEntry};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListingSummary {
    pub folders_scanned: usize,
    pub files_matched: usize,
}

impl fmt::Display for ListingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} file(s) matched in {} folder(s)", self.files_matched, self.folders_scanned)
    }
}

/// Write every entry from `walker` to `out`, one line each.
///
/// Unsorted output streams as the walk proceeds, so on failure the lines
/// written before the error stay in `out`. Sorted output is collected first
/// and nothing is written if the walk fails.
pub fn emit<W: Write>(walker: &mut TwoLevelWalker, out: &mut W, sort: bool) -> Result<ListingSummary> {
    let written = if sort {
        write_sorted(walker, out)
    } else {
        write_streaming(walker, out)
    };

    let flushed = out.flush().map_err(ListError::Output);
    let files_matched = written?;
    flushed?;

    Ok(ListingSummary {
        folders_scanned: walker.folders_scanned(),
        files_matched,
    })
}

fn write_streaming<W: Write>(walker: &mut TwoLevelWalker, out: &mut W) -> Result<usize> {
    let mut count = 0;
    for entry in walker {
        entry?.write_line(out).map_err(ListError::Output)?;
        count += 1;
    }
    Ok(count)
}

fn write_sorted<W: Write>(walker: &mut TwoLevelWalker, out: &mut W) -> Result<usize> {
    let mut entries = walker.collect::<Result<Vec<WavEntry>>>()?;
    entries.sort();
    for entry in &entries {
        entry.write_line(out).map_err(ListError::Output)?;
    }
    Ok(entries.len())
}
