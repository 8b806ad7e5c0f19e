//! Streaming walk over a root directory and its immediate subfolders

use std::ffi::OsString;
use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

use crate::error::{ListError, Result};
use super::entry::WavEntry;
use super::filter::ExtensionFilter;

/// Subfolder currently being listed.
struct Subfolder {
    label: OsString,
    path: PathBuf,
    entries: ReadDir,
}

/// Iterator over matching files one level below `root`.
///
/// Entries come out in the order the filesystem enumerates them. Both the
/// directory and the regular-file checks follow symbolic links. The first
/// enumeration error is yielded once and the iterator is finished after it.
pub struct TwoLevelWalker {
    root: PathBuf,
    filter: ExtensionFilter,
    outer: ReadDir,
    current: Option<Subfolder>,
    folders_scanned: usize,
    finished: bool,
}

impl TwoLevelWalker {
    /// Open `root` for listing. Fails if it does not exist or is not a readable directory.
    pub fn open<P: AsRef<Path>>(root: P, filter: ExtensionFilter) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let outer = fs::read_dir(&root).map_err(|e| ListError::traversal(&root, e))?;
        log::debug!("Listing {} (extension {:?})", root.display(), filter.extension());

        Ok(Self {
            root,
            filter,
            outer,
            current: None,
            folders_scanned: 0,
            finished: false,
        })
    }

    /// Number of subfolders opened so far.
    pub fn folders_scanned(&self) -> usize {
        self.folders_scanned
    }

    fn advance(&mut self) -> Result<Option<WavEntry>> {
        loop {
            if let Some(sub) = self.current.as_mut() {
                if let Some(entry) = sub.entries.next() {
                    let path = entry.map_err(|e| ListError::traversal(&sub.path, e))?.path();
                    if path.is_file() && self.filter.matches(&path) {
                        if let Some(name) = path.file_name() {
                            return Ok(Some(WavEntry::new(sub.label.clone(), name)));
                        }
                    }
                    log::trace!("Skipping {}", path.display());
                    continue;
                }
                log::trace!("Done with {}", sub.path.display());
            }
            self.current = None;

            let Some(entry) = self.outer.next() else {
                return Ok(None);
            };
            let entry = entry.map_err(|e| ListError::traversal(&self.root, e))?;
            let path = entry.path();
            if !path.is_dir() {
                log::trace!("Skipping non-directory {}", path.display());
                continue;
            }

            let entries = fs::read_dir(&path).map_err(|e| ListError::traversal(&path, e))?;
            self.folders_scanned += 1;
            log::debug!("Scanning {}", path.display());
            self.current = Some(Subfolder {
                label: entry.file_name(),
                path,
                entries,
            });
        }
    }
}

impl Iterator for TwoLevelWalker {
    type Item = Result<WavEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.advance() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for TwoLevelWalker {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(path).unwrap();
    }

    fn lines(root: &Path) -> BTreeSet<String> {
        TwoLevelWalker::open(root, ExtensionFilter::wav())
            .unwrap()
            .map(|e| e.unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_two_subfolders() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("A/x.wav"));
        touch(&root.join("A/y.txt"));
        touch(&root.join("B/z.wav"));
        touch(&root.join("top.wav"));

        let expected: BTreeSet<String> = ["A/x.wav", "B/z.wav"].iter().map(|s| s.to_string()).collect();
        assert_eq!(lines(root), expected);
    }

    #[test]
    fn test_no_subfolders() {
        let temp_dir = TempDir::new().unwrap();
        touch(&temp_dir.path().join("loose.wav"));

        let mut walker = TwoLevelWalker::open(temp_dir.path(), ExtensionFilter::wav()).unwrap();
        assert!(walker.next().is_none());
        assert_eq!(walker.folders_scanned(), 0);
    }

    #[test]
    fn test_skips_nested_and_uppercase() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(&root.join("A/sound.WAV"));
        touch(&root.join("A/deep/inner.wav"));
        touch(&root.join("A/.wav"));
        fs::create_dir_all(root.join("A/dir.wav")).unwrap();
        touch(&root.join("A/ok.wav"));

        let expected: BTreeSet<String> = ["A/ok.wav".to_string()].into_iter().collect();
        assert_eq!(lines(root), expected);
    }

    #[test]
    fn test_counts_folders() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("empty")).unwrap();
        touch(&root.join("A/x.wav"));

        let mut walker = TwoLevelWalker::open(root, ExtensionFilter::wav()).unwrap();
        let found: Vec<_> = walker.by_ref().collect::<Result<_>>().unwrap();
        assert_eq!(found, vec![WavEntry::new("A", "x.wav")]);
        assert_eq!(walker.folders_scanned(), 2);
    }

    #[test]
    fn test_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let err = TwoLevelWalker::open(&missing, ExtensionFilter::wav()).err().unwrap();
        assert!(matches!(err, ListError::Traversal { .. }));
    }

    #[test]
    fn test_root_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.wav");
        touch(&file);
        assert!(TwoLevelWalker::open(&file, ExtensionFilter::wav()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_follows_symlinked_folder() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("root");
        let elsewhere = temp_dir.path().join("elsewhere");
        touch(&elsewhere.join("s.wav"));
        fs::create_dir_all(&root).unwrap();
        std::os::unix::fs::symlink(&elsewhere, root.join("L")).unwrap();

        let expected: BTreeSet<String> = ["L/s.wav".to_string()].into_iter().collect();
        assert_eq!(lines(&root), expected);
    }

    #[test]
    fn test_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for folder in ["a", "b", "c"] {
            for file in ["1.wav", "2.wav", "3.mp3"] {
                touch(&root.join(folder).join(file));
            }
        }
        let first = lines(root);
        assert_eq!(first.len(), 6);
        assert_eq!(first, lines(root));
    }
}
