//! Two-level directory listing
//!
//! Walks the immediate subfolders of a root directory and yields the regular
//! files in each one whose extension matches. Nothing deeper than one level
//! below the root is visited.

pub mod entry;
pub mod filter;
pub mod walker;

pub use entry::WavEntry;
pub use filter::ExtensionFilter;
pub use walker::TwoLevelWalker;

