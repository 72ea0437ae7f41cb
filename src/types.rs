use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Summary of one dump run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpReport {
    /// Where the document was written.
    pub output: PathBuf,
    /// Directories that got a tree line, the root included.
    pub directories: usize,
    /// Files that got a content block, whether or not the read succeeded.
    pub files: usize,
    /// Files whose block holds a read-error annotation instead of contents.
    pub failed_files: usize,
    /// Files left out by the file ignore set or because they are the output
    /// document itself.
    pub skipped_files: usize,
    /// Directories whose subtree was never visited.
    pub pruned_dirs: usize,
    /// Subdirectories that could not be listed and were left out.
    pub unreadable_dirs: usize,
}
