//! Listing of a single directory, filtered and ordered for emission.

use crate::options::{DumpOptions, ListingOrder};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};

/// One directory of the walk with its immediate children, after the ignore
/// sets have been applied.
#[derive(Debug)]
pub(crate) struct TraversalNode {
    pub path: PathBuf,
    /// Directory levels between the root and `path`; the root is 0.
    pub depth: usize,
    pub subdirs: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    /// Subdirectories dropped by the directory ignore set.
    pub pruned_dirs: usize,
    /// Files dropped by the file ignore set.
    pub skipped_files: usize,
}

impl TraversalNode {
    /// Reads the immediate children of `path`.
    ///
    /// Symbolic links are never descended: a link resolving to a directory is
    /// dropped, anything else (including a dangling link or an entry whose
    /// type cannot be read) counts as a file.
    pub(crate) fn list(
        path: &Path,
        depth: usize,
        options: &DumpOptions,
    ) -> Result<Self, ignore::Error> {
        let mut builder = WalkBuilder::new(path);
        builder
            .standard_filters(false)
            .follow_links(false)
            .max_depth(Some(1));
        if options.order == ListingOrder::Lexicographic {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        let mut node = TraversalNode {
            path: path.to_path_buf(),
            depth,
            subdirs: Vec::new(),
            files: Vec::new(),
            pruned_dirs: 0,
            skipped_files: 0,
        };
        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => match unreadable_entry(path, &err) {
                    Some(child) => {
                        node.add_file(child, options);
                        continue;
                    }
                    None => return Err(err),
                },
            };
            if entry.depth() == 0 {
                continue;
            }
            match entry.file_type() {
                Some(ft) if ft.is_dir() => node.add_subdir(entry.into_path(), options),
                Some(ft) if ft.is_symlink() && points_to_dir(entry.path()) => {}
                _ => node.add_file(entry.into_path(), options),
            }
        }
        Ok(node)
    }

    fn add_subdir(&mut self, path: PathBuf, options: &DumpOptions) {
        if path.file_name().is_some_and(|n| options.ignore_dirs.contains(n)) {
            #[cfg(feature = "logging")]
            tracing::trace!("Pruning ignored directory {}", path.display());
            self.pruned_dirs += 1;
        } else {
            self.subdirs.push(path);
        }
    }

    fn add_file(&mut self, path: PathBuf, options: &DumpOptions) {
        if path.file_name().is_some_and(|n| options.ignore_files.contains(n)) {
            #[cfg(feature = "logging")]
            tracing::trace!("Skipping ignored file {}", path.display());
            self.skipped_files += 1;
        } else {
            self.files.push(path);
        }
    }

    /// Name shown on this directory's tree line.
    pub(crate) fn display_name(&self) -> String {
        base_name(&self.path)
    }
}

/// Last component of `path`, or the path as given when it has none (`.`,
/// `..`, `/`).
pub(crate) fn base_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

fn points_to_dir(link: &Path) -> bool {
    fs::metadata(link).is_ok_and(|m| m.is_dir())
}

/// Path of a child entry that the walker reported but could not inspect.
/// `None` when the error concerns `dir` itself, i.e. it cannot be listed.
fn unreadable_entry(dir: &Path, err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithDepth { depth, err } if *depth > 0 => unreadable_entry(dir, err),
        ignore::Error::WithPath { path, .. } if path != dir => Some(path.clone()),
        _ => None,
    }
}
