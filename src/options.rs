use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ffi::OsStr;

/// Directory names whose subtrees are never visited.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &["node_modules", ".git", "build", "dist", "public"];

/// File names that never get a content block.
pub const DEFAULT_IGNORE_FILES: &[&str] = &["package-lock.json", "yarn.lock", "out.txt", ".gitignore"];

/// A set of exact entry names to skip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IgnoreSet(BTreeSet<String>);

impl IgnoreSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Exact match on the entry's file name. Names that are not valid UTF-8
    /// can never match.
    pub fn contains(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.0.contains(n))
    }

    pub fn insert(&mut self, name: impl Into<String>) {
        self.0.insert(name.into());
    }
}

/// Order in which the entries of one directory are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingOrder {
    /// Whatever order the operating system lists them in. Not guaranteed
    /// stable across platforms or filesystems.
    #[default]
    Native,
    /// Sorted by file name.
    Lexicographic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpOptions {
    pub ignore_dirs: IgnoreSet,
    pub ignore_files: IgnoreSet,
    pub order: ListingOrder,
}
impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            ignore_dirs: IgnoreSet::new(DEFAULT_IGNORE_DIRS.iter().copied()),
            ignore_files: IgnoreSet::new(DEFAULT_IGNORE_FILES.iter().copied()),
            order: ListingOrder::Native,
        }
    }
}
#[derive(Debug, Default)]
pub struct DumpBuilder {
    options: DumpOptions,
}
impl DumpBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn ignore_dirs(mut self, dirs: IgnoreSet) -> Self {
        self.options.ignore_dirs = dirs;
        self
    }
    pub fn ignore_dir(mut self, name: impl Into<String>) -> Self {
        self.options.ignore_dirs.insert(name);
        self
    }
    pub fn ignore_files(mut self, files: IgnoreSet) -> Self {
        self.options.ignore_files = files;
        self
    }
    pub fn ignore_file(mut self, name: impl Into<String>) -> Self {
        self.options.ignore_files.insert(name);
        self
    }
    pub fn order(mut self, order: ListingOrder) -> Self {
        self.options.order = order;
        self
    }
    pub fn build(self) -> DumpOptions {
        self.options
    }
}
