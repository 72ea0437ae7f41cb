//! # Treedump
//!
//! `treedump` flattens a directory tree into one text document: an indented
//! listing of every directory, with the full contents of each file placed
//! under its directory between begin/end markers.
//!
//! Subtrees named in the directory ignore set (`node_modules`, `.git`,
//! `build`, `dist`, `public` by default) are never visited, files named in the
//! file ignore set (`package-lock.json`, `yarn.lock`, `out.txt`, `.gitignore`)
//! are left out, and the document being written is never read back into
//! itself. A file that cannot be read as UTF-8 text gets an inline
//! `[Erro ao ler arquivo: ...]` annotation instead of aborting the run.
//!
//! # Features
//!
//! - `logging` (default): emits `tracing` events during the walk.
//!
//! # Example
//!
//! ```no_run
//! use treedump::{DumpBuilder, ListingOrder, TreeDumper};
//!
//! let options = DumpBuilder::new()
//!     .ignore_dir("target")
//!     .order(ListingOrder::Lexicographic)
//!     .build();
//!
//! let report = TreeDumper::new(options)
//!     .dump(".", "out.txt")
//!     .expect("Failed to dump directory");
//!
//! println!("{} files written to {}", report.files, report.output.display());
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{TreeDumper, dump};
pub use error::TreeDumpError;
pub use options::{
    DEFAULT_IGNORE_DIRS, DEFAULT_IGNORE_FILES, DumpBuilder, DumpOptions, IgnoreSet, ListingOrder,
};
pub use types::DumpReport;
