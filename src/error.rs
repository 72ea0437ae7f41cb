use std::path::PathBuf;
use thiserror::Error;

/// Run-level failures. Per-file read errors never show up here; they are
/// written into the output document instead.
#[derive(Debug, Error)]
pub enum TreeDumpError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot list directory {path}: {source}")]
    Walk {
        path: PathBuf,
        source: ignore::Error,
    },
    #[error("Root is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Output path does not name a file: {0}")]
    InvalidOutput(PathBuf),
}
impl TreeDumpError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreeDumpError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn walk(path: impl Into<PathBuf>, source: ignore::Error) -> Self {
        TreeDumpError::Walk {
            path: path.into(),
            source,
        }
    }
}
