//! The output document: tree lines and marker-delimited content blocks,
//! written append-only.

use crate::TreeDumpError;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Spaces per depth level.
pub const INDENT: &str = "    ";

pub(crate) const FILE_BEGIN: &str = "--- ARQUIVO:";
pub(crate) const FILE_END: &str = "--- FIM DO ARQUIVO ---";
pub(crate) const READ_ERROR: &str = "Erro ao ler arquivo:";

/// Append-only writer for one dump. Every write error is fatal and carries
/// the document's path.
pub struct OutputDocument<W: Write> {
    writer: W,
    path: PathBuf,
}

impl OutputDocument<BufWriter<File>> {
    /// Creates or truncates the file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, TreeDumpError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| TreeDumpError::io(path, e))?;
        Ok(Self::new(BufWriter::new(file), path))
    }
}

impl<W: Write> OutputDocument<W> {
    pub fn new(writer: W, path: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            path: path.into(),
        }
    }

    /// `<indent>name/`
    pub fn directory_line(&mut self, depth: usize, name: &str) -> Result<(), TreeDumpError> {
        let line = format!("{}{}/\n", INDENT.repeat(depth), name);
        self.write(&line)
    }

    /// Opening marker of a content block. `depth` is the enclosing
    /// directory's depth; markers sit one level deeper.
    pub fn begin_file(&mut self, depth: usize, name: &str) -> Result<(), TreeDumpError> {
        let line = format!("{}{} {} ---\n", INDENT.repeat(depth + 1), FILE_BEGIN, name);
        self.write(&line)
    }

    /// File contents, verbatim.
    pub fn contents(&mut self, text: &str) -> Result<(), TreeDumpError> {
        self.write(text)
    }

    /// Replaces the contents of a file that could not be read.
    pub fn read_error(&mut self, error: &dyn Display) -> Result<(), TreeDumpError> {
        let line = format!("[{} {}]\n", READ_ERROR, error);
        self.write(&line)
    }

    pub fn end_file(&mut self, depth: usize) -> Result<(), TreeDumpError> {
        let line = format!("\n{}{}\n\n", INDENT.repeat(depth + 1), FILE_END);
        self.write(&line)
    }

    /// Flushes buffered output and hands back the writer.
    pub fn finish(mut self) -> Result<W, TreeDumpError> {
        self.writer
            .flush()
            .map_err(|e| TreeDumpError::io(&self.path, e))?;
        Ok(self.writer)
    }

    fn write(&mut self, text: &str) -> Result<(), TreeDumpError> {
        self.writer
            .write_all(text.as_bytes())
            .map_err(|e| TreeDumpError::io(&self.path, e))
    }
}
