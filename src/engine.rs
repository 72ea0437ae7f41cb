use crate::error::TreeDumpError;
use crate::options::DumpOptions;
use crate::output::OutputDocument;
use crate::tree::{TraversalNode, base_name};
use crate::types::DumpReport;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Flattens directory trees into a single text document.
#[derive(Debug, Clone, Default)]
pub struct TreeDumper {
    options: DumpOptions,
}

impl TreeDumper {
    pub fn new(options: DumpOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DumpOptions {
        &self.options
    }

    /// Writes the listing and contents of `root` to `output`, creating or
    /// truncating it.
    ///
    /// The root is listed before `output` is opened, so a missing or
    /// unreadable root leaves an existing output untouched.
    ///
    /// # Errors
    ///
    /// Fails when the root is not a listable directory or when the output
    /// cannot be created or written. Unreadable files are not errors: their
    /// block carries an annotation instead of contents.
    pub fn dump(
        &self,
        root: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<DumpReport, TreeDumpError> {
        let root = root.as_ref();
        let output = output.as_ref();
        #[cfg(feature = "logging")]
        tracing::debug!(
            "Dumping {} into {}",
            root.display(),
            output.display()
        );
        if output.file_name().is_none() {
            return Err(TreeDumpError::InvalidOutput(output.to_path_buf()));
        }
        let metadata = fs::metadata(root).map_err(|e| TreeDumpError::io(root, e))?;
        if !metadata.is_dir() {
            return Err(TreeDumpError::NotADirectory(root.to_path_buf()));
        }
        let root_node =
            TraversalNode::list(root, 0, &self.options).map_err(|e| TreeDumpError::walk(root, e))?;

        let doc = OutputDocument::create(output)?;
        let mut run = Run {
            options: &self.options,
            doc,
            own_output: OwnOutput::resolve(output)?,
            report: DumpReport {
                output: output.to_path_buf(),
                ..Default::default()
            },
        };
        run.visit(root_node)?;
        run.doc.finish()?;

        #[cfg(feature = "logging")]
        tracing::info!(
            "Wrote {} directories and {} files to {} ({} unreadable)",
            run.report.directories,
            run.report.files,
            output.display(),
            run.report.failed_files
        );
        Ok(run.report)
    }
}

/// Dumps `root` into `output` with the default ignore sets.
pub fn dump(root: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<DumpReport, TreeDumpError> {
    TreeDumper::default().dump(root, output)
}

/// Identity of the document being written, so the walk never reads it back
/// whatever name or alias it is reached through.
struct OwnOutput {
    #[cfg(unix)]
    inode: (u64, u64),
    #[cfg(not(unix))]
    canonical: std::path::PathBuf,
}

impl OwnOutput {
    #[cfg(unix)]
    fn resolve(output: &Path) -> Result<Self, TreeDumpError> {
        use std::os::unix::fs::MetadataExt;
        let meta = fs::metadata(output).map_err(|e| TreeDumpError::io(output, e))?;
        Ok(Self {
            inode: (meta.dev(), meta.ino()),
        })
    }

    #[cfg(not(unix))]
    fn resolve(output: &Path) -> Result<Self, TreeDumpError> {
        let canonical = fs::canonicalize(output).map_err(|e| TreeDumpError::io(output, e))?;
        Ok(Self { canonical })
    }

    #[cfg(unix)]
    fn is(&self, path: &Path) -> bool {
        use std::os::unix::fs::MetadataExt;
        fs::metadata(path).is_ok_and(|m| (m.dev(), m.ino()) == self.inode)
    }

    #[cfg(not(unix))]
    fn is(&self, path: &Path) -> bool {
        fs::canonicalize(path).is_ok_and(|p| p == self.canonical)
    }
}

struct Run<'a, W: Write> {
    options: &'a DumpOptions,
    doc: OutputDocument<W>,
    own_output: OwnOutput,
    report: DumpReport,
}

impl<W: Write> Run<'_, W> {
    fn visit(&mut self, node: TraversalNode) -> Result<(), TreeDumpError> {
        self.doc.directory_line(node.depth, &node.display_name())?;
        self.report.directories += 1;
        self.report.pruned_dirs += node.pruned_dirs;
        self.report.skipped_files += node.skipped_files;

        for file in &node.files {
            if self.own_output.is(file) {
                #[cfg(feature = "logging")]
                tracing::trace!("Skipping the output document {}", file.display());
                self.report.skipped_files += 1;
                continue;
            }
            self.file_block(node.depth, file)?;
        }

        for subdir in &node.subdirs {
            match TraversalNode::list(subdir, node.depth + 1, self.options) {
                Ok(child) => self.visit(child)?,
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!("Cannot list {}: {}", subdir.display(), _e);
                    self.report.unreadable_dirs += 1;
                }
            }
        }
        Ok(())
    }

    fn file_block(&mut self, depth: usize, path: &Path) -> Result<(), TreeDumpError> {
        self.doc.begin_file(depth, &base_name(path))?;
        match fs::read_to_string(path) {
            Ok(text) => self.doc.contents(&text)?,
            Err(e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("Cannot read {}: {}", path.display(), e);
                self.report.failed_files += 1;
                self.doc.read_error(&e)?;
            }
        }
        self.doc.end_file(depth)?;
        self.report.files += 1;
        Ok(())
    }
}
