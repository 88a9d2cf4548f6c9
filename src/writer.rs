/*!
 * Streaming text sink for accumulated files
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Separator emitted after every accumulated file
pub const FILE_SEPARATOR: &str =
    "\n\n//------------------------------------------------------------------------------\n\n";

/// Buffered writer that owns the output artifact for the duration of a run
pub struct AccumulateWriter {
    out: BufWriter<File>,
    path: PathBuf,
}

impl AccumulateWriter {
    /// Create (truncating) the output artifact
    ///
    /// Failure here is fatal: a run must not start without its sink.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;

        Ok(Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Absolute path of the artifact, for self-exclusion during traversal
    pub fn resolved_path(&self) -> io::Result<PathBuf> {
        self.path.canonicalize()
    }

    /// Append one file as a single `(header, content, separator)` unit
    ///
    /// The triple is composed up front and handed to the sink in one call,
    /// so a failed write aborts the run instead of leaving a silently
    /// truncated fragment. Content is passed through byte for byte.
    pub fn write_file(
        &mut self,
        display_path: &str,
        size_bytes: u64,
        content: &[u8],
    ) -> io::Result<()> {
        let header = format!("// File: {} ({} bytes)\n", display_path, size_bytes);

        let mut chunk = Vec::with_capacity(header.len() + content.len() + FILE_SEPARATOR.len());
        chunk.extend_from_slice(header.as_bytes());
        chunk.extend_from_slice(content);
        chunk.extend_from_slice(FILE_SEPARATOR.as_bytes());

        self.out.write_all(&chunk)
    }

    /// Flush buffered output; an error here is as fatal as a failed write
    pub fn finish(mut self) -> io::Result<()> {
        self.out.flush()
    }
}
