//! The output file that receives the concatenated corpus.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A buffered, truncating writer over the output file.
///
/// Each block is written as UTF-8 text followed by a single `\n`.
#[derive(Debug)]
pub struct OutputSink {
    path: PathBuf,
    writer: BufWriter<File>,
    bytes_written: u64,
}

impl OutputSink {
    /// Creates (or truncates) the file at `path`.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            bytes_written: 0,
        })
    }

    /// Appends `text` and a trailing newline.
    pub fn write_block(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"))
            .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        self.bytes_written += text.len() as u64 + 1;
        Ok(())
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Flushes buffered data and syncs it, consuming the sink so the file is closed.
    pub fn finish(self) -> Result<u64> {
        let path = self.path;
        let file = self
            .writer
            .into_inner()
            .map_err(|e| e.into_error())
            .with_context(|| format!("Failed to flush {}", path.display()))?;
        file.sync_all()
            .with_context(|| format!("Failed to sync {}", path.display()))?;
        Ok(self.bytes_written)
    }
}
