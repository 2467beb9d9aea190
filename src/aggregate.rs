//! The traversal-and-concatenation loop.
//!
//! A run walks the root directory, drops files whose name ends with an
//! excluded suffix, decodes every remaining file as Latin-1 and appends the
//! text plus a newline to a single output file. The first I/O error aborts the
//! run; the output is left in whatever state it reached and every open handle
//! is released on the way out.
//!
//! The output file is never read back into itself: both the root and the
//! output path are canonicalized once the output exists, and the walk skips
//! that path along with any symlink resolving to it.

use crate::data::{DEFAULT_OUTPUT_FILE, ExcludedSuffixes, RunSummary};
use crate::decode::decode_latin1;
use crate::output::OutputSink;
use crate::scan::{check_root, walk_files};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Concatenates `root` into `output_path`, skipping names ending in any of
/// `excluded_suffixes`.
///
/// # Returns
/// * `Result<RunSummary>` - Counters for the completed run
///
/// # Errors
/// Returns an error if:
/// - The root is missing or not a directory
/// - The output file cannot be created, written or flushed
/// - A directory cannot be listed or a file cannot be read
pub fn run(
    root: &Path,
    excluded_suffixes: &ExcludedSuffixes,
    output_path: &Path,
) -> Result<RunSummary> {
    run_with_progress(root, excluded_suffixes, output_path, ProgressBar::hidden())
}

fn run_with_progress(
    root: &Path,
    excluded_suffixes: &ExcludedSuffixes,
    output_path: &Path,
    pb: ProgressBar,
) -> Result<RunSummary> {
    let result = concatenate(root, excluded_suffixes, output_path, &pb);
    pb.finish_and_clear();
    result
}

fn concatenate(
    root: &Path,
    excluded_suffixes: &ExcludedSuffixes,
    output_path: &Path,
    pb: &ProgressBar,
) -> Result<RunSummary> {
    check_root(root)?;

    let mut sink = OutputSink::create(output_path)?;

    let root = root
        .canonicalize()
        .with_context(|| format!("Failed to resolve root {}", root.display()))?;
    let output = output_path
        .canonicalize()
        .with_context(|| format!("Failed to resolve output {}", output_path.display()))?;

    debug!(
        root = %root.display(),
        output = %output.display(),
        excluded = ?excluded_suffixes.as_slice(),
        "starting run"
    );

    let mut summary = RunSummary::default();
    for entry in walk_files(&root, Some(output.as_path())) {
        let entry = entry?;
        pb.tick();

        if excluded_suffixes.matches(&entry.name) {
            debug!(path = %entry.path.display(), "excluded by suffix");
            summary.files_skipped += 1;
            continue;
        }

        let bytes = fs::read(&entry.path)
            .with_context(|| format!("Failed to read {}", entry.path.display()))?;
        sink.write_block(&decode_latin1(&bytes))?;
        summary.files_written += 1;
        debug!(path = %entry.path.display(), bytes = bytes.len(), "appended");
    }

    summary.bytes_written = sink.finish()?;

    Ok(summary)
}

/// A configured run, built up from defaults.
///
/// # Examples
///
/// ```no_run
/// use rucat::Aggregator;
///
/// let summary = Aggregator::new("src").progress(false).run()?;
/// println!("{} files", summary.files_written);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Aggregator {
    root: PathBuf,
    excluded_suffixes: ExcludedSuffixes,
    output_path: Option<PathBuf>,
    progress: bool,
}

impl Aggregator {
    /// Starts from the default suffixes, with the output file placed in `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            excluded_suffixes: ExcludedSuffixes::default(),
            output_path: None,
            progress: false,
        }
    }

    pub fn excluded_suffixes(mut self, suffixes: ExcludedSuffixes) -> Self {
        self.excluded_suffixes = suffixes;
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Shows a spinner on stderr while the tree is walked.
    pub fn progress(mut self, enabled: bool) -> Self {
        self.progress = enabled;
        self
    }

    /// The output path this run will write, `<root>/output_python.txt` unless set.
    pub fn resolved_output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| self.root.join(DEFAULT_OUTPUT_FILE))
    }

    pub fn run(&self) -> Result<RunSummary> {
        let pb = if self.progress {
            spinner()?
        } else {
            ProgressBar::hidden()
        };
        run_with_progress(
            &self.root,
            &self.excluded_suffixes,
            &self.resolved_output_path(),
            pb,
        )
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(".")
    }
}

fn spinner() -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner} Concatenating files... [{elapsed}]")
            .context("Failed to set progress template")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}
