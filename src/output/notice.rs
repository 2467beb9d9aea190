//! Terminal completion notice.

use crate::data::RunSummary;
use humansize::{DECIMAL, format_size};
use std::path::Path;

/// The line printed to standard output after a successful run.
pub const COMPLETION_NOTICE: &str = "Concatenation complete.";

/// Prints the completion notice to stdout.
///
/// Printed once per run, after the output file is closed. Run statistics go
/// to the log rather than stdout.
pub fn render(summary: &RunSummary, output: &Path) {
    tracing::info!(
        files = summary.files_written,
        skipped = summary.files_skipped,
        size = %format_size(summary.bytes_written, DECIMAL),
        output = %output.display(),
        "run finished"
    );
    println!("{}", COMPLETION_NOTICE);
}
