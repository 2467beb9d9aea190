//! Library crate for rucat
//!
//! `rucat` walks a directory tree and concatenates every file that is not an
//! image into a single text file, one block per file, each followed by a
//! newline.
//!
//! # Modules
//!
//! - [`aggregate`]: The concatenation loop ([`run`], [`Aggregator`])
//! - [`cli`]: Command-line interface definitions
//! - [`data`]: Core data structures (`FileEntry`, `ExcludedSuffixes`, `RunSummary`)
//! - [`decode`]: Permissive Latin-1 decoding
//! - [`logging`]: tracing subscriber setup
//! - [`output`]: Output file sink and completion notice
//! - [`scan`]: Recursive traversal

pub mod aggregate;
pub mod cli;
pub mod data;
pub mod decode;
pub mod logging;
pub mod output;
pub mod scan;

pub use aggregate::{Aggregator, run};
pub use cli::Args;
pub use data::{
    DEFAULT_EXCLUDED_SUFFIXES, DEFAULT_OUTPUT_FILE, ExcludedSuffixes, FileEntry, RunSummary,
};
