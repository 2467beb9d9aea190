//! Main entry point for the `rucat` CLI application.
//!
//! `rucat` concatenates every non-image file under a directory into one
//! `output_python.txt`, for example to hand a whole codebase to a reviewer.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Installs the stderr logger
//! - Delegates the walk and the concatenation to [`Aggregator::run`]
//! - Prints a single completion notice once the output file is closed
//!
//! Any I/O error aborts the run; `main` returns it and the process exits
//! with a non-zero status.

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use rucat::output::render_notice;
use rucat::{Aggregator, Args, logging};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.debug)?;

    let aggregator = Aggregator::new(&args.path)
        .progress(!args.no_progress && std::io::stderr().is_terminal());
    let summary = aggregator.run()?;

    render_notice(&summary, &aggregator.resolved_output_path());
    Ok(())
}
