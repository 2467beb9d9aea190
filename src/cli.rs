//! CLI interface definitions for the `rucat` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes
//! [`Args`], the struct parsed from CLI inputs. Running with no arguments
//! concatenates the current directory into `output_python.txt`.
//!
//! # Example
//!
//! ```bash
//! rucat
//! rucat path/to/project --debug
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for `rucat`.
///
/// The excluded suffixes (`.png`, `.xcf`) and the output file name are fixed.
#[derive(Parser, Debug)]
#[command(name = "rucat", author = "Sam Green", version, about)]
pub struct Args {
    /// Directory to concatenate (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Enable debug logging on stderr
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Hide the progress spinner
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_current_directory() {
        let args = Args::try_parse_from(["rucat"]).unwrap();
        assert_eq!(args.path, PathBuf::from("."));
        assert!(!args.debug);
        assert!(!args.no_progress);
    }

    #[test]
    fn test_explicit_path_and_flags() {
        let args = Args::try_parse_from(["rucat", "src", "--debug", "--no-progress"]).unwrap();
        assert_eq!(args.path, PathBuf::from("src"));
        assert!(args.debug);
        assert!(args.no_progress);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["rucat", "--exclude", ".rs"]).is_err());
    }
}
