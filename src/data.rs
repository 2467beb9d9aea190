//! Data structures shared by the traversal and aggregation steps.
//!
//! This module defines the small set of types that flow through a `rucat` run:
//! the files discovered while walking the tree, the suffixes that keep a file
//! out of the output, and the summary handed back once the run completes.

use std::path::PathBuf;

/// Suffixes excluded when no other set is supplied.
pub const DEFAULT_EXCLUDED_SUFFIXES: &[&str] = &[".png", ".xcf"];

/// Name of the output file created in the root directory by default.
pub const DEFAULT_OUTPUT_FILE: &str = "output_python.txt";

/// A regular file discovered during traversal.
///
/// # Fields
/// * `path` - The full path to the file
/// * `name` - The file's base name, used for suffix matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
}

impl FileEntry {
    /// Builds an entry from a path, taking the base name from its last component.
    ///
    /// Names that are not valid UTF-8 are converted lossily; they are only
    /// ever compared against ASCII suffixes.
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

/// An ordered set of file name suffixes.
///
/// Matching is case-sensitive: `.png` excludes `a.png` but not `b.PNG`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedSuffixes {
    suffixes: Vec<String>,
}

impl ExcludedSuffixes {
    /// Creates a set from the given suffixes, dropping duplicates but keeping
    /// first-seen order.
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set: Vec<String> = Vec::new();
        for suffix in suffixes {
            let suffix = suffix.into();
            if !set.contains(&suffix) {
                set.push(suffix);
            }
        }
        Self { suffixes: set }
    }

    /// Returns true if `name` ends with any suffix in the set.
    pub fn matches(&self, name: &str) -> bool {
        self.suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.suffixes
    }
}

impl Default for ExcludedSuffixes {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_SUFFIXES.iter().copied())
    }
}

/// Counters describing a completed run.
///
/// # Fields
/// * `files_written` - Files whose content was appended to the output
/// * `files_skipped` - Files left out because their name matched an excluded suffix
/// * `bytes_written` - UTF-8 bytes written to the output, separators included
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_written: u64,
    pub files_skipped: u64,
    pub bytes_written: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_entry_from_path() {
        let entry = FileEntry::from_path(PathBuf::from("/test/dir/file.txt"));
        assert_eq!(entry.name, "file.txt");
        assert_eq!(entry.path, PathBuf::from("/test/dir/file.txt"));
    }

    #[test]
    fn test_default_suffixes() {
        let suffixes = ExcludedSuffixes::default();
        assert_eq!(suffixes.as_slice(), &[".png".to_string(), ".xcf".to_string()]);
        assert!(suffixes.matches("logo.png"));
        assert!(suffixes.matches("layers.xcf"));
        assert!(!suffixes.matches("main.rs"));
    }

    #[test]
    fn test_suffix_matching_is_case_sensitive() {
        let suffixes = ExcludedSuffixes::default();
        assert!(suffixes.matches("a.png"));
        assert!(!suffixes.matches("b.PNG"));
        assert!(!suffixes.matches("c.Xcf"));
    }

    #[test]
    fn test_suffix_matches_whole_name_tail() {
        let suffixes = ExcludedSuffixes::new(["png"]);
        // Plain `ends_with`, no dot required.
        assert!(suffixes.matches("notapng"));
        assert!(!suffixes.matches("png.txt"));
    }

    #[test]
    fn test_duplicates_are_dropped_in_order() {
        let suffixes = ExcludedSuffixes::new([".xcf", ".png", ".xcf"]);
        assert_eq!(suffixes.as_slice(), &[".xcf".to_string(), ".png".to_string()]);
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let suffixes = ExcludedSuffixes::new(Vec::<String>::new());
        assert!(suffixes.as_slice().is_empty());
        assert!(!suffixes.matches("a.png"));
    }
}
